//! # 集合操作核心
//!
//! 每个集合一个 [`CollectionOperations`]，闭包持有只读的元数据与共享的存储层。
//! 未配置存储层时处于占位模式：所有操作返回空结果，不访问任何存储。

use crate::compiler;
use crate::error::QuickDbResult;
use crate::model::{HookContext, HookPoint};
use crate::odm::types::CollectionMeta;
use crate::store::{Store, StoreWriteResult};
use crate::table::TableSchema;
use crate::types::*;
use rat_logger::debug;
use std::fmt;
use std::sync::Arc;

/// 绑定到单个集合的操作集
#[derive(Clone)]
pub struct CollectionOperations {
    meta: Arc<CollectionMeta>,
    store: Option<Arc<dyn Store>>,
}

impl CollectionOperations {
    pub fn new(meta: Arc<CollectionMeta>, store: Option<Arc<dyn Store>>) -> Self {
        Self { meta, store }
    }

    pub fn meta(&self) -> &CollectionMeta {
        &self.meta
    }

    pub fn slug(&self) -> &str {
        self.meta.slug()
    }

    pub fn columns(&self) -> &TableSchema {
        &self.meta.columns
    }

    /// 是否处于占位模式（没有存储层）
    pub fn is_placeholder(&self) -> bool {
        self.store.is_none()
    }

    pub(crate) fn store(&self) -> Option<&Arc<dyn Store>> {
        self.store.as_ref()
    }

    pub(crate) fn compile_where(&self, where_clause: Option<&WhereOptions>) -> QuickDbResult<Vec<QueryCondition>> {
        match where_clause {
            Some(w) => compiler::compile_where(&self.meta.columns, w),
            None => Ok(Vec::new()),
        }
    }

    /// 准备写入的数据：填充默认值（仅新增）、校验、丢弃未映射的键
    pub(crate) fn prepare_record(&self, record: Record, partial: bool) -> QuickDbResult<Record> {
        let collection = &self.meta.collection;
        let record = if partial {
            record
        } else {
            collection.apply_defaults(record)
        };
        collection.validate_record(&record, partial)?;
        Ok(compiler::compile_data(&self.meta.columns, record))
    }

    /// 按注册顺序依次执行钩子，任一钩子失败即中止并原样返回其错误
    pub(crate) async fn run_hooks(&self, point: HookPoint, ctx: HookContext) -> QuickDbResult<()> {
        let hooks = self.meta.hooks.get(point);
        if hooks.is_empty() {
            return Ok(());
        }
        crate::debug_log!("执行钩子: collection={}, point={}, 数量={}", self.slug(), point, hooks.len());
        for hook in hooks {
            hook.call(&ctx).await?;
        }
        Ok(())
    }

    pub(crate) fn hook_context(&self, point: HookPoint) -> HookContext {
        HookContext::new(self.slug(), point)
    }

    pub(crate) fn guard_refused(&self, operation: &str) {
        debug!("{} 的 where 编译为空条件，拒绝执行: collection={}", operation, self.slug());
    }
}

impl fmt::Debug for CollectionOperations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionOperations")
            .field("slug", &self.slug())
            .field("store", &self.store.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// 把写操作结果转为钩子上下文中的 result：`{"affected": .., "rows": [..]}`
pub(crate) fn write_result_value(result: &StoreWriteResult) -> DataValue {
    let mut object = Record::new();
    object.insert(
        "affected".to_string(),
        result
            .affected
            .map(|n| DataValue::Int(n as i64))
            .unwrap_or(DataValue::Null),
    );
    object.insert(
        "rows".to_string(),
        DataValue::Array(result.rows.iter().cloned().map(DataValue::Object).collect()),
    );
    DataValue::Object(object)
}

pub(crate) fn records_value(records: &[Record]) -> DataValue {
    match records {
        [single] => DataValue::Object(single.clone()),
        many => DataValue::Array(many.iter().cloned().map(DataValue::Object).collect()),
    }
}
