//! # 创建操作处理器

use crate::error::QuickDbResult;
use crate::model::HookPoint;
use crate::odm::manager_core::{records_value, write_result_value, CollectionOperations};
use crate::odm::types::*;
use crate::store::StoreWriteResult;
use crate::types::*;
use rat_logger::debug;

impl CollectionOperations {
    /// 填充默认值、校验、执行钩子并插入
    async fn insert_records(&self, records: Vec<Record>, returning: bool) -> QuickDbResult<StoreWriteResult> {
        let Some(store) = self.store() else {
            return Ok(StoreWriteResult::default());
        };

        let rows = records
            .into_iter()
            .map(|record| self.prepare_record(record, false))
            .collect::<QuickDbResult<Vec<_>>>()?;

        self.run_hooks(
            HookPoint::BeforeCreate,
            self.hook_context(HookPoint::BeforeCreate)
                .with_data(records_value(&rows)),
        )
        .await?;

        debug!("处理创建请求: collection={}, 行数={}", self.slug(), rows.len());
        let result = store.insert(self.columns(), &rows, returning).await?;

        self.run_hooks(
            HookPoint::AfterCreate,
            self.hook_context(HookPoint::AfterCreate)
                .with_data(records_value(&rows))
                .with_result(write_result_value(&result)),
        )
        .await?;

        Ok(result)
    }

    /// 处理 create
    pub(crate) async fn handle_create(&self, options: CreateOptions) -> QuickDbResult<Option<Record>> {
        if self.is_placeholder() {
            return Ok(None);
        }

        let records = options.data.into_records();
        if records.is_empty() {
            debug!("create 没有提供数据: collection={}", self.slug());
            return Ok(None);
        }

        let result = self.insert_records(records, options.returning).await?;
        if options.returning {
            Ok(result.rows.into_iter().next())
        } else {
            Ok(None)
        }
    }

    /// 处理 createMany
    pub(crate) async fn handle_create_many(&self, options: CreateManyOptions) -> QuickDbResult<u64> {
        if self.is_placeholder() {
            return Ok(0);
        }
        if options.data.is_empty() {
            debug!("createMany 没有提供数据: collection={}", self.slug());
            return Ok(0);
        }

        let result = self.insert_records(options.data, false).await?;
        Ok(result.affected_or_zero())
    }
}
