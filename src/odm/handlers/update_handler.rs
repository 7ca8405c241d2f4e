//! # 更新操作处理器

use crate::error::QuickDbResult;
use crate::model::HookPoint;
use crate::odm::manager_core::{write_result_value, CollectionOperations};
use crate::odm::types::*;
use crate::store::StoreWriteResult;
use crate::types::*;
use rat_logger::debug;

impl CollectionOperations {
    /// 编译条件并执行更新；条件为空或数据为空时返回 None
    async fn update_records(
        &self,
        operation: &str,
        where_clause: WhereOptions,
        data: Record,
        returning: bool,
    ) -> QuickDbResult<Option<StoreWriteResult>> {
        let Some(store) = self.store() else {
            return Ok(None);
        };

        let conditions = self.compile_where(Some(&where_clause))?;
        if conditions.is_empty() {
            self.guard_refused(operation);
            return Ok(None);
        }

        let data = self.prepare_record(data, true)?;
        if data.is_empty() {
            debug!("{} 没有可写入的列: collection={}", operation, self.slug());
            return Ok(None);
        }

        self.run_hooks(
            HookPoint::BeforeUpdate,
            self.hook_context(HookPoint::BeforeUpdate)
                .with_data(DataValue::Object(data.clone()))
                .with_where(where_clause.clone()),
        )
        .await?;

        debug!("处理更新请求: collection={}, 条件数={}", self.slug(), conditions.len());
        let result = store.update(self.columns(), &conditions, &data, returning).await?;

        self.run_hooks(
            HookPoint::AfterUpdate,
            self.hook_context(HookPoint::AfterUpdate)
                .with_data(DataValue::Object(data))
                .with_where(where_clause)
                .with_result(write_result_value(&result)),
        )
        .await?;

        Ok(Some(result))
    }

    /// 处理 update
    pub(crate) async fn handle_update(&self, options: UpdateOptions) -> QuickDbResult<Option<Record>> {
        let result = self
            .update_records("update", options.where_clause, options.data, options.returning)
            .await?;
        match result {
            Some(result) if options.returning => Ok(result.rows.into_iter().next()),
            _ => Ok(None),
        }
    }

    /// 处理 updateMany
    pub(crate) async fn handle_update_many(&self, options: UpdateManyOptions) -> QuickDbResult<u64> {
        let result = self
            .update_records("updateMany", options.where_clause, options.data, false)
            .await?;
        Ok(result.map(|r| r.affected_or_zero()).unwrap_or(0))
    }
}
