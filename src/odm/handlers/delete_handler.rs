//! # 删除操作处理器

use crate::error::QuickDbResult;
use crate::model::HookPoint;
use crate::odm::manager_core::{write_result_value, CollectionOperations};
use crate::odm::types::*;
use crate::store::StoreWriteResult;
use crate::types::*;
use rat_logger::debug;

impl CollectionOperations {
    async fn delete_records(
        &self,
        operation: &str,
        where_clause: WhereOptions,
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

        self.run_hooks(
            HookPoint::BeforeDelete,
            self.hook_context(HookPoint::BeforeDelete)
                .with_where(where_clause.clone()),
        )
        .await?;

        debug!("处理删除请求: collection={}, 条件数={}", self.slug(), conditions.len());
        let result = store.delete(self.columns(), &conditions, returning).await?;

        self.run_hooks(
            HookPoint::AfterDelete,
            self.hook_context(HookPoint::AfterDelete)
                .with_where(where_clause)
                .with_result(write_result_value(&result)),
        )
        .await?;

        Ok(Some(result))
    }

    /// 处理 delete
    pub(crate) async fn handle_delete(&self, options: DeleteOptions) -> QuickDbResult<Option<Record>> {
        let result = self
            .delete_records("delete", options.where_clause, options.returning)
            .await?;
        match result {
            Some(result) if options.returning => Ok(result.rows.into_iter().next()),
            _ => Ok(None),
        }
    }

    /// 处理 deleteMany
    pub(crate) async fn handle_delete_many(&self, options: DeleteManyOptions) -> QuickDbResult<u64> {
        let result = self
            .delete_records("deleteMany", options.where_clause, false)
            .await?;
        Ok(result.map(|r| r.affected_or_zero()).unwrap_or(0))
    }
}
