//! # 查询操作处理器

use crate::compiler;
use crate::error::QuickDbResult;
use crate::odm::manager_core::CollectionOperations;
use crate::odm::types::*;
use crate::types::*;
use rat_logger::debug;

impl CollectionOperations {
    /// 处理 findMany
    pub(crate) async fn handle_find_many(&self, options: FindManyOptions) -> QuickDbResult<Vec<Record>> {
        let Some(store) = self.store() else {
            return Ok(Vec::new());
        };

        let conditions = self.compile_where(options.where_clause.as_ref())?;
        let query_options = compiler::compile_query_options(
            self.columns(),
            options.order_by.as_ref(),
            options.limit,
            options.offset,
            options.select.as_ref(),
        );
        debug!("处理 findMany: collection={}, 条件数={}", self.slug(), conditions.len());
        store.select(self.columns(), &conditions, &query_options).await
    }

    /// 处理 findUnique
    pub(crate) async fn handle_find_unique(&self, options: FindUniqueOptions) -> QuickDbResult<Option<Record>> {
        let Some(store) = self.store() else {
            return Ok(None);
        };

        let conditions = self.compile_where(Some(&options.where_clause))?;
        if conditions.is_empty() {
            self.guard_refused("findUnique");
            return Ok(None);
        }

        let query_options =
            compiler::compile_query_options(self.columns(), None, Some(1), None, options.select.as_ref());
        let rows = store.select(self.columns(), &conditions, &query_options).await?;
        Ok(rows.into_iter().next())
    }

    /// 处理 findFirst
    pub(crate) async fn handle_find_first(&self, options: FindFirstOptions) -> QuickDbResult<Option<Record>> {
        let rows = self
            .handle_find_many(FindManyOptions {
                where_clause: Some(options.where_clause),
                order_by: options.order_by,
                limit: Some(1),
                offset: None,
                select: options.select,
            })
            .await?;
        Ok(rows.into_iter().next())
    }

    /// 处理 count
    pub(crate) async fn handle_count(&self, options: CountOptions) -> QuickDbResult<u64> {
        let Some(store) = self.store() else {
            return Ok(0);
        };

        let conditions = self.compile_where(options.where_clause.as_ref())?;
        store.count(self.columns(), &conditions).await
    }

    /// 处理 exists
    pub(crate) async fn handle_exists(&self, options: ExistsOptions) -> QuickDbResult<bool> {
        let Some(store) = self.store() else {
            return Ok(false);
        };

        let conditions = self.compile_where(Some(&options.where_clause))?;
        if conditions.is_empty() {
            self.guard_refused("exists");
            return Ok(false);
        }

        let query_options = QueryOptions::new()
            .with_pagination(PaginationConfig { skip: 0, limit: Some(1) })
            .with_fields(vec![crate::model::ID_FIELD.to_string()]);
        let rows = store.select(self.columns(), &conditions, &query_options).await?;
        Ok(!rows.is_empty())
    }
}
