//! # OdmOperations trait实现

use crate::error::QuickDbResult;
use crate::odm::manager_core::CollectionOperations;
use crate::odm::traits::OdmOperations;
use crate::odm::types::*;
use crate::types::Record;
use async_trait::async_trait;

#[async_trait]
impl OdmOperations for CollectionOperations {
    async fn find_many(&self, options: FindManyOptions) -> QuickDbResult<Vec<Record>> {
        self.handle_find_many(options).await
    }

    async fn find_unique(&self, options: FindUniqueOptions) -> QuickDbResult<Option<Record>> {
        self.handle_find_unique(options).await
    }

    async fn find_first(&self, options: FindFirstOptions) -> QuickDbResult<Option<Record>> {
        self.handle_find_first(options).await
    }

    async fn create(&self, options: CreateOptions) -> QuickDbResult<Option<Record>> {
        self.handle_create(options).await
    }

    async fn create_many(&self, options: CreateManyOptions) -> QuickDbResult<u64> {
        self.handle_create_many(options).await
    }

    async fn update(&self, options: UpdateOptions) -> QuickDbResult<Option<Record>> {
        self.handle_update(options).await
    }

    async fn update_many(&self, options: UpdateManyOptions) -> QuickDbResult<u64> {
        self.handle_update_many(options).await
    }

    async fn delete(&self, options: DeleteOptions) -> QuickDbResult<Option<Record>> {
        self.handle_delete(options).await
    }

    async fn delete_many(&self, options: DeleteManyOptions) -> QuickDbResult<u64> {
        self.handle_delete_many(options).await
    }

    async fn count(&self, options: CountOptions) -> QuickDbResult<u64> {
        self.handle_count(options).await
    }

    async fn exists(&self, options: ExistsOptions) -> QuickDbResult<bool> {
        self.handle_exists(options).await
    }
}
