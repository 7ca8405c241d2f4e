//! # ODM操作接口定义

use crate::error::QuickDbResult;
use crate::odm::types::*;
use crate::types::Record;
use async_trait::async_trait;

/// 集合的 CRUD 操作接口
///
/// 会修改数据的单条/批量操作在 where 编译为零个条件时拒绝执行，
/// 返回空结果（None/0/false）而不是作用于全表
#[async_trait]
pub trait OdmOperations {
    /// 查询全部匹配的记录，无匹配时返回空列表
    async fn find_many(&self, options: FindManyOptions) -> QuickDbResult<Vec<Record>>;

    /// 按唯一条件查询，无条件时直接返回 None
    async fn find_unique(&self, options: FindUniqueOptions) -> QuickDbResult<Option<Record>>;

    /// 查询第一条匹配的记录
    async fn find_first(&self, options: FindFirstOptions) -> QuickDbResult<Option<Record>>;

    /// 插入一条或多条记录，returning 为真时返回第一条
    async fn create(&self, options: CreateOptions) -> QuickDbResult<Option<Record>>;

    /// 批量插入，返回存储层报告的插入行数
    async fn create_many(&self, options: CreateManyOptions) -> QuickDbResult<u64>;

    /// 按条件更新，returning 为真时返回第一条更新后的记录
    async fn update(&self, options: UpdateOptions) -> QuickDbResult<Option<Record>>;

    /// 按条件批量更新，返回受影响的行数
    async fn update_many(&self, options: UpdateManyOptions) -> QuickDbResult<u64>;

    /// 按条件删除，returning 为真时返回第一条被删除的记录
    async fn delete(&self, options: DeleteOptions) -> QuickDbResult<Option<Record>>;

    /// 按条件批量删除，返回受影响的行数
    async fn delete_many(&self, options: DeleteManyOptions) -> QuickDbResult<u64>;

    /// 统计匹配的行数
    async fn count(&self, options: CountOptions) -> QuickDbResult<u64>;

    /// 是否存在匹配的行
    async fn exists(&self, options: ExistsOptions) -> QuickDbResult<bool>;
}
