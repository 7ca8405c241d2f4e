//! 存储层模块
//!
//! 存储层是核心之外唯一的协作方：接收列映射与编译后的条件，负责真正的读写。
//! 真实的数据库驱动由调用方实现 [`Store`] 并通过配置注入；
//! 本模块自带一个内存实现，用于测试与演练。

use crate::error::QuickDbResult;
use crate::table::TableSchema;
use crate::types::*;
use async_trait::async_trait;
use rat_logger::info;
use std::sync::Arc;

pub mod matcher;
pub mod memory;

pub use memory::MemoryStore;

/// 写操作结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreWriteResult {
    /// 受影响的行数；引擎不提供计数时为 None
    pub affected: Option<u64>,
    /// 请求 returning 时返回的行
    pub rows: Vec<Record>,
}

impl StoreWriteResult {
    pub fn affected_or_zero(&self) -> u64 {
        self.affected.unwrap_or(0)
    }
}

/// 存储层接口
///
/// 返回的记录以列名为键，包含注入的 `id` 列
#[async_trait]
pub trait Store: Send + Sync {
    /// 条件查询（排序、分页、投影由 options 给出）
    async fn select(
        &self,
        table: &TableSchema,
        conditions: &[QueryCondition],
        options: &QueryOptions,
    ) -> QuickDbResult<Vec<Record>>;

    /// 插入一条或多条记录
    async fn insert(
        &self,
        table: &TableSchema,
        rows: &[Record],
        returning: bool,
    ) -> QuickDbResult<StoreWriteResult>;

    /// 按条件更新
    async fn update(
        &self,
        table: &TableSchema,
        conditions: &[QueryCondition],
        data: &Record,
        returning: bool,
    ) -> QuickDbResult<StoreWriteResult>;

    /// 按条件删除
    async fn delete(
        &self,
        table: &TableSchema,
        conditions: &[QueryCondition],
        returning: bool,
    ) -> QuickDbResult<StoreWriteResult>;

    /// 统计匹配的行数
    async fn count(&self, table: &TableSchema, conditions: &[QueryCondition]) -> QuickDbResult<u64>;

    /// 存储引擎名称
    fn name(&self) -> &'static str;
}

/// 根据适配器配置创建存储层
///
/// 目前只内置内存引擎；其他引擎需要由调用方实现 [`Store`] 后注入
pub fn create_store(config: &AdapterConfig) -> QuickDbResult<Arc<dyn Store>> {
    match config.db_type {
        DatabaseType::Memory => {
            info!("创建内存存储层");
            Ok(Arc::new(MemoryStore::new()))
        }
        ref other => Err(crate::quick_error!(
            unsupported_db,
            format!("{} (请通过 ConfigBuilder::store 注入对应的存储实现)", other.as_str())
        )),
    }
}
