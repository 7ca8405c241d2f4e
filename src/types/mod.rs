//! 通用类型定义
//!
//! 数据值、编译后的查询条件、声明式查询选项以及适配器配置

pub mod data_value;
pub mod database_config;
pub mod query;
pub mod where_options;

// 重新导出所有公共类型以保持API兼容性
pub use data_value::{DataValue, Record};
pub use database_config::{AdapterConfig, DatabaseType, DEFAULT_MIGRATIONS_PATH};
pub use query::{
    PaginationConfig, QueryCondition, QueryOperator, QueryOptions, SortConfig, SortDirection,
};
pub use where_options::{OrderByOptions, SelectClause, WhereOperator, WhereOptions, WhereValue};
