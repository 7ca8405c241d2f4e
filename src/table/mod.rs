//! 表结构派生模块
//!
//! 把集合的字段映射为物理列描述，供存储层建表和内省使用

pub mod builder;
pub mod schema;

pub use builder::{build_column_map, build_schema, column_type_for};
pub use schema::{ColumnDefinition, ColumnType, TableSchema};
