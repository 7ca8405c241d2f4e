//! rat_collections - 声明式集合建模层
//!
//! 用字段类型与集合描述数据实体，由此派生校验规则、物理表结构与每个集合的 CRUD 操作，
//! 并把直接提供的集合与插件贡献的集合合并为一份运行时配置

// 导出所有公共模块
pub mod error;
pub mod i18n;
pub mod types;
pub mod model;
pub mod table;
pub mod compiler;
pub mod store;
pub mod odm;
pub mod config;

// 重新导出常用类型和函数
pub use error::{QuickDbError, QuickDbResult};
pub use types::*;
pub use model::{
    collection, field, field_type, fields, hook_fn, Collection, CollectionBuilder, CollectionHooks,
    FieldDefinition, FieldOptions, FieldType, FieldTypeFactory, Hook, HookContext, HookPoint,
    RelationOptions, StorageDescriptor, StorageKind, ValidationRule,
};
pub use table::{build_column_map, build_schema, ColumnDefinition, ColumnType, TableSchema};
pub use compiler::{compile_order_by, compile_select, compile_where};
pub use store::{create_store, MemoryStore, Store, StoreWriteResult};
pub use odm::{CollectionMeta, CollectionOperations, OdmOperations};
pub use config::{
    define_config, memory_adapter, postgres_adapter, AdapterConfigBuilder, ConfigBuilder,
    ConfigMeta, ConfigOptions, DefinedConfig, Plugin,
};

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

/// 初始化rat_collections库
///
/// 注册多语言错误消息并根据环境变量选择语言
///
/// 注意：日志系统由调用者自行初始化，本库不会初始化日志
pub fn init() {
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
