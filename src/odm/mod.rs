//! # 操作工厂模块
//!
//! 为每个集合生成绑定的 CRUD 操作集：先经查询编译，再交给存储层执行。
//! 钩子在同一调用路径上按注册顺序串行执行。

// 核心模块
pub mod manager_core;
pub mod traits;
pub mod types;

// 请求处理器模块
pub mod handlers;

// 操作实现模块
pub mod operations;

pub use manager_core::CollectionOperations;
pub use traits::OdmOperations;
pub use types::*;
