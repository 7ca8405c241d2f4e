//! # ODM请求处理器模块
//!
//! 按操作类型分离的处理器实现

pub mod create_handler;
pub mod delete_handler;
pub mod read_handler;
pub mod update_handler;
