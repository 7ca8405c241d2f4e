//! 错误类型定义
//!
//! 错误分为四类：定义期的构造错误、查询编译错误、记录校验错误以及存储层错误。
//! 守卫拒绝（无条件的修改/查询）不是错误，而是定义好的空结果。

use crate::i18n::tf;
use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum QuickDbError {
    /// 构造错误：非法 slug、空枚举选项、重复字段名等
    #[error("{}", tf("error.construction", &[("message", .message.as_str())]))]
    ConstructionError { message: String },

    /// 查询编译错误：在存储调用之前发现的问题
    #[error("{}", tf("error.compile", &[("field", .field.as_str()), ("message", .message.as_str())]))]
    CompileError { field: String, message: String },

    /// 记录校验错误
    #[error("{}", tf("error.validation", &[("field", .field.as_str()), ("message", .message.as_str())]))]
    ValidationError { field: String, message: String },

    /// 存储层错误（连接失败、约束冲突等），原样向调用方传播
    #[error("{}", tf("error.store", &[("message", .message.as_str())]))]
    StoreError { message: String },

    /// 配置错误
    #[error("{}", tf("error.config", &[("message", .message.as_str())]))]
    ConfigError { message: String },

    /// 集合未注册
    #[error("{}", tf("error.collection_not_found", &[("slug", .slug.as_str())]))]
    CollectionNotFound { slug: String },

    /// 不支持的数据库类型
    #[error("{}", tf("error.unsupported_database", &[("db_type", .db_type.as_str())]))]
    UnsupportedDatabase { db_type: String },

    /// 钩子执行失败
    #[error("{}", tf("error.hook", &[("point", .point.as_str()), ("message", .message.as_str())]))]
    HookError { point: String, message: String },

    /// 序列化错误
    #[error("{}", tf("error.serialization", &[("message", .message.as_str())]))]
    SerializationError { message: String },

    /// IO 错误
    #[error("IO: {0}")]
    IoError(#[from] std::io::Error),
}

/// 结果类型别名
pub type QuickDbResult<T> = Result<T, QuickDbError>;

impl From<serde_json::Error> for QuickDbError {
    fn from(e: serde_json::Error) -> Self {
        QuickDbError::SerializationError {
            message: e.to_string(),
        }
    }
}

/// 快速构造错误的宏
///
/// ```ignore
/// quick_error!(construction, "slug 不能为空");
/// quick_error!(compile, "age", "gt 需要可排序的列");
/// ```
#[macro_export]
macro_rules! quick_error {
    (construction, $msg:expr) => {
        $crate::error::QuickDbError::ConstructionError {
            message: ($msg).to_string(),
        }
    };
    (compile, $field:expr, $msg:expr) => {
        $crate::error::QuickDbError::CompileError {
            field: ($field).to_string(),
            message: ($msg).to_string(),
        }
    };
    (validation, $field:expr, $msg:expr) => {
        $crate::error::QuickDbError::ValidationError {
            field: ($field).to_string(),
            message: ($msg).to_string(),
        }
    };
    (store, $msg:expr) => {
        $crate::error::QuickDbError::StoreError {
            message: ($msg).to_string(),
        }
    };
    (config, $msg:expr) => {
        $crate::error::QuickDbError::ConfigError {
            message: ($msg).to_string(),
        }
    };
    (not_found, $slug:expr) => {
        $crate::error::QuickDbError::CollectionNotFound {
            slug: ($slug).to_string(),
        }
    };
    (unsupported_db, $db_type:expr) => {
        $crate::error::QuickDbError::UnsupportedDatabase {
            db_type: ($db_type).to_string(),
        }
    };
    (hook, $point:expr, $msg:expr) => {
        $crate::error::QuickDbError::HookError {
            point: ($point).to_string(),
            message: ($msg).to_string(),
        }
    };
    (serialization, $msg:expr) => {
        $crate::error::QuickDbError::SerializationError {
            message: ($msg).to_string(),
        }
    };
}
