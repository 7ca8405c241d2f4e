//! # 便利配置函数模块

use crate::error::QuickDbError;
use crate::types::*;

/// 创建 PostgreSQL 适配器配置，迁移目录使用默认值
pub fn postgres_adapter<S: Into<String>>(url: S) -> Result<AdapterConfig, QuickDbError> {
    AdapterConfig::builder()
        .db_type(DatabaseType::PostgreSQL)
        .url(url)
        .build()
}

/// 创建内存适配器配置
pub fn memory_adapter() -> AdapterConfig {
    AdapterConfig {
        db_type: DatabaseType::Memory,
        url: "memory://".to_string(),
        migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
    }
}
