use serde::{Deserialize, Serialize};

/// 默认迁移目录
pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// 支持的存储引擎类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// PostgreSQL 数据库
    PostgreSQL,
    /// SQLite 数据库
    SQLite,
    /// MySQL 数据库
    MySQL,
    /// 进程内存储（测试与演示）
    Memory,
}

impl DatabaseType {
    /// 获取数据库类型的字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::PostgreSQL => "postgresql",
            DatabaseType::SQLite => "sqlite",
            DatabaseType::MySQL => "mysql",
            DatabaseType::Memory => "memory",
        }
    }

    /// 从字符串解析数据库类型
    pub fn from_str(s: &str) -> Result<Self, crate::error::QuickDbError> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(DatabaseType::PostgreSQL),
            "sqlite" => Ok(DatabaseType::SQLite),
            "mysql" => Ok(DatabaseType::MySQL),
            "memory" | "mem" => Ok(DatabaseType::Memory),
            _ => Err(crate::quick_error!(unsupported_db, s)),
        }
    }
}

/// 适配器配置：标识存储引擎与连接参数
///
/// 核心只用它决定是否实例化真实存储，连接参数原样交给存储实现
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// 存储引擎类型
    pub db_type: DatabaseType,
    /// 连接字符串
    pub url: String,
    /// 迁移文件目录
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,
}

fn default_migrations_path() -> String {
    DEFAULT_MIGRATIONS_PATH.to_string()
}

impl AdapterConfig {
    /// 从配置文件加载适配器配置（`.toml` 按 TOML 解析，其余按 JSON 解析）
    pub fn from_file<P: AsRef<std::path::Path>>(
        config_path: P,
    ) -> Result<Self, crate::error::QuickDbError> {
        let content = std::fs::read_to_string(config_path.as_ref())?;

        let config: AdapterConfig = if is_toml(config_path.as_ref()) {
            toml::from_str(&content).map_err(|e| {
                crate::quick_error!(config, format!("解析TOML配置文件失败: {}", e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                crate::quick_error!(config, format!("解析JSON配置文件失败: {}", e))
            })?
        };

        if config.url.trim().is_empty() {
            return Err(crate::quick_error!(config, "连接字符串不能为空"));
        }

        rat_logger::info!("从文件加载适配器配置: {:?}", config_path.as_ref());
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        config_path: P,
    ) -> Result<(), crate::error::QuickDbError> {
        let content = if is_toml(config_path.as_ref()) {
            toml::to_string_pretty(self).map_err(|e| {
                crate::quick_error!(serialization, format!("序列化TOML配置失败: {}", e))
            })?
        } else {
            serde_json::to_string_pretty(self)?
        };

        std::fs::write(config_path.as_ref(), content)?;
        rat_logger::info!("保存适配器配置到文件: {:?}", config_path.as_ref());
        Ok(())
    }
}

fn is_toml(path: &std::path::Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}
