//! # 适配器配置构建器

use crate::error::QuickDbError;
use crate::types::*;
use rat_logger::info;

/// 适配器配置构建器
///
/// 数据库类型与连接字符串必须显式设置，迁移目录缺省为 `./migrations`
#[derive(Debug, Default)]
pub struct AdapterConfigBuilder {
    db_type: Option<DatabaseType>,
    url: Option<String>,
    migrations_path: Option<String>,
}

impl AdapterConfig {
    /// 创建适配器配置构建器
    pub fn builder() -> AdapterConfigBuilder {
        AdapterConfigBuilder::new()
    }
}

impl AdapterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置数据库类型
    pub fn db_type(mut self, db_type: DatabaseType) -> Self {
        self.db_type = Some(db_type);
        self
    }

    /// 设置连接字符串
    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// 设置迁移文件目录
    pub fn migrations_path<S: Into<String>>(mut self, path: S) -> Self {
        self.migrations_path = Some(path.into());
        self
    }

    /// 构建适配器配置
    ///
    /// # 错误
    ///
    /// 数据库类型或连接字符串未设置、连接字符串为空、迁移目录为空时返回配置错误
    pub fn build(self) -> Result<AdapterConfig, QuickDbError> {
        let db_type = self
            .db_type
            .ok_or_else(|| crate::quick_error!(config, "数据库类型必须设置"))?;

        let url = self
            .url
            .ok_or_else(|| crate::quick_error!(config, "连接字符串必须设置"))?;
        if url.trim().is_empty() {
            return Err(crate::quick_error!(config, "连接字符串不能为空"));
        }

        let migrations_path = self
            .migrations_path
            .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());
        if migrations_path.trim().is_empty() {
            return Err(crate::quick_error!(config, "迁移目录不能为空"));
        }

        info!("创建适配器配置: 类型={}, 迁移目录={}", db_type.as_str(), migrations_path);

        Ok(AdapterConfig {
            db_type,
            url,
            migrations_path,
        })
    }
}
