//! # 配置构建器

use crate::config::assembler::{define_config, DefinedConfig};
use crate::config::core::{ConfigOptions, Plugin};
use crate::error::QuickDbResult;
use crate::model::Collection;
use crate::store::Store;
use crate::types::AdapterConfig;
use std::sync::Arc;

/// defineConfig 输入的构建器
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    options: ConfigOptions,
}

impl ConfigOptions {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置适配器配置
    pub fn adapter(mut self, adapter: AdapterConfig) -> Self {
        self.options.adapter = Some(adapter);
        self
    }

    /// 注入外部构造的存储层
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.options.store = Some(store);
        self
    }

    pub fn collection(mut self, collection: Collection) -> Self {
        self.options.collections.push(collection);
        self
    }

    pub fn collections(mut self, collections: Vec<Collection>) -> Self {
        self.options.collections.extend(collections);
        self
    }

    pub fn plugin(mut self, plugin: Plugin) -> Self {
        self.options.plugins.push(plugin);
        self
    }

    pub fn plugins(mut self, plugins: Vec<Plugin>) -> Self {
        self.options.plugins.extend(plugins);
        self
    }

    pub fn build(self) -> ConfigOptions {
        self.options
    }

    /// 构建并装配
    pub fn define(self) -> QuickDbResult<DefinedConfig> {
        define_config(self.options)
    }
}
