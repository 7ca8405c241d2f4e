//! # 插件构建器

use crate::config::core::Plugin;
use crate::error::QuickDbError;
use crate::model::{Collection, CollectionHooks};

/// 插件构建器
#[derive(Debug)]
pub struct PluginBuilder {
    name: String,
    collections: Vec<Collection>,
    hooks: CollectionHooks,
}

impl Plugin {
    pub fn builder<S: Into<String>>(name: S) -> PluginBuilder {
        PluginBuilder::new(name)
    }
}

impl PluginBuilder {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            collections: Vec::new(),
            hooks: CollectionHooks::default(),
        }
    }

    /// 追加集合
    pub fn collection(mut self, collection: Collection) -> Self {
        self.collections.push(collection);
        self
    }

    pub fn collections(mut self, collections: Vec<Collection>) -> Self {
        self.collections.extend(collections);
        self
    }

    /// 设置插件钩子
    pub fn hooks(mut self, hooks: CollectionHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> Result<Plugin, QuickDbError> {
        if self.name.trim().is_empty() {
            return Err(crate::quick_error!(construction, "插件名称不能为空"));
        }
        Ok(Plugin {
            name: self.name,
            collections: self.collections,
            hooks: self.hooks,
        })
    }
}
