//! # 配置管理模块 - 核心配置类型

use crate::model::{Collection, CollectionHooks};
use crate::store::Store;
use crate::types::AdapterConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 插件：向合并后的命名空间贡献集合与钩子，没有独立的生命周期
#[derive(Debug, Clone, Default)]
pub struct Plugin {
    /// 插件名称
    pub name: String,
    /// 贡献的集合；以各集合的 slug 为键注册到命名空间
    pub collections: Vec<Collection>,
    /// 附加钩子，作用于命名空间中的每个集合
    pub hooks: CollectionHooks,
}

/// defineConfig 的输入
#[derive(Clone, Default)]
pub struct ConfigOptions {
    /// 适配器配置；为空且未注入存储层时进入占位模式
    pub adapter: Option<AdapterConfig>,
    /// 外部构造的存储层
    pub store: Option<Arc<dyn Store>>,
    /// 直接提供的集合（先于插件注册）
    pub collections: Vec<Collection>,
    /// 插件（按列表顺序注册）
    pub plugins: Vec<Plugin>,
}

impl fmt::Debug for ConfigOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOptions")
            .field("adapter", &self.adapter)
            .field("store", &self.store.as_ref().map(|s| s.name()))
            .field("collections", &self.collections.len())
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

/// 合并后的命名空间
///
/// 同一 slug 后注册者覆盖先注册者，但在 `registration_order` 中保留首次出现的位置；
/// `plugin_names` 对每个传入的插件实例记录一次
#[derive(Debug, Clone, Default)]
pub struct MergedNamespace {
    pub collections_by_slug: HashMap<String, Collection>,
    pub registration_order: Vec<String>,
    pub plugin_names: Vec<String>,
}

impl MergedNamespace {
    /// 注册集合，返回是否覆盖了同 slug 的旧集合
    pub fn register(&mut self, collection: Collection) -> bool {
        let slug = collection.slug.clone();
        let replaced = self.collections_by_slug.insert(slug.clone(), collection).is_some();
        if !replaced {
            self.registration_order.push(slug);
        }
        replaced
    }

    pub fn get(&self, slug: &str) -> Option<&Collection> {
        self.collections_by_slug.get(slug)
    }

    /// 按注册顺序遍历集合
    pub fn ordered(&self) -> impl Iterator<Item = &Collection> {
        self.registration_order
            .iter()
            .filter_map(|slug| self.collections_by_slug.get(slug))
    }

    pub fn len(&self) -> usize {
        self.registration_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registration_order.is_empty()
    }
}

/// 配置元数据（供内省）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMeta {
    /// 集合 slug，按注册顺序
    pub collections: Vec<String>,
    /// 插件名称，按传入顺序
    pub plugins: Vec<String>,
}
