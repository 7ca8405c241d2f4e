//! # 配置装配
//!
//! 合并直接提供的集合与插件集合，实例化一次存储层，
//! 再为每个集合派生列映射并绑定操作集。装配完成后一切只读。

use crate::config::core::{ConfigMeta, ConfigOptions, MergedNamespace, Plugin};
use crate::error::QuickDbResult;
use crate::model::Collection;
use crate::odm::{CollectionMeta, CollectionOperations};
use crate::store::{create_store, Store};
use crate::table::{build_column_map, TableSchema};
use crate::types::AdapterConfig;
use rat_logger::{info, warn};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// 合并集合：先注册直接提供的集合，再按插件顺序注册插件集合
pub fn merge_namespace(collections: &[Collection], plugins: &[Plugin]) -> MergedNamespace {
    let mut namespace = MergedNamespace::default();

    for collection in collections {
        if namespace.register(collection.clone()) {
            warn!("集合 slug '{}' 重复，后注册的定义覆盖先前的定义", collection.slug);
        }
    }

    for plugin in plugins {
        namespace.plugin_names.push(plugin.name.clone());
        for collection in &plugin.collections {
            if namespace.register(collection.clone()) {
                warn!(
                    "插件 '{}' 的集合 '{}' 覆盖了已注册的同名集合",
                    plugin.name, collection.slug
                );
            }
        }
    }

    namespace
}

/// 装配配置
pub fn define_config(options: ConfigOptions) -> QuickDbResult<DefinedConfig> {
    let ConfigOptions {
        adapter,
        store,
        collections,
        plugins,
    } = options;

    let namespace = merge_namespace(&collections, &plugins);

    let store: Option<Arc<dyn Store>> = match (store, &adapter) {
        (Some(store), _) => {
            info!("使用注入的存储层: {}", store.name());
            Some(store)
        }
        (None, Some(adapter)) => Some(create_store(adapter)?),
        (None, None) => {
            info!("未配置适配器，所有操作以占位模式返回空结果");
            None
        }
    };

    let mut metas = HashMap::with_capacity(namespace.len());
    let mut operations = HashMap::with_capacity(namespace.len());
    for collection in namespace.ordered() {
        let hooks = plugins
            .iter()
            .fold(collection.hooks.clone(), |acc, plugin| acc.merged_with(&plugin.hooks));
        let meta = Arc::new(CollectionMeta {
            collection: collection.clone(),
            columns: build_column_map(collection),
            hooks,
        });
        operations.insert(
            collection.slug.clone(),
            CollectionOperations::new(meta.clone(), store.clone()),
        );
        metas.insert(collection.slug.clone(), meta);
    }

    info!(
        "配置装配完成: 集合数={}, 插件数={}",
        namespace.len(),
        namespace.plugin_names.len()
    );

    Ok(DefinedConfig {
        adapter,
        store,
        namespace,
        metas,
        operations,
    })
}

/// 装配完成的配置
pub struct DefinedConfig {
    adapter: Option<AdapterConfig>,
    store: Option<Arc<dyn Store>>,
    namespace: MergedNamespace,
    metas: HashMap<String, Arc<CollectionMeta>>,
    operations: HashMap<String, CollectionOperations>,
}

impl DefinedConfig {
    /// 获取集合的操作集；未注册的 slug 返回 CollectionNotFound
    pub fn collection(&self, slug: &str) -> QuickDbResult<&CollectionOperations> {
        self.operations
            .get(slug)
            .ok_or_else(|| crate::quick_error!(not_found, slug))
    }

    pub fn get(&self, slug: &str) -> Option<&CollectionOperations> {
        self.operations.get(slug)
    }

    /// 集合元数据（定义、列映射、生效的钩子）
    pub fn collection_meta(&self, slug: &str) -> Option<&CollectionMeta> {
        self.metas.get(slug).map(|m| m.as_ref())
    }

    pub fn meta(&self) -> ConfigMeta {
        ConfigMeta {
            collections: self.namespace.registration_order.clone(),
            plugins: self.namespace.plugin_names.clone(),
        }
    }

    pub fn namespace(&self) -> &MergedNamespace {
        &self.namespace
    }

    /// 物理表结构，按 slug 索引
    pub fn schema(&self) -> BTreeMap<String, TableSchema> {
        self.metas
            .iter()
            .map(|(slug, meta)| (slug.clone(), meta.columns.clone()))
            .collect()
    }

    pub fn adapter(&self) -> Option<&AdapterConfig> {
        self.adapter.as_ref()
    }

    /// 迁移目录（未配置适配器时为 None）
    pub fn migrations_path(&self) -> Option<&str> {
        self.adapter.as_ref().map(|a| a.migrations_path.as_str())
    }

    /// 是否处于占位模式
    pub fn is_placeholder(&self) -> bool {
        self.store.is_none()
    }
}

impl fmt::Debug for DefinedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinedConfig")
            .field("adapter", &self.adapter)
            .field("store", &self.store.as_ref().map(|s| s.name()))
            .field("collections", &self.namespace.registration_order)
            .field("plugins", &self.namespace.plugin_names)
            .finish()
    }
}
