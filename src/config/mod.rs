//! # 配置管理模块
//!
//! 适配器配置、插件与集合的合并装配

pub mod assembler;
pub mod builders;
pub mod convenience;
pub mod core;

pub use assembler::{define_config, merge_namespace, DefinedConfig};
pub use builders::{AdapterConfigBuilder, ConfigBuilder, PluginBuilder};
pub use convenience::{memory_adapter, postgres_adapter};
pub use self::core::{ConfigMeta, ConfigOptions, MergedNamespace, Plugin};
