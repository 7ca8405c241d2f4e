//! 模型定义系统模块
//!
//! 字段类型、字段、钩子与集合的声明式定义

pub mod collection;
pub mod field;
pub mod field_types;
pub mod fields;
pub mod hooks;

pub use collection::{collection, Collection, CollectionBuilder, ID_FIELD};
pub use field::{field, FieldDefinition, FieldOptions};
pub use field_types::{
    field_type, FieldType, FieldTypeFactory, RelationMeta, RuleKind, StorageDescriptor,
    StorageKind, StringFormat, ValidationRule,
};
pub use fields::RelationOptions;
pub use hooks::{hook_fn, CollectionHooks, Hook, HookContext, HookPoint};
