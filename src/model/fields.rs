//! 内置字段类型

use crate::error::QuickDbResult;
use crate::model::field_types::{
    field_type, FieldTypeFactory, RelationMeta, StorageDescriptor, StorageKind, ValidationRule,
};
use serde::{Deserialize, Serialize};

/// 文本
pub fn text() -> FieldTypeFactory {
    field_type(
        ValidationRule::string(),
        Some(StorageDescriptor::new(StorageKind::Text)),
    )
}

/// 邮箱（文本 + 格式约束）
pub fn email() -> FieldTypeFactory {
    field_type(
        ValidationRule::email(),
        Some(StorageDescriptor::new(StorageKind::Text)),
    )
}

/// URL（文本 + 格式约束）
pub fn url() -> FieldTypeFactory {
    field_type(
        ValidationRule::url(),
        Some(StorageDescriptor::new(StorageKind::Text)),
    )
}

/// 数值
pub fn number() -> FieldTypeFactory {
    field_type(
        ValidationRule::number(),
        Some(StorageDescriptor::new(StorageKind::Integer)),
    )
}

/// 布尔
pub fn boolean() -> FieldTypeFactory {
    field_type(
        ValidationRule::boolean(),
        Some(StorageDescriptor::new(StorageKind::Boolean)),
    )
}

/// 日期（不含时间）
pub fn date() -> FieldTypeFactory {
    field_type(
        ValidationRule::date(),
        Some(StorageDescriptor::new(StorageKind::Date)),
    )
}

/// 时间戳（日期 + 时间）
pub fn timestamp() -> FieldTypeFactory {
    field_type(
        ValidationRule::date(),
        Some(StorageDescriptor::new(StorageKind::Timestamp)),
    )
}

/// 单选/枚举，选项集不能为空
pub fn select<S: Into<String>>(options: Vec<S>) -> QuickDbResult<FieldTypeFactory> {
    let rule = ValidationRule::enumeration(options)?;
    Ok(field_type(
        rule,
        Some(StorageDescriptor::new(StorageKind::Text)),
    ))
}

/// JSON，未指定规则时接受任何值
pub fn json(rule: Option<ValidationRule>) -> FieldTypeFactory {
    field_type(
        rule.unwrap_or_else(ValidationRule::any),
        Some(StorageDescriptor::new(StorageKind::Json)),
    )
}

/// 数组，元素存储类别由元素规则推导
pub fn array(item: ValidationRule) -> FieldTypeFactory {
    let item_kind = StorageKind::for_item_rule(&item);
    field_type(
        ValidationRule::array(item),
        Some(StorageDescriptor::new(StorageKind::Array(Box::new(item_kind)))),
    )
}

/// 关系字段选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationOptions {
    /// 目标集合 slug
    pub collection: String,
    pub singular: bool,
    pub many: bool,
    /// 中间表 slug
    pub through: Option<String>,
}

impl RelationOptions {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }

    pub fn singular(mut self, singular: bool) -> Self {
        self.singular = singular;
        self
    }

    pub fn many(mut self, many: bool) -> Self {
        self.many = many;
        self
    }

    pub fn through(mut self, through: impl Into<String>) -> Self {
        self.through = Some(through.into());
        self
    }
}

/// 关系（外键）
///
/// `many` 为真时校验"标识列表"，否则校验"单个标识"；
/// 存储始终为携带关系元数据的整数外键
pub fn relation(options: RelationOptions) -> FieldTypeFactory {
    let validation = if options.many {
        ValidationRule::array(ValidationRule::identifier())
    } else {
        ValidationRule::identifier()
    };
    let storage = StorageDescriptor::relation(RelationMeta {
        references: options.collection,
        through: options.through,
        many: options.many,
        singular: options.singular,
    });
    field_type(validation, Some(storage))
}
