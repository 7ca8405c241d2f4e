//! 字段类型定义模块
//!
//! 字段类型 = 校验规则 + 存储描述。字段类型在模块级声明一次，
//! 通过工厂在每个使用点产出独立的实例。

use crate::error::QuickDbResult;
use crate::types::DataValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email 正则表达式无效"));

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("url 正则表达式无效")
});

/// 字符串格式约束
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringFormat {
    /// 无格式约束
    Plain,
    /// 邮箱地址
    Email,
    /// URL
    Url,
}

/// 校验规则的类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    String,
    Number,
    Boolean,
    Date,
    Enum,
    Array,
    Object,
    Identifier,
    Any,
}

/// 校验规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationRule {
    /// 字符串
    String { format: StringFormat },
    /// 数值（整数或浮点数）
    Number,
    /// 布尔值
    Boolean,
    /// 日期时间
    Date,
    /// 枚举，选项非空且有序
    Enum { options: Vec<String> },
    /// 数组，元素按 item 规则校验
    Array(Box<ValidationRule>),
    /// 对象，成员按各自规则校验
    Object { fields: Vec<(String, ValidationRule)> },
    /// 单个记录标识（字符串或整数）
    Identifier,
    /// 接受任何值
    Any,
}

impl ValidationRule {
    pub fn string() -> Self {
        ValidationRule::String {
            format: StringFormat::Plain,
        }
    }

    pub fn email() -> Self {
        ValidationRule::String {
            format: StringFormat::Email,
        }
    }

    pub fn url() -> Self {
        ValidationRule::String {
            format: StringFormat::Url,
        }
    }

    pub fn number() -> Self {
        ValidationRule::Number
    }

    pub fn boolean() -> Self {
        ValidationRule::Boolean
    }

    pub fn date() -> Self {
        ValidationRule::Date
    }

    pub fn any() -> Self {
        ValidationRule::Any
    }

    pub fn identifier() -> Self {
        ValidationRule::Identifier
    }

    pub fn array(item: ValidationRule) -> Self {
        ValidationRule::Array(Box::new(item))
    }

    pub fn object<S: Into<String>>(fields: Vec<(S, ValidationRule)>) -> Self {
        ValidationRule::Object {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// 枚举规则；空选项集在构造时即失败
    pub fn enumeration<S: Into<String>>(options: Vec<S>) -> QuickDbResult<Self> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(crate::quick_error!(construction, "枚举字段的选项集不能为空"));
        }
        Ok(ValidationRule::Enum { options })
    }

    /// 规则的类型标签
    pub fn kind(&self) -> RuleKind {
        match self {
            ValidationRule::String { .. } => RuleKind::String,
            ValidationRule::Number => RuleKind::Number,
            ValidationRule::Boolean => RuleKind::Boolean,
            ValidationRule::Date => RuleKind::Date,
            ValidationRule::Enum { .. } => RuleKind::Enum,
            ValidationRule::Array(_) => RuleKind::Array,
            ValidationRule::Object { .. } => RuleKind::Object,
            ValidationRule::Identifier => RuleKind::Identifier,
            ValidationRule::Any => RuleKind::Any,
        }
    }

    /// 校验一个非空值
    pub fn validate(&self, field_name: &str, value: &DataValue) -> QuickDbResult<()> {
        match self {
            ValidationRule::Any => Ok(()),
            ValidationRule::String { format } => {
                let Some(s) = value.as_str() else {
                    return Err(type_mismatch(field_name, "字符串", value));
                };
                match format {
                    StringFormat::Plain => Ok(()),
                    StringFormat::Email if EMAIL_REGEX.is_match(s) => Ok(()),
                    StringFormat::Url if URL_REGEX.is_match(s) => Ok(()),
                    StringFormat::Email => Err(crate::quick_error!(
                        validation,
                        field_name,
                        format!("无效的邮箱地址: '{}'", s)
                    )),
                    StringFormat::Url => Err(crate::quick_error!(
                        validation,
                        field_name,
                        format!("无效的URL: '{}'", s)
                    )),
                }
            }
            ValidationRule::Number => match value {
                DataValue::Int(_) | DataValue::Float(_) => Ok(()),
                _ => Err(type_mismatch(field_name, "数值", value)),
            },
            ValidationRule::Boolean => match value {
                DataValue::Bool(_) => Ok(()),
                _ => Err(type_mismatch(field_name, "布尔", value)),
            },
            ValidationRule::Date => match value {
                DataValue::DateTime(_) => Ok(()),
                DataValue::String(s) if parses_as_date(s) => Ok(()),
                _ => Err(type_mismatch(field_name, "日期时间", value)),
            },
            ValidationRule::Enum { options } => match value.as_str() {
                Some(s) if options.iter().any(|o| o == s) => Ok(()),
                Some(s) => Err(crate::quick_error!(
                    validation,
                    field_name,
                    format!("'{}' 不在可选值 {:?} 中", s, options)
                )),
                None => Err(type_mismatch(field_name, "枚举字符串", value)),
            },
            ValidationRule::Identifier => match value {
                DataValue::String(_) | DataValue::Int(_) => Ok(()),
                _ => Err(type_mismatch(field_name, "记录标识", value)),
            },
            ValidationRule::Array(item) => {
                let items: Vec<DataValue> = match value {
                    DataValue::Array(items) => items.clone(),
                    DataValue::Json(serde_json::Value::Array(items)) => items
                        .iter()
                        .cloned()
                        .map(DataValue::from_json_value)
                        .collect(),
                    _ => return Err(type_mismatch(field_name, "数组", value)),
                };
                for (index, entry) in items.iter().enumerate() {
                    item.validate(&format!("{}[{}]", field_name, index), entry)?;
                }
                Ok(())
            }
            ValidationRule::Object { fields } => {
                let object = match value {
                    DataValue::Object(object) => object.clone(),
                    DataValue::Json(json @ serde_json::Value::Object(_)) => {
                        DataValue::from_json_value(json.clone()).expect_object()?
                    }
                    _ => return Err(type_mismatch(field_name, "对象", value)),
                };
                for (member, rule) in fields {
                    let path = format!("{}.{}", field_name, member);
                    match object.get(member) {
                        Some(v) if !v.is_null() => rule.validate(&path, v)?,
                        _ if rule.kind() == RuleKind::Any => {}
                        _ => {
                            return Err(crate::quick_error!(validation, path, "对象成员缺失"));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn parses_as_date(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
        || chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn type_mismatch(field_name: &str, expected: &str, actual: &DataValue) -> crate::error::QuickDbError {
    crate::quick_error!(
        validation,
        field_name,
        format!("字段类型不匹配，期望{}类型，实际为 {}", expected, actual.type_name())
    )
}

/// 存储类别标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageKind {
    Text,
    Integer,
    Boolean,
    Date,
    Timestamp,
    Json,
    /// 数组，携带元素的存储类别
    Array(Box<StorageKind>),
    /// 以引擎特定名称声明的类别（如 "varchar"、"uuid"）
    Custom(String),
    /// 未声明存储描述
    Unspecified,
}

impl StorageKind {
    pub fn as_str(&self) -> &str {
        match self {
            StorageKind::Text => "text",
            StorageKind::Integer => "integer",
            StorageKind::Boolean => "boolean",
            StorageKind::Date => "date",
            StorageKind::Timestamp => "timestamp",
            StorageKind::Json => "jsonb",
            StorageKind::Array(_) => "array",
            StorageKind::Custom(name) => name,
            StorageKind::Unspecified => "",
        }
    }

    /// 根据校验规则的类型标签推导数组元素的存储类别
    pub fn for_item_rule(rule: &ValidationRule) -> Self {
        match rule.kind() {
            RuleKind::String | RuleKind::Enum => StorageKind::Text,
            RuleKind::Number => StorageKind::Integer,
            RuleKind::Boolean => StorageKind::Boolean,
            RuleKind::Date => StorageKind::Timestamp,
            RuleKind::Array => StorageKind::Array(Box::new(match rule {
                ValidationRule::Array(inner) => StorageKind::for_item_rule(inner),
                _ => StorageKind::Text,
            })),
            RuleKind::Object => StorageKind::Json,
            RuleKind::Identifier | RuleKind::Any => StorageKind::Text,
        }
    }
}

/// 关系（外键）元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMeta {
    /// 目标集合 slug
    pub references: String,
    /// 中间表 slug
    pub through: Option<String>,
    /// 是否为多值关系
    pub many: bool,
    /// 是否为单值关系
    pub singular: bool,
}

/// 存储描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDescriptor {
    /// 存储类别
    pub kind: StorageKind,
    /// 关系元数据（仅关系字段）
    pub relation: Option<RelationMeta>,
}

impl StorageDescriptor {
    pub fn new(kind: StorageKind) -> Self {
        Self {
            kind,
            relation: None,
        }
    }

    /// 未声明类别的存储描述，派生列时回退为文本列
    pub fn unspecified() -> Self {
        Self::new(StorageKind::Unspecified)
    }

    /// 整数外键，携带关系元数据
    pub fn relation(meta: RelationMeta) -> Self {
        Self {
            kind: StorageKind::Integer,
            relation: Some(meta),
        }
    }

    /// 数组元素的存储类别
    pub fn item_kind(&self) -> Option<&StorageKind> {
        match &self.kind {
            StorageKind::Array(item) => Some(item),
            _ => None,
        }
    }

    /// 关系目标集合
    pub fn references(&self) -> Option<&str> {
        self.relation.as_ref().map(|r| r.references.as_str())
    }
}

/// 字段类型实例（创建后不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldType {
    /// 校验规则
    pub validation: ValidationRule,
    /// 存储描述
    pub storage: StorageDescriptor,
}

impl FieldType {
    pub fn validate(&self, field_name: &str, value: &DataValue) -> QuickDbResult<()> {
        self.validation.validate(field_name, value)
    }
}

/// 字段类型工厂：每次调用产出一个独立的字段类型实例
#[derive(Clone)]
pub struct FieldTypeFactory {
    producer: Arc<dyn Fn() -> FieldType + Send + Sync>,
}

impl FieldTypeFactory {
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> FieldType + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// 产出一个新的字段类型实例
    pub fn create(&self) -> FieldType {
        (self.producer)()
    }
}

impl fmt::Debug for FieldTypeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sample = self.create();
        f.debug_struct("FieldTypeFactory")
            .field("validation", &sample.validation.kind())
            .field("storage", &sample.storage.kind)
            .finish()
    }
}

/// 定义字段类型
///
/// 未提供存储描述时使用 [`StorageDescriptor::unspecified`]
pub fn field_type(
    validation: ValidationRule,
    storage: Option<StorageDescriptor>,
) -> FieldTypeFactory {
    let storage = storage.unwrap_or_else(StorageDescriptor::unspecified);
    FieldTypeFactory::new(move || FieldType {
        validation: validation.clone(),
        storage: storage.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_yields_independent_instances() {
        let factory = field_type(
            ValidationRule::string(),
            Some(StorageDescriptor::new(StorageKind::Text)),
        );
        let mut first = factory.create();
        let second = factory.create();
        first.storage.kind = StorageKind::Json;
        assert_eq!(second.storage.kind, StorageKind::Text);
    }

    #[test]
    fn test_missing_storage_is_unspecified() {
        let instance = field_type(ValidationRule::any(), None).create();
        assert_eq!(instance.storage, StorageDescriptor::unspecified());
        assert_eq!(instance.storage.kind.as_str(), "");
    }

    #[test]
    fn test_email_and_url_formats() {
        let email = ValidationRule::email();
        assert!(email.validate("email", &DataValue::from("a@b.co")).is_ok());
        assert!(email.validate("email", &DataValue::from("not-an-email")).is_err());

        let url = ValidationRule::url();
        assert!(url.validate("site", &DataValue::from("https://example.com/x")).is_ok());
        assert!(url.validate("site", &DataValue::from("example")).is_err());
    }

    #[test]
    fn test_nested_array_item_kind() {
        let rule = ValidationRule::array(ValidationRule::number());
        assert_eq!(
            StorageKind::for_item_rule(&rule),
            StorageKind::Array(Box::new(StorageKind::Integer))
        );
    }
}
