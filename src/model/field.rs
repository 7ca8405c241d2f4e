//! 字段定义

use crate::error::QuickDbResult;
use crate::model::field_types::{FieldType, FieldTypeFactory};
use crate::types::DataValue;
use serde::{Deserialize, Serialize};

/// 字段选项，未设置的可选项保持缺省（`None`），而不是空值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub required: Option<bool>,
    pub unique: Option<bool>,
    pub indexed: Option<bool>,
    pub default: Option<DataValue>,
    pub label: Option<String>,
    pub description: Option<String>,
}

/// 字段定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// 字段类型（已解析的实例）
    pub field_type: FieldType,
    /// 是否必填
    pub required: bool,
    /// 是否唯一
    pub unique: bool,
    /// 是否建立索引
    pub indexed: bool,
    /// 默认值；`None` 表示未指定，`Some(DataValue::Null)` 表示显式的空默认值
    pub default: Option<DataValue>,
    /// 显示名称
    pub label: Option<String>,
    /// 字段描述
    pub description: Option<String>,
}

/// 创建字段定义：从工厂取得新的字段类型实例，并一次性应用默认值
pub fn field(factory: &FieldTypeFactory, options: FieldOptions) -> FieldDefinition {
    FieldDefinition {
        field_type: factory.create(),
        required: options.required.unwrap_or(false),
        unique: options.unique.unwrap_or(false),
        indexed: options.indexed.unwrap_or(false),
        default: options.default,
        label: options.label,
        description: options.description,
    }
}

impl FieldDefinition {
    /// 使用默认选项创建字段定义
    pub fn new(factory: &FieldTypeFactory) -> Self {
        field(factory, FieldOptions::default())
    }

    /// 设置为必填字段
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 设置为可选字段
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// 设置为唯一字段
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// 设置为索引字段
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// 设置默认值
    pub fn default_value(mut self, value: impl Into<DataValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// 设置显示名称
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// 设置字段描述
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// 验证字段值
    ///
    /// 空值只在必填字段上报错；非空值交给字段类型的校验规则
    pub fn validate_with_field_name(&self, value: &DataValue, field_name: &str) -> QuickDbResult<()> {
        if value.is_null() {
            if self.required {
                return Err(crate::quick_error!(validation, field_name, "必填字段不能为空"));
            }
            return Ok(());
        }
        self.field_type.validate(field_name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields;

    #[test]
    fn test_defaults_applied_once() {
        let f = field(&fields::text(), FieldOptions::default());
        assert!(!f.required);
        assert!(!f.unique);
        assert!(!f.indexed);
        assert_eq!(f.default, None);
        assert_eq!(f.label, None);
        assert_eq!(f.description, None);
    }

    #[test]
    fn test_explicit_null_default_differs_from_missing() {
        let f = FieldDefinition::new(&fields::text()).default_value(DataValue::Null);
        assert_eq!(f.default, Some(DataValue::Null));
    }

    #[test]
    fn test_required_rejects_null() {
        let f = FieldDefinition::new(&fields::number()).required();
        assert!(f.validate_with_field_name(&DataValue::Null, "age").is_err());
        assert!(f.validate_with_field_name(&DataValue::Int(3), "age").is_ok());
    }
}
