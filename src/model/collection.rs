//! 集合定义
//!
//! 集合 = slug + 有序字段 + 钩子。slug 是集合唯一的身份标识。

use crate::error::QuickDbResult;
use crate::model::field::FieldDefinition;
use crate::model::hooks::{CollectionHooks, HookPoint};
use crate::types::{DataValue, Record};
use rat_logger::debug;
use std::collections::HashSet;

/// 保留的标识列名
pub const ID_FIELD: &str = "id";

/// 集合定义
#[derive(Debug, Clone)]
pub struct Collection {
    /// 唯一标识
    pub slug: String,
    /// 显示名称
    pub name: Option<String>,
    /// 字段（保持声明顺序）
    pub fields: Vec<(String, FieldDefinition)>,
    /// 生命周期钩子
    pub hooks: CollectionHooks,
}

/// 创建集合
///
/// slug 为空或字段名重复时返回构造错误
pub fn collection<S: Into<String>>(
    slug: &str,
    fields: Vec<(S, FieldDefinition)>,
    name: Option<&str>,
    hooks: Option<CollectionHooks>,
) -> QuickDbResult<Collection> {
    if slug.trim().is_empty() {
        return Err(crate::quick_error!(construction, "集合 slug 不能为空"));
    }

    let mut seen = HashSet::new();
    let mut ordered = Vec::with_capacity(fields.len());
    for (field_name, definition) in fields {
        let field_name = field_name.into();
        if field_name.is_empty() {
            return Err(crate::quick_error!(
                construction,
                format!("集合 '{}' 中存在空字段名", slug)
            ));
        }
        if !seen.insert(field_name.clone()) {
            return Err(crate::quick_error!(
                construction,
                format!("集合 '{}' 中字段名重复: '{}'", slug, field_name)
            ));
        }
        ordered.push((field_name, definition));
    }

    Ok(Collection {
        slug: slug.to_string(),
        name: name.map(str::to_string),
        fields: ordered,
        hooks: hooks.unwrap_or_default(),
    })
}

impl Collection {
    /// 以构建器方式定义集合
    pub fn builder(slug: &str) -> CollectionBuilder {
        CollectionBuilder::new(slug)
    }

    /// 按名称查找字段
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, def)| def)
    }

    /// 字段名（声明顺序）
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// 为缺失的字段填充默认值
    pub fn apply_defaults(&self, mut record: Record) -> Record {
        for (name, def) in &self.fields {
            if name == ID_FIELD || record.contains_key(name) {
                continue;
            }
            if let Some(default) = &def.default {
                record.insert(name.clone(), default.clone());
            }
        }
        record
    }

    /// 校验记录
    ///
    /// `partial` 为真时只校验记录中出现的字段（更新场景），
    /// 否则缺失字段按空值处理，必填字段将报错
    pub fn validate_record(&self, record: &Record, partial: bool) -> QuickDbResult<()> {
        for (name, def) in &self.fields {
            if name == ID_FIELD {
                continue;
            }
            match record.get(name) {
                Some(value) => def.validate_with_field_name(value, name)?,
                None if partial => {}
                None => def.validate_with_field_name(&DataValue::Null, name)?,
            }
        }
        debug!("集合 '{}' 记录校验通过 (partial={})", self.slug, partial);
        Ok(())
    }

    /// 指定时机上的钩子数量
    pub fn hook_count(&self, point: HookPoint) -> usize {
        self.hooks.get(point).len()
    }
}

/// 集合构建器
#[derive(Debug)]
pub struct CollectionBuilder {
    slug: String,
    name: Option<String>,
    fields: Vec<(String, FieldDefinition)>,
    hooks: CollectionHooks,
}

impl CollectionBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: None,
            fields: Vec::new(),
            hooks: CollectionHooks::default(),
        }
    }

    /// 设置显示名称
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// 追加字段
    pub fn field(mut self, name: &str, definition: FieldDefinition) -> Self {
        self.fields.push((name.to_string(), definition));
        self
    }

    /// 设置钩子
    pub fn hooks(mut self, hooks: CollectionHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> QuickDbResult<Collection> {
        collection(
            &self.slug,
            self.fields,
            self.name.as_deref(),
            Some(self.hooks),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields;

    #[test]
    fn test_empty_slug_rejected() {
        let result = collection::<&str>("", vec![], None, None);
        assert!(result.is_err());
        assert!(collection::<&str>("   ", vec![], None, None).is_err());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = Collection::builder("posts")
            .field("title", FieldDefinition::new(&fields::text()))
            .field("title", FieldDefinition::new(&fields::text()))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_hooks_default_empty() {
        let c = collection::<&str>("posts", vec![], None, None).unwrap();
        for point in HookPoint::ALL {
            assert_eq!(c.hook_count(point), 0);
        }
    }

    #[test]
    fn test_apply_defaults_keeps_supplied_values() {
        let c = Collection::builder("posts")
            .field("status", FieldDefinition::new(&fields::text()).default_value("draft"))
            .field("views", FieldDefinition::new(&fields::number()).default_value(0))
            .build()
            .unwrap();
        let mut record = Record::new();
        record.insert("status".into(), DataValue::from("published"));
        let record = c.apply_defaults(record);
        assert_eq!(record.get("status"), Some(&DataValue::from("published")));
        assert_eq!(record.get("views"), Some(&DataValue::Int(0)));
    }
}
