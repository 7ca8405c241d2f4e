//! 字段类型与字段构建测试

use rat_collections::fields::{self, RelationOptions};
use rat_collections::*;

#[test]
fn test_array_item_kind_follows_item_rule() {
    let text_array = fields::array(ValidationRule::string()).create();
    assert_eq!(text_array.storage.item_kind().map(|k| k.as_str()), Some("text"));

    let number_array = fields::array(ValidationRule::number()).create();
    assert_eq!(number_array.storage.item_kind().map(|k| k.as_str()), Some("integer"));

    let object_array = fields::array(ValidationRule::object(vec![("x", ValidationRule::number())])).create();
    assert_eq!(object_array.storage.item_kind().map(|k| k.as_str()), Some("jsonb"));

    let bool_array = fields::array(ValidationRule::boolean()).create();
    assert_eq!(bool_array.storage.item_kind(), Some(&StorageKind::Boolean));

    let date_array = fields::array(ValidationRule::date()).create();
    assert_eq!(date_array.storage.item_kind(), Some(&StorageKind::Timestamp));

    let enum_array =
        fields::array(ValidationRule::enumeration(vec!["a", "b"]).unwrap()).create();
    assert_eq!(enum_array.storage.item_kind(), Some(&StorageKind::Text));
}

#[test]
fn test_relation_defaults() {
    let instance = fields::relation(RelationOptions::new("users")).create();
    assert_eq!(instance.storage.kind, StorageKind::Integer);
    let relation = instance.storage.relation.clone().unwrap();
    assert_eq!(relation.references, "users");
    assert!(!relation.many);
    assert!(!relation.singular);
    assert_eq!(relation.through, None);
    assert_eq!(instance.validation, ValidationRule::identifier());
}

#[test]
fn test_relation_many_changes_validation_only() {
    let many = fields::relation(RelationOptions::new("tags").many(true).through("post_tags")).create();
    assert_eq!(many.validation, ValidationRule::array(ValidationRule::identifier()));
    assert_eq!(many.storage.kind, StorageKind::Integer);
    let relation = many.storage.relation.unwrap();
    assert!(relation.many);
    assert!(!relation.singular);
    assert_eq!(relation.through.as_deref(), Some("post_tags"));

    let both = fields::relation(RelationOptions::new("tags").many(true).singular(true)).create();
    let relation = both.storage.relation.unwrap();
    assert!(relation.many);
    assert!(relation.singular);
}

#[test]
fn test_relation_instances_are_independent() {
    let to_users = fields::relation(RelationOptions::new("users")).create();
    let to_posts = fields::relation(RelationOptions::new("posts")).create();
    assert_eq!(to_users.storage.references(), Some("users"));
    assert_eq!(to_posts.storage.references(), Some("posts"));
}

#[test]
fn test_empty_select_fails_at_construction() {
    let result = fields::select(Vec::<String>::new());
    assert!(matches!(result, Err(QuickDbError::ConstructionError { .. })));

    let ok = fields::select(vec!["draft", "published"]).unwrap().create();
    assert!(ok.validate("status", &DataValue::from("draft")).is_ok());
    assert!(ok.validate("status", &DataValue::from("archived")).is_err());
}

#[test]
fn test_json_defaults_to_accept_anything() {
    let instance = fields::json(None).create();
    assert_eq!(instance.storage.kind.as_str(), "jsonb");
    assert!(instance.validate("meta", &DataValue::from(1)).is_ok());
    assert!(instance
        .validate("meta", &DataValue::Json(serde_json::json!({"a": [1, 2]})))
        .is_ok());

    let strict = fields::json(Some(ValidationRule::object(vec![("a", ValidationRule::number())]))).create();
    assert!(strict.validate("meta", &DataValue::Object(record! { "a" => 1 })).is_ok());
    assert!(strict.validate("meta", &DataValue::Object(record! { "b" => 1 })).is_err());
}

#[test]
fn test_builtin_storage_kinds() {
    assert_eq!(fields::text().create().storage.kind, StorageKind::Text);
    assert_eq!(fields::email().create().storage.kind, StorageKind::Text);
    assert_eq!(fields::url().create().storage.kind, StorageKind::Text);
    assert_eq!(fields::number().create().storage.kind, StorageKind::Integer);
    assert_eq!(fields::boolean().create().storage.kind, StorageKind::Boolean);
    assert_eq!(fields::date().create().storage.kind, StorageKind::Date);
    assert_eq!(fields::timestamp().create().storage.kind, StorageKind::Timestamp);
}

#[test]
fn test_field_options_pass_through() {
    let definition = field(
        &fields::text(),
        FieldOptions {
            required: Some(true),
            label: Some("标题".to_string()),
            ..Default::default()
        },
    );
    assert!(definition.required);
    assert!(!definition.unique);
    assert!(!definition.indexed);
    assert_eq!(definition.label.as_deref(), Some("标题"));
    assert_eq!(definition.description, None);
    assert_eq!(definition.default, None);
}

#[test]
fn test_field_modifiers_compose() {
    let definition = FieldDefinition::new(&fields::email())
        .required()
        .unique()
        .indexed()
        .description("登录邮箱")
        .optional();
    assert!(!definition.required);
    assert!(definition.unique);
    assert!(definition.indexed);
    assert_eq!(definition.description.as_deref(), Some("登录邮箱"));
}

#[test]
fn test_custom_storage_descriptor() {
    let factory = field_type(
        ValidationRule::string(),
        Some(StorageDescriptor::new(StorageKind::Custom("uuid".into()))),
    );
    assert_eq!(factory.create().storage.kind.as_str(), "uuid");
}
