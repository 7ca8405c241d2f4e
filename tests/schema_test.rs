//! 表结构派生测试

use rat_collections::fields::{self, RelationOptions};
use rat_collections::*;

fn articles() -> Collection {
    Collection::builder("articles")
        .field("title", FieldDefinition::new(&fields::text()).required())
        .field("id", FieldDefinition::new(&fields::text()))
        .field("views", FieldDefinition::new(&fields::number()).indexed())
        .field("slug", FieldDefinition::new(&fields::text()).unique())
        .field("author", FieldDefinition::new(&fields::relation(RelationOptions::new("users"))))
        .field("tags", FieldDefinition::new(&fields::array(ValidationRule::string())))
        .field("meta", FieldDefinition::new(&fields::json(None)))
        .field("published_at", FieldDefinition::new(&fields::timestamp()))
        .field("misc", FieldDefinition::new(&field_type(ValidationRule::any(), None)))
        .build()
        .unwrap()
}

#[test]
fn test_id_first_then_declared_order() {
    let table = build_column_map(&articles());
    assert_eq!(
        table.column_names(),
        vec!["id", "title", "views", "slug", "author", "tags", "meta", "published_at", "misc"]
    );
    assert_eq!(table.columns.iter().filter(|c| c.name == "id").count(), 1);
}

#[test]
fn test_identity_column() {
    let table = build_column_map(&articles());
    let id = &table.columns[0];
    assert_eq!(id.column_type, ColumnType::Serial);
    assert!(id.primary_key);
    assert!(!id.nullable);
}

#[test]
fn test_column_descriptors() {
    let table = build_column_map(&articles());
    let title = table.get("title").unwrap();
    assert_eq!(title.column_type, ColumnType::Text);
    assert!(!title.nullable);

    assert!(table.get("views").unwrap().indexed);
    assert!(table.get("slug").unwrap().unique);

    let author = table.get("author").unwrap();
    assert_eq!(author.column_type, ColumnType::Integer);
    assert_eq!(author.references.as_deref(), Some("users"));
    assert!(author.nullable);

    assert_eq!(
        table.get("tags").unwrap().column_type,
        ColumnType::Array(Box::new(ColumnType::Text))
    );
    assert_eq!(table.get("meta").unwrap().column_type, ColumnType::Jsonb);
    assert_eq!(table.get("published_at").unwrap().column_type, ColumnType::Timestamp);
    assert_eq!(table.get("misc").unwrap().column_type, ColumnType::Text);
}

#[test]
fn test_deterministic() {
    let c = articles();
    assert_eq!(build_column_map(&c), build_column_map(&c));
}

#[test]
fn test_empty_collection_has_only_id() {
    let c = Collection::builder("empty").build().unwrap();
    assert_eq!(build_column_map(&c).column_names(), vec!["id"]);
}

#[test]
fn test_build_schema_and_serialize() {
    let users = Collection::builder("users")
        .field("email", FieldDefinition::new(&fields::email()))
        .build()
        .unwrap();
    let schema = build_schema(&[users, articles()]);
    assert_eq!(schema.keys().cloned().collect::<Vec<_>>(), vec!["articles", "users"]);

    let json = serde_json::to_value(&schema["users"]).unwrap();
    assert_eq!(json["table"], "users");
    assert_eq!(json["columns"][0]["name"], "id");
    assert_eq!(json["columns"][1]["name"], "email");
}
