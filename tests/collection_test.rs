//! 集合构建与记录校验测试

use rat_collections::fields;
use rat_collections::*;

fn posts() -> Collection {
    Collection::builder("posts")
        .name("Posts")
        .field("title", FieldDefinition::new(&fields::text()).required())
        .field("status", FieldDefinition::new(&fields::select(vec!["draft", "published"]).unwrap()).default_value("draft"))
        .field("site", FieldDefinition::new(&fields::url()))
        .build()
        .unwrap()
}

#[test]
fn test_collection_function_preserves_field_order() {
    let c = collection(
        "users",
        vec![
            ("email", FieldDefinition::new(&fields::email())),
            ("name", FieldDefinition::new(&fields::text())),
            ("age", FieldDefinition::new(&fields::number())),
        ],
        Some("Users"),
        None,
    )
    .unwrap();
    assert_eq!(c.field_names(), vec!["email", "name", "age"]);
    assert_eq!(c.name.as_deref(), Some("Users"));
    assert!(c.field("email").is_some());
    assert!(c.field("missing").is_none());
}

#[test]
fn test_empty_slug_is_construction_error() {
    let result = Collection::builder("").build();
    assert!(matches!(result, Err(QuickDbError::ConstructionError { .. })));
}

#[test]
fn test_hooks_are_stored_not_invoked() {
    let hooks = CollectionHooks::new()
        .on(HookPoint::BeforeCreate, hook_fn(|_ctx| async { Err(rat_collections::quick_error!(hook, "beforeCreate", "不应在定义时调用")) }))
        .on(HookPoint::BeforeCreate, hook_fn(|_ctx| async { Ok(()) }));
    let c = collection("posts", Vec::<(&str, FieldDefinition)>::new(), None, Some(hooks)).unwrap();
    assert_eq!(c.hook_count(HookPoint::BeforeCreate), 2);
    assert_eq!(c.hook_count(HookPoint::AfterDelete), 0);
    assert!(c.hooks.get(HookPoint::AfterUpdate).is_empty());
}

#[test]
fn test_validate_full_record() {
    let c = posts();
    let missing_title = record! { "status" => "draft" };
    assert!(matches!(
        c.validate_record(&missing_title, false),
        Err(QuickDbError::ValidationError { ref field, .. }) if field == "title"
    ));

    let ok = c.apply_defaults(record! { "title" => "Hello" });
    assert_eq!(ok.get("status"), Some(&DataValue::from("draft")));
    assert!(c.validate_record(&ok, false).is_ok());

    let bad_status = record! { "title" => "Hello", "status" => "archived" };
    assert!(c.validate_record(&bad_status, false).is_err());

    let bad_url = record! { "title" => "Hello", "site" => "not a url" };
    assert!(c.validate_record(&bad_url, false).is_err());
}

#[test]
fn test_validate_partial_record() {
    let c = posts();
    assert!(c.validate_record(&record! { "status" => "published" }, true).is_ok());
    assert!(c.validate_record(&record! { "title" => DataValue::Null }, true).is_err());
}

#[test]
fn test_field_named_id_is_not_validated() {
    let c = Collection::builder("things")
        .field("id", FieldDefinition::new(&fields::text()).required())
        .build()
        .unwrap();
    assert!(c.validate_record(&Record::new(), false).is_ok());
}

#[test]
fn test_json_literals_validate_as_their_shape() {
    let c = posts();
    let record = record! {
        "title" => serde_json::json!("Hello"),
        "status" => serde_json::json!("published"),
    };
    assert!(c.validate_record(&record, false).is_ok());
}
