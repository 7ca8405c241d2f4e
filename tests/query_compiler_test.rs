//! 查询编译测试

use rat_collections::compiler::compile_query_options;
use rat_collections::fields;
use rat_collections::*;
use serde_json::json;

fn users_table() -> TableSchema {
    let users = Collection::builder("users")
        .field("email", FieldDefinition::new(&fields::email()).required())
        .field("name", FieldDefinition::new(&fields::text()))
        .field("age", FieldDefinition::new(&fields::number()))
        .field("born", FieldDefinition::new(&fields::date()))
        .field("tags", FieldDefinition::new(&fields::array(ValidationRule::string())))
        .build()
        .unwrap();
    build_column_map(&users)
}

fn compile(value: serde_json::Value) -> QuickDbResult<Vec<QueryCondition>> {
    compile_where(&users_table(), &WhereOptions::from_json(value)?)
}

#[test]
fn test_gt_compiles_to_single_ordered_comparison() {
    let conditions = compile(json!({"age": {"gt": 18}})).unwrap();
    assert_eq!(
        conditions,
        vec![QueryCondition::new("age", QueryOperator::Gt, DataValue::Int(18))]
    );
}

#[test]
fn test_is_null_asymmetry() {
    assert!(compile(json!({"name": {"isNull": false}})).unwrap().is_empty());

    let conditions = compile(json!({"name": {"isNull": true}})).unwrap();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].operator, QueryOperator::IsNull);
    assert_eq!(conditions[0].field, "name");
}

#[test]
fn test_literal_is_equality() {
    let conditions = compile(json!({"email": "a@b.io"})).unwrap();
    assert_eq!(
        conditions,
        vec![QueryCondition::new("email", QueryOperator::Eq, DataValue::from("a@b.io"))]
    );
}

#[test]
fn test_unmapped_fields_are_skipped() {
    assert!(compile(json!({"nickname": "bob"})).unwrap().is_empty());
    assert!(compile(json!({"nickname": {"gt": 3}})).unwrap().is_empty());

    let conditions = compile(json!({"nickname": "bob", "age": 3})).unwrap();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].field, "age");
}

#[test]
fn test_zero_recognized_keys_yields_no_condition() {
    assert!(compile(json!({"age": {"greaterThan": 3}})).unwrap().is_empty());
    assert!(compile(json!({})).unwrap().is_empty());
    assert!(compile(serde_json::Value::Null).unwrap().is_empty());
}

#[test]
fn test_multiple_operator_keys_rejected() {
    let result = compile(json!({"age": {"gt": 1, "lt": 10}}));
    assert!(matches!(result, Err(QuickDbError::CompileError { .. })));
}

#[test]
fn test_operator_mapping() {
    let conditions = compile(json!({
        "email": {"neq": "x@y.z"},
        "name": {"not": "bob"},
        "age": {"in": [1, 2, 3]},
        "born": {"lte": "2000-01-01"},
    }))
    .unwrap();
    let operators: Vec<QueryOperator> = conditions.iter().map(|c| c.operator).collect();
    assert_eq!(
        operators,
        vec![QueryOperator::Ne, QueryOperator::Ne, QueryOperator::In, QueryOperator::Lte]
    );
    assert_eq!(
        conditions[2].value,
        DataValue::Array(vec![DataValue::Int(1), DataValue::Int(2), DataValue::Int(3)])
    );

    let patterns = compile(json!({"name": {"startsWith": "Al"}, "email": {"endsWith": ".io"}})).unwrap();
    assert_eq!(patterns[0].operator, QueryOperator::StartsWith);
    assert_eq!(patterns[1].operator, QueryOperator::EndsWith);
}

#[test]
fn test_ordered_comparison_requires_orderable_column() {
    let result = compile(json!({"name": {"gt": "a"}}));
    assert!(matches!(result, Err(QuickDbError::CompileError { ref field, .. }) if field == "name"));

    let result = compile(json!({"tags": {"lte": 3}}));
    assert!(result.is_err());

    assert!(compile(json!({"id": {"gte": 2}})).is_ok());
}

#[test]
fn test_in_requires_list() {
    assert!(compile(json!({"age": {"in": 3}})).is_err());
    assert!(compile(json!({"age": {"notIn": []}})).is_ok());
}

#[test]
fn test_builder_form_matches_json_form() {
    let built = compile_where(
        &users_table(),
        &WhereOptions::new()
            .op("age", WhereOperator::gt(18))
            .op("name", WhereOperator::contains("li")),
    )
    .unwrap();
    let parsed = compile(json!({"age": {"gt": 18}, "name": {"contains": "li"}})).unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_order_by_single_and_list() {
    let table = users_table();
    let single = compile_order_by(&table, &OrderByOptions::from_json(json!({"age": "desc"})).unwrap());
    assert_eq!(
        single,
        vec![SortConfig { field: "age".into(), direction: SortDirection::Desc }]
    );

    let list = compile_order_by(
        &table,
        &OrderByOptions::from_json(json!([{"name": "asc"}, {"nickname": "desc"}, {"age": "desc"}])).unwrap(),
    );
    assert_eq!(
        list,
        vec![
            SortConfig { field: "name".into(), direction: SortDirection::Asc },
            SortConfig { field: "age".into(), direction: SortDirection::Desc },
        ]
    );
}

#[test]
fn test_order_by_object_honors_first_mapped_key() {
    let table = users_table();
    let sort = compile_order_by(
        &table,
        &OrderByOptions::from_json(json!({"nickname": "asc", "age": "desc", "name": "asc"})).unwrap(),
    );
    assert_eq!(
        sort,
        vec![SortConfig { field: "age".into(), direction: SortDirection::Desc }]
    );
}

#[test]
fn test_select_keeps_mapped_true_entries() {
    let table = users_table();
    let select = SelectClause::from_json(json!({"email": true, "nickname": true, "age": false, "name": true})).unwrap();
    assert_eq!(compile_select(&table, &select), vec!["email".to_string(), "name".to_string()]);
}

#[test]
fn test_select_with_only_exclusions_keeps_other_columns() {
    let table = users_table();
    let select = SelectClause::from_json(json!({"email": false, "tags": false, "nickname": false})).unwrap();
    assert_eq!(
        compile_select(&table, &select),
        vec!["id".to_string(), "name".to_string(), "age".to_string(), "born".to_string()]
    );

    let unmapped = SelectClause::from_json(json!({"nickname": true})).unwrap();
    assert!(compile_select(&table, &unmapped).is_empty());
}

#[test]
fn test_zero_limit_and_offset_are_ignored() {
    let table = users_table();
    let options = compile_query_options(&table, None, Some(0), Some(0), None);
    assert_eq!(options.pagination, None);

    let options = compile_query_options(&table, None, Some(5), Some(10), None);
    assert_eq!(options.pagination, Some(PaginationConfig { skip: 10, limit: Some(5) }));
}
