//! 声明式查询选项
//!
//! 调用方用数据描述意图（where/orderBy/select），由 [`crate::compiler`] 结合集合的列映射
//! 编译为 [`crate::types::QueryCondition`] 与 [`crate::types::SortConfig`]。
//! 既可以用构建方法显式构造，也可以从 JSON 形状解析。

use crate::error::QuickDbResult;
use crate::types::data_value::{json_value_to_data_value, DataValue};
use crate::types::query::SortDirection;
use serde_json::Value;

/// 可识别的操作符键
pub const OPERATOR_KEYS: [&str; 13] = [
    "eq", "neq", "gt", "gte", "lt", "lte", "in", "notIn", "contains", "startsWith", "endsWith",
    "isNull", "not",
];

/// where 操作符（每个操作符对象只能有一个）
#[derive(Debug, Clone, PartialEq)]
pub enum WhereOperator {
    Eq(DataValue),
    Neq(DataValue),
    Gt(DataValue),
    Gte(DataValue),
    Lt(DataValue),
    Lte(DataValue),
    In(Vec<DataValue>),
    NotIn(Vec<DataValue>),
    Contains(String),
    StartsWith(String),
    EndsWith(String),
    /// `IsNull(false)` 不产生任何条件
    IsNull(bool),
    /// 与 `Neq` 等价
    Not(DataValue),
}

impl WhereOperator {
    pub fn gt(value: impl Into<DataValue>) -> Self {
        WhereOperator::Gt(value.into())
    }

    pub fn gte(value: impl Into<DataValue>) -> Self {
        WhereOperator::Gte(value.into())
    }

    pub fn lt(value: impl Into<DataValue>) -> Self {
        WhereOperator::Lt(value.into())
    }

    pub fn lte(value: impl Into<DataValue>) -> Self {
        WhereOperator::Lte(value.into())
    }

    pub fn neq(value: impl Into<DataValue>) -> Self {
        WhereOperator::Neq(value.into())
    }

    pub fn in_list<T: Into<DataValue>>(values: Vec<T>) -> Self {
        WhereOperator::In(values.into_iter().map(Into::into).collect())
    }

    pub fn not_in<T: Into<DataValue>>(values: Vec<T>) -> Self {
        WhereOperator::NotIn(values.into_iter().map(Into::into).collect())
    }

    pub fn contains(pattern: impl Into<String>) -> Self {
        WhereOperator::Contains(pattern.into())
    }

    /// 操作符在 JSON 形状中的键名
    pub fn key(&self) -> &'static str {
        match self {
            WhereOperator::Eq(_) => "eq",
            WhereOperator::Neq(_) => "neq",
            WhereOperator::Gt(_) => "gt",
            WhereOperator::Gte(_) => "gte",
            WhereOperator::Lt(_) => "lt",
            WhereOperator::Lte(_) => "lte",
            WhereOperator::In(_) => "in",
            WhereOperator::NotIn(_) => "notIn",
            WhereOperator::Contains(_) => "contains",
            WhereOperator::StartsWith(_) => "startsWith",
            WhereOperator::EndsWith(_) => "endsWith",
            WhereOperator::IsNull(_) => "isNull",
            WhereOperator::Not(_) => "not",
        }
    }

    /// 从操作符键与 JSON 负载解析
    fn parse(field: &str, key: &str, payload: Value) -> QuickDbResult<Self> {
        let operator = match key {
            "eq" => WhereOperator::Eq(json_value_to_data_value(payload)),
            "neq" => WhereOperator::Neq(json_value_to_data_value(payload)),
            "not" => WhereOperator::Not(json_value_to_data_value(payload)),
            "gt" => WhereOperator::Gt(json_value_to_data_value(payload)),
            "gte" => WhereOperator::Gte(json_value_to_data_value(payload)),
            "lt" => WhereOperator::Lt(json_value_to_data_value(payload)),
            "lte" => WhereOperator::Lte(json_value_to_data_value(payload)),
            "in" => WhereOperator::In(parse_list(field, key, payload)?),
            "notIn" => WhereOperator::NotIn(parse_list(field, key, payload)?),
            "contains" => WhereOperator::Contains(pattern_text(payload)),
            "startsWith" => WhereOperator::StartsWith(pattern_text(payload)),
            "endsWith" => WhereOperator::EndsWith(pattern_text(payload)),
            "isNull" => match payload {
                Value::Bool(flag) => WhereOperator::IsNull(flag),
                other => {
                    return Err(crate::quick_error!(
                        compile,
                        field,
                        format!("isNull 需要布尔值，实际为: {}", other)
                    ));
                }
            },
            other => {
                return Err(crate::quick_error!(
                    compile,
                    field,
                    format!("未知的操作符: {}", other)
                ));
            }
        };
        Ok(operator)
    }
}

fn parse_list(field: &str, key: &str, payload: Value) -> QuickDbResult<Vec<DataValue>> {
    match payload {
        Value::Array(items) => Ok(items.into_iter().map(json_value_to_data_value).collect()),
        other => Err(crate::quick_error!(
            compile,
            field,
            format!("{} 需要数组，实际为: {}", key, other)
        )),
    }
}

fn pattern_text(payload: Value) -> String {
    match payload {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// 单个字段的 where 取值
#[derive(Debug, Clone, PartialEq)]
pub enum WhereValue {
    /// 字面量，按相等比较
    Equals(DataValue),
    /// 操作符对象
    Operator(WhereOperator),
    /// 不含任何可识别操作符键的对象，不产生条件
    Unrecognized,
}

impl WhereValue {
    /// 解析单个字段的取值：非对象一律视为相等比较
    pub fn from_json(field: &str, value: Value) -> QuickDbResult<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => return Ok(WhereValue::Equals(json_value_to_data_value(other))),
        };

        let mut recognized = object
            .into_iter()
            .filter(|(key, _)| OPERATOR_KEYS.contains(&key.as_str()));

        let Some((key, payload)) = recognized.next() else {
            return Ok(WhereValue::Unrecognized);
        };

        if let Some((extra, _)) = recognized.next() {
            return Err(crate::quick_error!(
                compile,
                field,
                format!("操作符对象只能包含一个操作符，同时出现了 {} 和 {}", key, extra)
            ));
        }

        Ok(WhereValue::Operator(WhereOperator::parse(field, &key, payload)?))
    }
}

/// where 选项：字段名 → 取值，按给定顺序保存，条件之间为 AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereOptions {
    entries: Vec<(String, WhereValue)>,
}

impl WhereOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加相等条件
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.entries
            .push((field.into(), WhereValue::Equals(value.into())));
        self
    }

    /// 添加操作符条件
    pub fn op(mut self, field: impl Into<String>, operator: WhereOperator) -> Self {
        self.entries
            .push((field.into(), WhereValue::Operator(operator)));
        self
    }

    /// 添加任意取值
    pub fn value(mut self, field: impl Into<String>, value: WhereValue) -> Self {
        self.entries.push((field.into(), value));
        self
    }

    pub fn entries(&self) -> &[(String, WhereValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 从 JSON 对象解析，例如 `{"age": {"gt": 18}, "email": "a@b.c"}`
    pub fn from_json(value: Value) -> QuickDbResult<Self> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(crate::quick_error!(
                    compile,
                    "where",
                    format!("where 选项必须是对象，实际为: {}", other)
                ));
            }
        };

        let mut entries = Vec::with_capacity(object.len());
        for (field, value) in object {
            let parsed = WhereValue::from_json(&field, value)?;
            entries.push((field, parsed));
        }
        Ok(Self { entries })
    }

    /// 还原为 JSON 形状（用于钩子上下文与日志）
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        for (field, value) in &self.entries {
            let json = match value {
                WhereValue::Equals(v) => v.to_json_value(),
                WhereValue::Unrecognized => Value::Object(serde_json::Map::new()),
                WhereValue::Operator(op) => {
                    let payload = match op {
                        WhereOperator::Eq(v)
                        | WhereOperator::Neq(v)
                        | WhereOperator::Gt(v)
                        | WhereOperator::Gte(v)
                        | WhereOperator::Lt(v)
                        | WhereOperator::Lte(v)
                        | WhereOperator::Not(v) => v.to_json_value(),
                        WhereOperator::In(list) | WhereOperator::NotIn(list) => {
                            Value::Array(list.iter().map(DataValue::to_json_value).collect())
                        }
                        WhereOperator::Contains(s)
                        | WhereOperator::StartsWith(s)
                        | WhereOperator::EndsWith(s) => Value::String(s.clone()),
                        WhereOperator::IsNull(flag) => Value::Bool(*flag),
                    };
                    let mut inner = serde_json::Map::new();
                    inner.insert(op.key().to_string(), payload);
                    Value::Object(inner)
                }
            };
            object.insert(field.clone(), json);
        }
        Value::Object(object)
    }
}

/// orderBy 选项
///
/// 每个分组对应输入中的一个排序对象；同一对象中有多个键时，
/// 只采用按给定顺序第一个能映射到列的键
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderByOptions {
    groups: Vec<Vec<(String, SortDirection)>>,
}

impl OrderByOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asc(self, field: impl Into<String>) -> Self {
        self.push(field, SortDirection::Asc)
    }

    pub fn desc(self, field: impl Into<String>) -> Self {
        self.push(field, SortDirection::Desc)
    }

    pub fn push(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.groups.push(vec![(field.into(), direction)]);
        self
    }

    pub fn groups(&self) -> &[Vec<(String, SortDirection)>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 从 JSON 解析：单个对象或对象数组
    pub fn from_json(value: Value) -> QuickDbResult<Self> {
        let items = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) => items,
            object @ Value::Object(_) => vec![object],
            other => {
                return Err(crate::quick_error!(
                    compile,
                    "orderBy",
                    format!("orderBy 必须是对象或对象数组，实际为: {}", other)
                ));
            }
        };

        let mut groups = Vec::with_capacity(items.len());
        for item in items {
            let object = match item {
                Value::Object(object) => object,
                other => {
                    return Err(crate::quick_error!(
                        compile,
                        "orderBy",
                        format!("orderBy 数组元素必须是对象，实际为: {}", other)
                    ));
                }
            };
            let group = object
                .into_iter()
                .map(|(field, direction)| {
                    let direction = direction
                        .as_str()
                        .map(SortDirection::parse)
                        .unwrap_or(SortDirection::Asc);
                    (field, direction)
                })
                .collect();
            groups.push(group);
        }
        Ok(Self { groups })
    }
}

/// select 选项：字段名 → 是否返回
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectClause {
    entries: Vec<(String, bool)>,
}

impl SelectClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.entries.push((field.into(), true));
        self
    }

    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.entries.push((field.into(), false));
        self
    }

    pub fn entries(&self) -> &[(String, bool)] {
        &self.entries
    }

    pub fn from_json(value: Value) -> QuickDbResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(object) => Ok(Self {
                entries: object
                    .into_iter()
                    .map(|(field, flag)| (field, flag.as_bool().unwrap_or(false)))
                    .collect(),
            }),
            other => Err(crate::quick_error!(
                compile,
                "select",
                format!("select 必须是对象，实际为: {}", other)
            )),
        }
    }
}
