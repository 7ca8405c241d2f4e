//! 条件匹配与排序（内存引擎使用）
//!
//! 空值与任何非空值比较均不匹配，与 SQL 的三值逻辑一致；
//! 字符串模式匹配区分大小写。

use crate::types::{DataValue, QueryCondition, QueryOperator, Record, SortConfig, SortDirection};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::cmp::Ordering;

/// 把日期时间或可解析为日期的字符串统一为 DateTime
fn coerce_datetime(value: &DataValue) -> Option<DateTime<FixedOffset>> {
    match value {
        DataValue::DateTime(dt) => Some(*dt),
        DataValue::String(s) => DateTime::parse_from_rfc3339(s).ok().or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc().fixed_offset())
        }),
        _ => None,
    }
}

/// 比较两个值；日期与日期字符串之间可以比较
pub fn compare_values(left: &DataValue, right: &DataValue) -> Option<Ordering> {
    if let Some(ordering) = left.partial_compare(right) {
        return Some(ordering);
    }
    if matches!(left, DataValue::DateTime(_)) || matches!(right, DataValue::DateTime(_)) {
        return match (coerce_datetime(left), coerce_datetime(right)) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        };
    }
    None
}

fn values_equal(left: &DataValue, right: &DataValue) -> bool {
    left.loose_eq(right) || compare_values(left, right) == Some(Ordering::Equal)
}

/// 单个条件是否匹配
pub fn condition_matches(row: &Record, condition: &QueryCondition) -> bool {
    let value = row.get(&condition.field).unwrap_or(&DataValue::Null);

    match condition.operator {
        QueryOperator::IsNull => value.is_null(),
        QueryOperator::Eq if condition.value.is_null() => value.is_null(),
        QueryOperator::Ne if condition.value.is_null() => !value.is_null(),
        _ if value.is_null() => false,
        QueryOperator::Eq => values_equal(value, &condition.value),
        QueryOperator::Ne => !values_equal(value, &condition.value),
        QueryOperator::Gt => compare_values(value, &condition.value) == Some(Ordering::Greater),
        QueryOperator::Gte => matches!(
            compare_values(value, &condition.value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        QueryOperator::Lt => compare_values(value, &condition.value) == Some(Ordering::Less),
        QueryOperator::Lte => matches!(
            compare_values(value, &condition.value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        QueryOperator::In => list_contains(&condition.value, value),
        QueryOperator::NotIn => !list_contains(&condition.value, value),
        QueryOperator::Contains => pattern_matches(value, &condition.value, |s, p| s.contains(p)),
        QueryOperator::StartsWith => {
            pattern_matches(value, &condition.value, |s, p| s.starts_with(p))
        }
        QueryOperator::EndsWith => pattern_matches(value, &condition.value, |s, p| s.ends_with(p)),
    }
}

fn list_contains(list: &DataValue, value: &DataValue) -> bool {
    match list {
        DataValue::Array(items) => items.iter().any(|item| values_equal(value, item)),
        single => values_equal(value, single),
    }
}

fn pattern_matches(value: &DataValue, pattern: &DataValue, test: impl Fn(&str, &str) -> bool) -> bool {
    match (value.as_str(), pattern.as_str()) {
        (Some(s), Some(p)) => test(s, p),
        _ => false,
    }
}

/// 行是否满足全部条件（空条件列表匹配全部）
pub fn row_matches(row: &Record, conditions: &[QueryCondition]) -> bool {
    conditions.iter().all(|c| condition_matches(row, c))
}

/// 排序时的类型次序：null < bool < 数值 < 字符串 < 日期时间 < json < 数组 < 对象
fn sort_rank(value: &DataValue) -> u8 {
    match value {
        DataValue::Null => 0,
        DataValue::Bool(_) => 1,
        DataValue::Int(_) | DataValue::Float(_) => 2,
        DataValue::String(_) => 3,
        DataValue::DateTime(_) => 4,
        DataValue::Json(_) => 5,
        DataValue::Array(_) => 6,
        DataValue::Object(_) => 7,
    }
}

/// 排序用的全序比较：不同类型按类型次序，同类型按值
pub fn sort_compare(left: &DataValue, right: &DataValue) -> Ordering {
    match (left, right) {
        (DataValue::Bool(a), DataValue::Bool(b)) => a.cmp(b),
        (DataValue::Int(a), DataValue::Int(b)) => a.cmp(b),
        (DataValue::String(a), DataValue::String(b)) => a.cmp(b),
        (DataValue::DateTime(a), DataValue::DateTime(b)) => a.cmp(b),
        (DataValue::Int(_) | DataValue::Float(_), DataValue::Int(_) | DataValue::Float(_)) => {
            match (left.as_number(), right.as_number()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => Ordering::Equal,
            }
        }
        _ => match sort_rank(left).cmp(&sort_rank(right)) {
            Ordering::Equal => left
                .to_json_value()
                .to_string()
                .cmp(&right.to_json_value().to_string()),
            ordering => ordering,
        },
    }
}

/// 按排序配置比较两行；升序时空值在前
pub fn compare_rows(a: &Record, b: &Record, sort: &[SortConfig]) -> Ordering {
    for config in sort {
        let left = a.get(&config.field).unwrap_or(&DataValue::Null);
        let right = b.get(&config.field).unwrap_or(&DataValue::Null);
        let ordering = sort_compare(left, right);
        let ordering = match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_null_never_matches_comparisons() {
        let row = record! { "age" => DataValue::Null };
        let gt = QueryCondition::new("age", QueryOperator::Gt, DataValue::Int(1));
        let ne = QueryCondition::new("age", QueryOperator::Ne, DataValue::Int(1));
        assert!(!condition_matches(&row, &gt));
        assert!(!condition_matches(&row, &ne));
    }

    #[test]
    fn test_pattern_is_case_sensitive() {
        let row = record! { "title" => "Hello World" };
        let hit = QueryCondition::new("title", QueryOperator::Contains, DataValue::from("World"));
        let miss = QueryCondition::new("title", QueryOperator::Contains, DataValue::from("world"));
        assert!(condition_matches(&row, &hit));
        assert!(!condition_matches(&row, &miss));
    }

    #[test]
    fn test_sort_compare_is_total_across_types() {
        let mut values = vec![
            DataValue::from("b"),
            DataValue::Int(7),
            DataValue::Null,
            DataValue::from("a"),
            DataValue::Float(2.5),
            DataValue::Bool(true),
            DataValue::Int(-3),
        ];
        values.sort_by(sort_compare);
        assert_eq!(
            values,
            vec![
                DataValue::Null,
                DataValue::Bool(true),
                DataValue::Int(-3),
                DataValue::Float(2.5),
                DataValue::Int(7),
                DataValue::from("a"),
                DataValue::from("b"),
            ]
        );
    }

    #[test]
    fn test_compare_rows_breaks_ties_with_next_key() {
        let a = record! { "role" => "editor", "age" => 40 };
        let b = record! { "role" => "editor", "age" => 20 };
        let sort = vec![
            SortConfig { field: "role".to_string(), direction: SortDirection::Asc },
            SortConfig { field: "age".to_string(), direction: SortDirection::Asc },
        ];
        assert_eq!(compare_rows(&a, &b, &sort), Ordering::Greater);
    }

    #[test]
    fn test_date_string_compares_with_datetime() {
        let row = record! { "published" => "2024-03-01" };
        let threshold = DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00").unwrap();
        let cond = QueryCondition::new("published", QueryOperator::Gt, DataValue::DateTime(threshold));
        assert!(condition_matches(&row, &cond));
    }
}
