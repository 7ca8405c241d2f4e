//! where 条件编译

use crate::error::QuickDbResult;
use crate::table::{ColumnDefinition, TableSchema};
use crate::types::{DataValue, QueryCondition, QueryOperator, WhereOperator, WhereOptions, WhereValue};
use rat_logger::debug;

/// 编译 where 选项
///
/// 返回的条件按输入顺序排列并以 AND 组合；空列表表示"匹配全部"。
/// 顺序比较作用在不可排序的列上时返回编译错误。
pub fn compile_where(table: &TableSchema, options: &WhereOptions) -> QuickDbResult<Vec<QueryCondition>> {
    let mut conditions = Vec::with_capacity(options.entries().len());

    for (field, value) in options.entries() {
        let Some(column) = table.get(field) else {
            debug!("表 '{}' 中不存在列 '{}'，跳过该过滤条件", table.table, field);
            continue;
        };

        match value {
            WhereValue::Equals(v) => {
                conditions.push(QueryCondition::new(field.clone(), QueryOperator::Eq, v.clone()));
            }
            WhereValue::Unrecognized => {
                debug!("字段 '{}' 的操作符对象中没有可识别的操作符，跳过", field);
            }
            WhereValue::Operator(op) => {
                if let Some(condition) = compile_operator(column, op)? {
                    conditions.push(condition);
                }
            }
        }
    }

    Ok(conditions)
}

fn compile_operator(column: &ColumnDefinition, op: &WhereOperator) -> QuickDbResult<Option<QueryCondition>> {
    let (operator, value) = match op {
        WhereOperator::Eq(v) => (QueryOperator::Eq, v.clone()),
        WhereOperator::Neq(v) | WhereOperator::Not(v) => (QueryOperator::Ne, v.clone()),
        WhereOperator::Gt(v) => (QueryOperator::Gt, v.clone()),
        WhereOperator::Gte(v) => (QueryOperator::Gte, v.clone()),
        WhereOperator::Lt(v) => (QueryOperator::Lt, v.clone()),
        WhereOperator::Lte(v) => (QueryOperator::Lte, v.clone()),
        WhereOperator::In(list) => (QueryOperator::In, DataValue::Array(list.clone())),
        WhereOperator::NotIn(list) => (QueryOperator::NotIn, DataValue::Array(list.clone())),
        WhereOperator::Contains(s) => (QueryOperator::Contains, DataValue::String(s.clone())),
        WhereOperator::StartsWith(s) => (QueryOperator::StartsWith, DataValue::String(s.clone())),
        WhereOperator::EndsWith(s) => (QueryOperator::EndsWith, DataValue::String(s.clone())),
        WhereOperator::IsNull(true) => (QueryOperator::IsNull, DataValue::Null),
        WhereOperator::IsNull(false) => return Ok(None),
    };

    if operator.is_ordered_comparison() && !column.column_type.is_orderable() {
        return Err(crate::quick_error!(
            compile,
            column.name.clone(),
            format!(
                "操作符 {} 需要可排序的列，列类型为 {}",
                op.key(),
                column.column_type
            )
        ));
    }

    Ok(Some(QueryCondition::new(column.name.clone(), operator, value)))
}
