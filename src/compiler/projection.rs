//! 投影与写入数据过滤

use crate::table::TableSchema;
use crate::types::{Record, SelectClause};
use rat_logger::debug;

/// 编译 select 选项：只保留映射到列且为 true 的字段，保持给定顺序
///
/// 只有 false 条目时按排除处理，返回其余所有列（表定义顺序）；
/// 没有任何映射条目时返回空列表，即全部列
pub fn compile_select(table: &TableSchema, select: &SelectClause) -> Vec<String> {
    let mapped: Vec<&(String, bool)> = select
        .entries()
        .iter()
        .filter(|(field, _)| {
            let known = table.contains(field);
            if !known {
                debug!("表 '{}' 中不存在列 '{}'，跳过该投影字段", table.table, field);
            }
            known
        })
        .collect();

    if !mapped.is_empty() && mapped.iter().all(|(_, included)| !included) {
        return table
            .column_names()
            .into_iter()
            .filter(|name| !mapped.iter().any(|(field, _)| field == name))
            .map(str::to_string)
            .collect();
    }

    mapped
        .into_iter()
        .filter(|(_, included)| *included)
        .map(|(field, _)| field.clone())
        .collect()
}

/// 丢弃写入数据中未映射到列的键
pub fn compile_data(table: &TableSchema, record: Record) -> Record {
    record
        .into_iter()
        .filter(|(key, _)| {
            let mapped = table.contains(key);
            if !mapped {
                debug!("表 '{}' 中不存在列 '{}'，丢弃该写入字段", table.table, key);
            }
            mapped
        })
        .collect()
}
