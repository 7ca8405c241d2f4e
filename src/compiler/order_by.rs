//! 排序编译

use crate::table::TableSchema;
use crate::types::{OrderByOptions, SortConfig};
use rat_logger::debug;

/// 编译 orderBy 选项
///
/// 每个分组只采用第一个能映射到列的键；结果保持输入的优先级顺序
pub fn compile_order_by(table: &TableSchema, options: &OrderByOptions) -> Vec<SortConfig> {
    let mut sort = Vec::with_capacity(options.groups().len());

    for group in options.groups() {
        let chosen = group.iter().find(|(field, _)| {
            let mapped = table.contains(field);
            if !mapped {
                debug!("表 '{}' 中不存在列 '{}'，跳过该排序键", table.table, field);
            }
            mapped
        });
        if let Some((field, direction)) = chosen {
            sort.push(SortConfig {
                field: field.clone(),
                direction: *direction,
            });
        }
    }

    sort
}
