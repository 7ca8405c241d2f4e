//! 查询编译模块
//!
//! 把声明式的 where/orderBy/select 选项结合列映射编译为与存储引擎无关的条件、
//! 排序与投影。未映射到列的字段一律跳过（debug 日志），不视为错误。

pub mod order_by;
pub mod projection;
pub mod where_clause;

pub use order_by::compile_order_by;
pub use projection::{compile_data, compile_select};
pub use where_clause::compile_where;

use crate::types::{OrderByOptions, PaginationConfig, QueryOptions, SelectClause};
use crate::table::TableSchema;

/// 组装交给存储层的查询选项
///
/// `limit`/`offset` 为 0 时视为未设置
pub fn compile_query_options(
    table: &TableSchema,
    order_by: Option<&OrderByOptions>,
    limit: Option<u64>,
    offset: Option<u64>,
    select: Option<&SelectClause>,
) -> QueryOptions {
    let mut options = QueryOptions::new();
    if let Some(order_by) = order_by {
        options = options.with_sort(compile_order_by(table, order_by));
    }

    let limit = limit.filter(|l| *l > 0);
    let offset = offset.filter(|o| *o > 0);
    if limit.is_some() || offset.is_some() {
        options = options.with_pagination(PaginationConfig {
            skip: offset.unwrap_or(0),
            limit,
        });
    }

    if let Some(select) = select {
        options = options.with_fields(compile_select(table, select));
    }
    options
}
