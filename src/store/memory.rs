//! 内存存储引擎
//!
//! 表按 slug 存放，`id` 自增；唯一列与非空列的约束在写入前整体检查，
//! 任意一行违反约束时整批写入失败，不产生部分写入。

use crate::error::QuickDbResult;
use crate::model::ID_FIELD;
use crate::store::matcher::{compare_rows, compare_values, row_matches};
use crate::store::{Store, StoreWriteResult};
use crate::table::TableSchema;
use crate::types::*;
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use rat_logger::debug;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Default)]
struct MemoryTable {
    rows: Vec<Record>,
    next_id: i64,
}

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: DashMap<String, Arc<RwLock<MemoryTable>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, name: &str) -> Arc<RwLock<MemoryTable>> {
        self.tables
            .entry(name.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// 当前表中的行数（不经过条件编译）
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .get(table)
            .map(|t| t.read().rows.len())
            .unwrap_or(0)
    }
}

/// 按列映射补全一行：缺失列填空值，未映射的键丢弃
fn normalize_row(table: &TableSchema, row: &Record) -> Record {
    table
        .columns
        .iter()
        .map(|column| {
            let value = row.get(&column.name).cloned().unwrap_or(DataValue::Null);
            (column.name.clone(), value)
        })
        .collect()
}

/// 检查非空与唯一约束
///
/// `candidates` 为即将写入的行，`others` 为不受本次写入影响的既有行
fn check_constraints(table: &TableSchema, candidates: &[Record], others: &[&Record]) -> QuickDbResult<()> {
    for row in candidates {
        for column in &table.columns {
            if !column.nullable && !column.primary_key {
                if row.get(&column.name).map_or(true, DataValue::is_null) {
                    return Err(crate::quick_error!(
                        store,
                        format!("表 '{}' 的列 '{}' 不能为空", table.table, column.name)
                    ));
                }
            }
        }
    }

    for column in table.unique_columns() {
        let mut seen: Vec<&DataValue> = others
            .iter()
            .filter_map(|row| row.get(&column.name))
            .filter(|v| !v.is_null())
            .collect();
        for row in candidates {
            let Some(value) = row.get(&column.name).filter(|v| !v.is_null()) else {
                continue;
            };
            let duplicated = seen
                .iter()
                .any(|existing| existing.loose_eq(value) || compare_values(existing, value) == Some(Ordering::Equal));
            if duplicated {
                return Err(crate::quick_error!(
                    store,
                    format!(
                        "违反唯一约束: 表 '{}' 的列 '{}' 已存在值 {}",
                        table.table, column.name, value
                    )
                ));
            }
            seen.push(value);
        }
    }
    Ok(())
}

fn project(row: &Record, fields: &[String]) -> Record {
    if fields.is_empty() {
        return row.clone();
    }
    row.iter()
        .filter(|(key, _)| key.as_str() == ID_FIELD || fields.iter().any(|f| f == *key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[async_trait]
impl Store for MemoryStore {
    async fn select(
        &self,
        table: &TableSchema,
        conditions: &[QueryCondition],
        options: &QueryOptions,
    ) -> QuickDbResult<Vec<Record>> {
        let handle = self.table(&table.table);
        let guard = handle.read();

        let mut matched: Vec<&Record> = guard
            .rows
            .iter()
            .filter(|row| row_matches(row, conditions))
            .collect();

        if !options.sort.is_empty() {
            matched.sort_by(|a, b| compare_rows(a, b, &options.sort));
        }

        let (skip, limit) = match &options.pagination {
            Some(p) => (p.skip as usize, p.limit.map(|l| l as usize)),
            None => (0, None),
        };

        let rows: Vec<Record> = matched
            .into_iter()
            .skip(skip)
            .take(limit.unwrap_or(usize::MAX))
            .map(|row| project(row, &options.fields))
            .collect();

        debug!("内存引擎查询: 表={}, 条件数={}, 结果数={}", table.table, conditions.len(), rows.len());
        Ok(rows)
    }

    async fn insert(
        &self,
        table: &TableSchema,
        rows: &[Record],
        returning: bool,
    ) -> QuickDbResult<StoreWriteResult> {
        let handle = self.table(&table.table);
        let mut guard = handle.write();

        let mut next_id = guard.next_id;
        let mut prepared = Vec::with_capacity(rows.len());
        for row in rows {
            let mut row = normalize_row(table, row);
            match row.get(ID_FIELD).and_then(DataValue::as_i64) {
                Some(explicit) => next_id = next_id.max(explicit),
                None => {
                    next_id += 1;
                    row.insert(ID_FIELD.to_string(), DataValue::Int(next_id));
                }
            }
            prepared.push(row);
        }

        let existing: Vec<&Record> = guard.rows.iter().collect();
        check_constraints(table, &prepared, &existing)?;

        guard.next_id = next_id;
        guard.rows.extend(prepared.iter().cloned());
        debug!("内存引擎插入: 表={}, 行数={}", table.table, prepared.len());

        Ok(StoreWriteResult {
            affected: Some(prepared.len() as u64),
            rows: if returning { prepared } else { Vec::new() },
        })
    }

    async fn update(
        &self,
        table: &TableSchema,
        conditions: &[QueryCondition],
        data: &Record,
        returning: bool,
    ) -> QuickDbResult<StoreWriteResult> {
        let handle = self.table(&table.table);
        let mut guard = handle.write();

        let mut targets = Vec::new();
        let mut updated = Vec::new();
        for (index, row) in guard.rows.iter().enumerate() {
            if row_matches(row, conditions) {
                let mut next = row.clone();
                for (key, value) in data {
                    if table.contains(key) {
                        next.insert(key.clone(), value.clone());
                    }
                }
                targets.push(index);
                updated.push(next);
            }
        }

        let untouched: Vec<&Record> = guard
            .rows
            .iter()
            .enumerate()
            .filter(|(index, _)| !targets.contains(index))
            .map(|(_, row)| row)
            .collect();
        check_constraints(table, &updated, &untouched)?;

        for (index, row) in targets.iter().zip(updated.iter()) {
            guard.rows[*index] = row.clone();
        }
        debug!("内存引擎更新: 表={}, 行数={}", table.table, updated.len());

        Ok(StoreWriteResult {
            affected: Some(updated.len() as u64),
            rows: if returning { updated } else { Vec::new() },
        })
    }

    async fn delete(
        &self,
        table: &TableSchema,
        conditions: &[QueryCondition],
        returning: bool,
    ) -> QuickDbResult<StoreWriteResult> {
        let handle = self.table(&table.table);
        let mut guard = handle.write();

        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut guard.rows)
            .into_iter()
            .partition(|row| row_matches(row, conditions));
        guard.rows = kept;
        debug!("内存引擎删除: 表={}, 行数={}", table.table, removed.len());

        Ok(StoreWriteResult {
            affected: Some(removed.len() as u64),
            rows: if returning { removed } else { Vec::new() },
        })
    }

    async fn count(&self, table: &TableSchema, conditions: &[QueryCondition]) -> QuickDbResult<u64> {
        let handle = self.table(&table.table);
        let guard = handle.read();
        Ok(guard.rows.iter().filter(|row| row_matches(row, conditions)).count() as u64)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::table::{ColumnDefinition, ColumnType};

    fn users() -> TableSchema {
        TableSchema {
            table: "users".into(),
            columns: vec![
                ColumnDefinition::identity(),
                ColumnDefinition {
                    name: "email".into(),
                    column_type: ColumnType::Text,
                    nullable: false,
                    primary_key: false,
                    unique: true,
                    indexed: false,
                    references: None,
                },
                ColumnDefinition {
                    name: "age".into(),
                    column_type: ColumnType::Integer,
                    nullable: true,
                    primary_key: false,
                    unique: false,
                    indexed: false,
                    references: None,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_auto_increment_ids() {
        let store = MemoryStore::new();
        let result = store
            .insert(
                &users(),
                &[record! { "email" => "a@x.io" }, record! { "email" => "b@x.io" }],
                true,
            )
            .await
            .unwrap();
        assert_eq!(result.affected, Some(2));
        assert_eq!(result.rows[0].get("id"), Some(&DataValue::Int(1)));
        assert_eq!(result.rows[1].get("id"), Some(&DataValue::Int(2)));
        assert_eq!(result.rows[0].get("age"), Some(&DataValue::Null));
    }

    #[tokio::test]
    async fn test_unique_violation_leaves_table_untouched() {
        let store = MemoryStore::new();
        store.insert(&users(), &[record! { "email" => "a@x.io" }], false).await.unwrap();
        let err = store
            .insert(
                &users(),
                &[record! { "email" => "c@x.io" }, record! { "email" => "a@x.io" }],
                false,
            )
            .await;
        assert!(err.is_err());
        assert_eq!(store.row_count("users"), 1);
    }

    #[tokio::test]
    async fn test_sort_nulls_first_then_paginate() {
        let store = MemoryStore::new();
        let rows = vec![
            record! { "email" => "a", "age" => 30 },
            record! { "email" => "b" },
            record! { "email" => "c", "age" => 20 },
        ];
        store.insert(&users(), &rows, false).await.unwrap();

        let options = QueryOptions::new()
            .with_sort(vec![SortConfig { field: "age".into(), direction: SortDirection::Asc }])
            .with_pagination(PaginationConfig { skip: 1, limit: Some(1) })
            .with_fields(vec!["age".into()]);
        let found = store.select(&users(), &[], &options).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("age"), Some(&DataValue::Int(20)));
        assert!(found[0].contains_key("id"));
        assert!(!found[0].contains_key("email"));
    }
}
