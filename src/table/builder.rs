//! 列映射构建

use crate::model::field_types::{StorageDescriptor, StorageKind};
use crate::model::{Collection, ID_FIELD};
use crate::table::schema::{ColumnDefinition, ColumnType, TableSchema};
use rat_logger::debug;
use std::collections::BTreeMap;

/// 未指定长度的 varchar 默认长度
const DEFAULT_VARCHAR_LENGTH: u32 = 255;

/// 存储类别到物理列类型的映射（全函数，未知类别回退为文本列）
pub fn column_type_for(kind: &StorageKind) -> ColumnType {
    match kind {
        StorageKind::Text => ColumnType::Text,
        StorageKind::Integer => ColumnType::Integer,
        StorageKind::Boolean => ColumnType::Boolean,
        StorageKind::Date => ColumnType::Date,
        StorageKind::Timestamp => ColumnType::Timestamp,
        StorageKind::Json => ColumnType::Jsonb,
        StorageKind::Array(item) => ColumnType::Array(Box::new(column_type_for(item))),
        StorageKind::Custom(name) => match name.trim().to_ascii_lowercase().as_str() {
            "varchar" => ColumnType::Varchar(DEFAULT_VARCHAR_LENGTH),
            "uuid" => ColumnType::Uuid,
            "number" | "integer" => ColumnType::Integer,
            "text" => ColumnType::Text,
            "boolean" => ColumnType::Boolean,
            "date" => ColumnType::Date,
            "timestamp" => ColumnType::Timestamp,
            "json" | "jsonb" => ColumnType::Jsonb,
            other => {
                debug!("未知存储类别 '{}'，回退为文本列", other);
                ColumnType::Text
            }
        },
        StorageKind::Unspecified => ColumnType::Text,
    }
}

fn column_for(name: &str, storage: &StorageDescriptor, required: bool, unique: bool, indexed: bool) -> ColumnDefinition {
    ColumnDefinition {
        name: name.to_string(),
        column_type: column_type_for(&storage.kind),
        nullable: !required,
        primary_key: false,
        unique,
        indexed,
        references: storage.references().map(str::to_string),
    }
}

/// 派生集合的列映射
///
/// 首列恒为标识列 `id`，其后按字段声明顺序排列；名为 `id` 的字段被忽略
pub fn build_column_map(collection: &Collection) -> TableSchema {
    let mut columns = Vec::with_capacity(collection.fields.len() + 1);
    columns.push(ColumnDefinition::identity());

    for (name, def) in &collection.fields {
        if name == ID_FIELD {
            debug!("集合 '{}' 声明了保留字段 id，已忽略", collection.slug);
            continue;
        }
        columns.push(column_for(
            name,
            &def.field_type.storage,
            def.required,
            def.unique,
            def.indexed,
        ));
    }

    TableSchema {
        table: collection.slug.clone(),
        columns,
    }
}

/// 派生多个集合的表结构，按 slug 索引；重复 slug 以后者为准
pub fn build_schema(collections: &[Collection]) -> BTreeMap<String, TableSchema> {
    collections
        .iter()
        .map(|c| (c.slug.clone(), build_column_map(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_kinds() {
        assert_eq!(
            column_type_for(&StorageKind::Custom("varchar".into())),
            ColumnType::Varchar(255)
        );
        assert_eq!(column_type_for(&StorageKind::Custom("UUID".into())), ColumnType::Uuid);
        assert_eq!(column_type_for(&StorageKind::Custom("number".into())), ColumnType::Integer);
        assert_eq!(column_type_for(&StorageKind::Custom("json".into())), ColumnType::Jsonb);
        assert_eq!(column_type_for(&StorageKind::Custom("geometry".into())), ColumnType::Text);
        assert_eq!(column_type_for(&StorageKind::Unspecified), ColumnType::Text);
    }

    #[test]
    fn test_array_physical_type() {
        let t = column_type_for(&StorageKind::Array(Box::new(StorageKind::Integer)));
        assert_eq!(t.physical_type(), "INTEGER[]");
        assert!(!t.is_orderable());
    }
}
