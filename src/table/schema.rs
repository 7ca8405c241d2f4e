//! 物理表结构定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 物理列类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// 自增整数（仅标识列）
    Serial,
    Text,
    /// 定长字符串
    Varchar(u32),
    Integer,
    Boolean,
    Date,
    Timestamp,
    Uuid,
    Jsonb,
    /// 数组，携带元素类型
    Array(Box<ColumnType>),
}

impl ColumnType {
    /// 是否支持大小比较（数值或时间类型）
    pub fn is_orderable(&self) -> bool {
        matches!(
            self,
            ColumnType::Serial | ColumnType::Integer | ColumnType::Date | ColumnType::Timestamp
        )
    }

    /// PostgreSQL 风格的物理类型名
    pub fn physical_type(&self) -> String {
        match self {
            ColumnType::Serial => "SERIAL".to_string(),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Varchar(len) => format!("VARCHAR({})", len),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Timestamp => "TIMESTAMP".to_string(),
            ColumnType::Uuid => "UUID".to_string(),
            ColumnType::Jsonb => "JSONB".to_string(),
            ColumnType::Array(item) => format!("{}[]", item.physical_type()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.physical_type())
    }
}

/// 列定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// 列名
    pub name: String,
    /// 列类型
    pub column_type: ColumnType,
    /// 是否可为空
    pub nullable: bool,
    /// 是否主键
    pub primary_key: bool,
    /// 是否唯一
    pub unique: bool,
    /// 是否建立索引
    pub indexed: bool,
    /// 外键目标集合
    pub references: Option<String>,
}

impl ColumnDefinition {
    /// 标识列：自增整数主键，非空
    pub fn identity() -> Self {
        Self {
            name: crate::model::ID_FIELD.to_string(),
            column_type: ColumnType::Serial,
            nullable: false,
            primary_key: true,
            unique: true,
            indexed: true,
            references: None,
        }
    }
}

/// 表结构（一个集合的列映射）
///
/// 列顺序是对外可见的：`id` 在首位，其余按字段声明顺序排列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// 表名（集合 slug）
    pub table: String,
    /// 列（有序）
    pub columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    pub fn get(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// 唯一约束列（含主键）
    pub fn unique_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|c| c.unique || c.primary_key)
    }
}
