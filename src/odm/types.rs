//! # ODM 操作选项与集合元数据

use crate::model::{Collection, CollectionHooks};
use crate::table::TableSchema;
use crate::types::*;

/// 集合的运行时元数据：定义、列映射与生效的钩子（集合自身 + 插件）
#[derive(Debug, Clone)]
pub struct CollectionMeta {
    pub collection: Collection,
    pub columns: TableSchema,
    pub hooks: CollectionHooks,
}

impl CollectionMeta {
    pub fn slug(&self) -> &str {
        &self.collection.slug
    }
}

/// findMany 选项
#[derive(Debug, Clone, Default)]
pub struct FindManyOptions {
    pub where_clause: Option<WhereOptions>,
    pub order_by: Option<OrderByOptions>,
    /// 为 0 时视为不限制
    pub limit: Option<u64>,
    /// 为 0 时视为不跳过
    pub offset: Option<u64>,
    pub select: Option<SelectClause>,
}

impl FindManyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, where_clause: WhereOptions) -> Self {
        self.where_clause = Some(where_clause);
        self
    }

    pub fn order_by(mut self, order_by: OrderByOptions) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn select(mut self, select: SelectClause) -> Self {
        self.select = Some(select);
        self
    }
}

/// findUnique 选项
#[derive(Debug, Clone, Default)]
pub struct FindUniqueOptions {
    pub where_clause: WhereOptions,
    pub select: Option<SelectClause>,
}

impl FindUniqueOptions {
    pub fn new(where_clause: WhereOptions) -> Self {
        Self {
            where_clause,
            select: None,
        }
    }

    pub fn select(mut self, select: SelectClause) -> Self {
        self.select = Some(select);
        self
    }
}

/// findFirst 选项
#[derive(Debug, Clone, Default)]
pub struct FindFirstOptions {
    pub where_clause: WhereOptions,
    pub order_by: Option<OrderByOptions>,
    pub select: Option<SelectClause>,
}

impl FindFirstOptions {
    pub fn new(where_clause: WhereOptions) -> Self {
        Self {
            where_clause,
            ..Default::default()
        }
    }

    pub fn order_by(mut self, order_by: OrderByOptions) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn select(mut self, select: SelectClause) -> Self {
        self.select = Some(select);
        self
    }
}

/// create 的数据：单条或多条
#[derive(Debug, Clone, PartialEq)]
pub enum CreateData {
    One(Record),
    Many(Vec<Record>),
}

impl CreateData {
    pub fn into_records(self) -> Vec<Record> {
        match self {
            CreateData::One(record) => vec![record],
            CreateData::Many(records) => records,
        }
    }
}

impl From<Record> for CreateData {
    fn from(record: Record) -> Self {
        CreateData::One(record)
    }
}

impl From<Vec<Record>> for CreateData {
    fn from(records: Vec<Record>) -> Self {
        CreateData::Many(records)
    }
}

/// create 选项
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub data: CreateData,
    /// 为真时返回插入的第一条记录
    pub returning: bool,
}

impl CreateOptions {
    pub fn new(data: impl Into<CreateData>) -> Self {
        Self {
            data: data.into(),
            returning: false,
        }
    }

    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }
}

/// createMany 选项
#[derive(Debug, Clone, Default)]
pub struct CreateManyOptions {
    pub data: Vec<Record>,
}

impl CreateManyOptions {
    pub fn new(data: Vec<Record>) -> Self {
        Self { data }
    }
}

/// update 选项
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub where_clause: WhereOptions,
    pub data: Record,
    pub returning: bool,
}

impl UpdateOptions {
    pub fn new(where_clause: WhereOptions, data: Record) -> Self {
        Self {
            where_clause,
            data,
            returning: false,
        }
    }

    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }
}

/// updateMany 选项
#[derive(Debug, Clone, Default)]
pub struct UpdateManyOptions {
    pub where_clause: WhereOptions,
    pub data: Record,
}

impl UpdateManyOptions {
    pub fn new(where_clause: WhereOptions, data: Record) -> Self {
        Self { where_clause, data }
    }
}

/// delete 选项
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    pub where_clause: WhereOptions,
    pub returning: bool,
}

impl DeleteOptions {
    pub fn new(where_clause: WhereOptions) -> Self {
        Self {
            where_clause,
            returning: false,
        }
    }

    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }
}

/// deleteMany 选项
#[derive(Debug, Clone, Default)]
pub struct DeleteManyOptions {
    pub where_clause: WhereOptions,
}

impl DeleteManyOptions {
    pub fn new(where_clause: WhereOptions) -> Self {
        Self { where_clause }
    }
}

/// count 选项，未给出 where 时统计全部
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub where_clause: Option<WhereOptions>,
}

impl CountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, where_clause: WhereOptions) -> Self {
        self.where_clause = Some(where_clause);
        self
    }
}

/// exists 选项
#[derive(Debug, Clone, Default)]
pub struct ExistsOptions {
    pub where_clause: WhereOptions,
}

impl ExistsOptions {
    pub fn new(where_clause: WhereOptions) -> Self {
        Self { where_clause }
    }
}
