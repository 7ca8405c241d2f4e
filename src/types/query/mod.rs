use crate::types::data_value::DataValue;
use serde::{Deserialize, Serialize};

/// 编译后的查询条件（与存储引擎无关）
///
/// 多个条件之间按 AND 组合；空列表表示"匹配全部"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCondition {
    /// 字段名（列名）
    pub field: String,
    /// 操作符
    pub operator: QueryOperator,
    /// 值；`In`/`NotIn` 为数组，`IsNull` 为 Null
    pub value: DataValue,
}

impl QueryCondition {
    pub fn new(field: impl Into<String>, operator: QueryOperator, value: DataValue) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

/// 查询操作符
///
/// 字符串匹配（`Contains`/`StartsWith`/`EndsWith`）区分大小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOperator {
    /// 等于
    Eq,
    /// 不等于
    Ne,
    /// 大于
    Gt,
    /// 大于等于
    Gte,
    /// 小于
    Lt,
    /// 小于等于
    Lte,
    /// 在列表中
    In,
    /// 不在列表中
    NotIn,
    /// 包含（字符串）
    Contains,
    /// 开始于（字符串）
    StartsWith,
    /// 结束于（字符串）
    EndsWith,
    /// 为空
    IsNull,
}

impl QueryOperator {
    /// 是否为顺序比较操作符（需要可排序的列）
    pub fn is_ordered_comparison(&self) -> bool {
        matches!(
            self,
            QueryOperator::Gt | QueryOperator::Gte | QueryOperator::Lt | QueryOperator::Lte
        )
    }
}

/// 排序配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// 字段名
    pub field: String,
    /// 排序方向
    pub direction: SortDirection,
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// 升序
    Asc,
    /// 降序
    Desc,
}

impl SortDirection {
    /// 从 "asc"/"desc" 解析；除 "desc" 以外一律视为升序
    pub fn parse(direction: &str) -> Self {
        if direction.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// 分页配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// 跳过的记录数
    pub skip: u64,
    /// 限制返回的记录数（None 表示不限制）
    pub limit: Option<u64>,
}

/// 查询选项（交给存储层执行）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// 排序配置，第一个为主排序键
    pub sort: Vec<SortConfig>,
    /// 分页配置
    pub pagination: Option<PaginationConfig>,
    /// 选择的字段（空表示选择所有字段）
    pub fields: Vec<String>,
}

impl QueryOptions {
    /// 创建新的查询选项
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置排序
    pub fn with_sort(mut self, sort: Vec<SortConfig>) -> Self {
        self.sort = sort;
        self
    }

    /// 设置分页
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// 设置字段选择
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }
}
