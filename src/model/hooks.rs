//! 生命周期钩子
//!
//! 集合只保存钩子，由操作层在对应的时机按注册顺序依次调用。

use crate::error::QuickDbResult;
use crate::types::{DataValue, WhereOptions};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// 钩子时机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    BeforeCreate,
    AfterCreate,
    BeforeUpdate,
    AfterUpdate,
    BeforeDelete,
    AfterDelete,
}

impl HookPoint {
    pub const ALL: [HookPoint; 6] = [
        HookPoint::BeforeCreate,
        HookPoint::AfterCreate,
        HookPoint::BeforeUpdate,
        HookPoint::AfterUpdate,
        HookPoint::BeforeDelete,
        HookPoint::AfterDelete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookPoint::BeforeCreate => "beforeCreate",
            HookPoint::AfterCreate => "afterCreate",
            HookPoint::BeforeUpdate => "beforeUpdate",
            HookPoint::AfterUpdate => "afterUpdate",
            HookPoint::BeforeDelete => "beforeDelete",
            HookPoint::AfterDelete => "afterDelete",
        }
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 钩子上下文
#[derive(Debug, Clone)]
pub struct HookContext {
    /// 集合 slug
    pub collection: String,
    /// 触发时机
    pub point: HookPoint,
    /// 写入的数据（单条为 Object，多条为 Array）
    pub data: Option<DataValue>,
    /// 存储层返回的结果（仅 after 钩子）
    pub result: Option<DataValue>,
    /// where 选项（update/delete）
    pub where_clause: Option<WhereOptions>,
}

impl HookContext {
    pub fn new(collection: &str, point: HookPoint) -> Self {
        Self {
            collection: collection.to_string(),
            point,
            data: None,
            result: None,
            where_clause: None,
        }
    }

    pub fn with_data(mut self, data: DataValue) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_result(mut self, result: DataValue) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_where(mut self, where_clause: WhereOptions) -> Self {
        self.where_clause = Some(where_clause);
        self
    }
}

/// 钩子接口
#[async_trait]
pub trait Hook: Send + Sync {
    async fn call(&self, ctx: &HookContext) -> QuickDbResult<()>;
}

/// 闭包钩子
pub struct FnHook<F>(F);

#[async_trait]
impl<F, Fut> Hook for FnHook<F>
where
    F: Fn(HookContext) -> Fut + Send + Sync,
    Fut: Future<Output = QuickDbResult<()>> + Send,
{
    async fn call(&self, ctx: &HookContext) -> QuickDbResult<()> {
        (self.0)(ctx.clone()).await
    }
}

/// 由异步闭包创建钩子
pub fn hook_fn<F, Fut>(f: F) -> Arc<dyn Hook>
where
    F: Fn(HookContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = QuickDbResult<()>> + Send + 'static,
{
    Arc::new(FnHook(f))
}

/// 集合的钩子列表，每个时机默认为空列表
#[derive(Clone, Default)]
pub struct CollectionHooks {
    before_create: Vec<Arc<dyn Hook>>,
    after_create: Vec<Arc<dyn Hook>>,
    before_update: Vec<Arc<dyn Hook>>,
    after_update: Vec<Arc<dyn Hook>>,
    before_delete: Vec<Arc<dyn Hook>>,
    after_delete: Vec<Arc<dyn Hook>>,
}

impl CollectionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加钩子，保持注册顺序
    pub fn on(mut self, point: HookPoint, hook: Arc<dyn Hook>) -> Self {
        self.slot_mut(point).push(hook);
        self
    }

    pub fn get(&self, point: HookPoint) -> &[Arc<dyn Hook>] {
        match point {
            HookPoint::BeforeCreate => &self.before_create,
            HookPoint::AfterCreate => &self.after_create,
            HookPoint::BeforeUpdate => &self.before_update,
            HookPoint::AfterUpdate => &self.after_update,
            HookPoint::BeforeDelete => &self.before_delete,
            HookPoint::AfterDelete => &self.after_delete,
        }
    }

    fn slot_mut(&mut self, point: HookPoint) -> &mut Vec<Arc<dyn Hook>> {
        match point {
            HookPoint::BeforeCreate => &mut self.before_create,
            HookPoint::AfterCreate => &mut self.after_create,
            HookPoint::BeforeUpdate => &mut self.before_update,
            HookPoint::AfterUpdate => &mut self.after_update,
            HookPoint::BeforeDelete => &mut self.before_delete,
            HookPoint::AfterDelete => &mut self.after_delete,
        }
    }

    /// 返回在本列表之后追加 `other` 的新列表
    pub fn merged_with(&self, other: &CollectionHooks) -> CollectionHooks {
        let mut merged = self.clone();
        for point in HookPoint::ALL {
            merged.slot_mut(point).extend(other.get(point).iter().cloned());
        }
        merged
    }

    /// 钩子总数
    pub fn len(&self) -> usize {
        HookPoint::ALL.iter().map(|p| self.get(*p).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for CollectionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for point in HookPoint::ALL {
            map.entry(&point.as_str(), &self.get(point).len());
        }
        map.finish()
    }
}
