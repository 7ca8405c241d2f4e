//! rat_collections 基本使用示例
//!
//! 定义集合与插件，装配内存存储，执行一轮 CRUD 并打印派生的物理表结构。

use rat_collections::*;
use rat_collections::fields::{self, RelationOptions};
use rat_collections::odm::*;
use rat_logger::{LevelFilter, LoggerBuilder, handler::term};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    LoggerBuilder::new()
        .with_level(LevelFilter::Info)
        .add_terminal_with_config(term::TermConfig::default())
        .init()?;

    rat_collections::init();
    println!("=== {} 基本使用示例 ===", get_info());

    // 1. 定义集合
    let users = Collection::builder("users")
        .name("Users")
        .field("email", FieldDefinition::new(&fields::email()).required().unique())
        .field("name", FieldDefinition::new(&fields::text()).label("姓名"))
        .field("age", FieldDefinition::new(&fields::number()))
        .field(
            "role",
            FieldDefinition::new(&fields::select(vec!["admin", "editor", "viewer"])?)
                .default_value("viewer"),
        )
        .build()?;

    let posts = Collection::builder("posts")
        .field("title", FieldDefinition::new(&fields::text()).required())
        .field(
            "author",
            FieldDefinition::new(&fields::relation(RelationOptions::new("users").singular(true))),
        )
        .field("tags", FieldDefinition::new(&fields::array(ValidationRule::string())))
        .build()?;

    // 2. 插件：贡献审计集合，并为所有集合追加创建钩子
    let audit_hooks = CollectionHooks::new().on(
        HookPoint::AfterCreate,
        hook_fn(|ctx: HookContext| async move {
            println!("  [audit] {} 新增记录", ctx.collection);
            Ok(())
        }),
    );
    let audit = Plugin::builder("audit")
        .collection(
            Collection::builder("audit_logs")
                .field("action", FieldDefinition::new(&fields::text()).required())
                .build()?,
        )
        .hooks(audit_hooks)
        .build()?;

    // 3. 装配配置
    let config = ConfigOptions::builder()
        .adapter(memory_adapter())
        .collections(vec![users, posts])
        .plugin(audit)
        .define()?;
    println!("集合: {:?}", config.meta().collections);
    println!("插件: {:?}", config.meta().plugins);

    // 4. CRUD
    let users = config.collection("users")?;
    let alice = users
        .create(CreateOptions::new(record! { "email" => "alice@example.com", "name" => "Alice", "age" => 30 }).returning())
        .await?;
    println!("创建: {:?}", alice);

    let inserted = users
        .create_many(CreateManyOptions::new(vec![
            record! { "email" => "bob@example.com", "name" => "Bob", "age" => 17 },
            record! { "email" => "carol@example.com", "name" => "Carol", "age" => 42 },
        ]))
        .await?;
    println!("批量创建: {} 条", inserted);

    let adults = users
        .find_many(
            FindManyOptions::new()
                .filter(WhereOptions::new().op("age", WhereOperator::gte(18)))
                .order_by(OrderByOptions::new().desc("age")),
        )
        .await?;
    println!("成年用户: {:?}", adults);

    let updated = users
        .update(
            UpdateOptions::new(
                WhereOptions::new().eq("email", "bob@example.com"),
                record! { "age" => 18 },
            )
            .returning(),
        )
        .await?;
    println!("更新: {:?}", updated);

    // 空条件被拒绝，不会删除全表
    let refused = users.delete_many(DeleteManyOptions::new(WhereOptions::new())).await?;
    println!("空条件 deleteMany: {}", refused);

    println!("总数: {}", users.count(CountOptions::new()).await?);

    // 5. 物理表结构
    for (slug, table) in config.schema() {
        let columns: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.column_type))
            .collect();
        println!("{}: {}", slug, columns.join(", "));
    }

    // 6. 注入外部存储层
    let injected = ConfigOptions::builder()
        .store(Arc::new(MemoryStore::new()))
        .collection(Collection::builder("notes").field("body", FieldDefinition::new(&fields::text())).build()?)
        .define()?;
    println!("注入存储层后占位模式: {}", injected.is_placeholder());

    Ok(())
}
