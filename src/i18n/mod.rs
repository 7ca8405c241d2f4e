//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use rat_embed_lang::register_translations;
use std::collections::HashMap;

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        Self::insert(
            &mut translations,
            "error.construction",
            "定义构造失败: {message}",
            "Definition construction failed: {message}",
            "定義の構築に失敗しました: {message}",
        );
        Self::insert(
            &mut translations,
            "error.compile",
            "查询条件编译失败: {field} - {message}",
            "Query compilation failed: {field} - {message}",
            "クエリ条件のコンパイルに失敗しました: {field} - {message}",
        );
        Self::insert(
            &mut translations,
            "error.validation",
            "记录验证失败: {field} - {message}",
            "Record validation failed: {field} - {message}",
            "レコード検証が失敗しました: {field} - {message}",
        );
        Self::insert(
            &mut translations,
            "error.store",
            "存储操作失败: {message}",
            "Store operation failed: {message}",
            "ストア操作が失敗しました: {message}",
        );
        Self::insert(
            &mut translations,
            "error.config",
            "配置错误: {message}",
            "Configuration error: {message}",
            "設定エラー: {message}",
        );
        Self::insert(
            &mut translations,
            "error.collection_not_found",
            "集合 '{slug}' 未注册",
            "Collection '{slug}' is not registered",
            "コレクション '{slug}' は登録されていません",
        );
        Self::insert(
            &mut translations,
            "error.unsupported_database",
            "不支持的数据库类型: {db_type}",
            "Unsupported database type: {db_type}",
            "サポートされていないデータベースタイプ: {db_type}",
        );
        Self::insert(
            &mut translations,
            "error.hook",
            "钩子 {point} 执行失败: {message}",
            "Hook {point} failed: {message}",
            "フック {point} の実行に失敗しました: {message}",
        );
        Self::insert(
            &mut translations,
            "error.serialization",
            "数据序列化失败: {message}",
            "Data serialization failed: {message}",
            "データシリアライズが失敗しました: {message}",
        );

        // 注册所有翻译
        register_translations(translations);
    }

    fn insert(
        translations: &mut HashMap<String, HashMap<String, String>>,
        key: &str,
        zh: &str,
        en: &str,
        ja: &str,
    ) {
        let mut messages = HashMap::new();
        messages.insert("zh-CN".to_string(), zh.to_string());
        messages.insert("en-US".to_string(), en.to_string());
        messages.insert("ja-JP".to_string(), ja.to_string());
        translations.insert(key.to_string(), messages);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::register_all_translations();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}

/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{current_language, set_language, t, tf};
