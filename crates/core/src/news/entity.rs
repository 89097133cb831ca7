use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 新闻来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
    pub url: String,
}

/// # Summary
/// 单篇新闻。
///
/// # Invariants
/// - `id` 形如 `{category}-{page}-{index}`，仅在同一页内唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    // 配图地址
    pub image: String,
    pub published_at: DateTime<Utc>,
    pub source: ArticleSource,
}

/// # Summary
/// 一页新闻结果。
///
/// # Invariants
/// - `total_results` 与 `total_pages` 为固定值，不随请求变化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub articles: Vec<Article>,
    pub total_results: u32,
    pub total_pages: u32,
}
