use crate::error::FetchError;
use crate::news::entity::NewsPage;
use async_trait::async_trait;

/// # Summary
/// 新闻数据提供者接口。
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// # Summary
    /// 获取某分类下指定页的新闻。
    ///
    /// # Arguments
    /// * `category`: 分类名，未知分类由实现方决定回退策略。
    /// * `page`: 页码，从 1 开始。
    ///
    /// # Returns
    /// 成功返回一页新闻；页码为 0 时返回 `FetchError::InvalidRequest`。
    async fn fetch_news(&self, category: &str, page: u32) -> Result<NewsPage, FetchError>;
}
