use crate::format;
use crate::load::LoadState;
use pulse_core::common::NewsCategory;
use pulse_core::news::entity::{Article, NewsPage};
use pulse_core::news::port::NewsProvider;
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub const NEWS_FAILURE: &str = "Failed to load news data. Please try again later.";

/// # Summary
/// 新闻板块：分类、页码、当前页数据与详情弹窗中的文章。
///
/// # Invariants
/// - `page >= 1`；已知总页数时 `page <= total_pages`。
/// - 切换分类总是回到第 1 页。
pub struct NewsSection {
    provider: Arc<dyn NewsProvider>,
    category: NewsCategory,
    page: u32,
    // 最近一次成功加载得到的总页数
    total_pages: Option<u32>,
    data: LoadState<NewsPage>,
    selected: Option<Article>,
}

impl NewsSection {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self {
            provider,
            category: NewsCategory::default(),
            page: 1,
            total_pages: None,
            data: LoadState::Idle,
            selected: None,
        }
    }

    pub fn category(&self) -> NewsCategory {
        self.category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn data(&self) -> &LoadState<NewsPage> {
        &self.data
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.selected.as_ref()
    }

    pub fn set_category(&mut self, category: NewsCategory) {
        self.category = category;
        self.page = 1;
        self.data = LoadState::Idle;
    }

    /// 按分类名切换，无法识别的分类退回 general
    pub fn set_category_str(&mut self, name: &str) {
        self.set_category(NewsCategory::resolve(name));
    }

    /// # Summary
    /// 翻到下一页。
    ///
    /// # Returns
    /// 总页数未知或已在最后一页时不动，返回 `false`。
    pub fn next_page(&mut self) -> bool {
        match self.total_pages {
            Some(total) if self.page < total => {
                self.page += 1;
                self.data = LoadState::Idle;
                true
            }
            _ => false,
        }
    }

    /// 翻到上一页，已在第 1 页时返回 `false`
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            self.data = LoadState::Idle;
            true
        } else {
            false
        }
    }

    /// # Summary
    /// 在当前页中选中一篇文章，打开详情。
    ///
    /// # Returns
    /// 当前页中不存在该文章时返回 `false`，选中状态不变。
    pub fn select_article(&mut self, id: &str) -> bool {
        let found = self
            .data
            .ready()
            .and_then(|page| page.articles.iter().find(|a| a.id == id))
            .cloned();
        match found {
            Some(article) => {
                self.selected = Some(article);
                true
            }
            None => false,
        }
    }

    pub fn close_article(&mut self) {
        self.selected = None;
    }

    /// 加载当前分类与页码的新闻
    pub async fn refresh(&mut self) {
        self.data = LoadState::Loading;
        let result = self
            .provider
            .fetch_news(self.category.as_str(), self.page)
            .await;
        if let Ok(page) = &result {
            self.total_pages = Some(page.total_pages);
        }
        self.data = LoadState::settle(result, NEWS_FAILURE);
        info!(category = %self.category, page = self.page, "News section refreshed");
    }
}

impl fmt::Display for NewsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Latest News")?;
        let tabs: Vec<String> = NewsCategory::ALL
            .iter()
            .map(|c| {
                if *c == self.category {
                    format!("[{}]", c)
                } else {
                    c.to_string()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" "))?;

        match &self.data {
            LoadState::Idle => {}
            LoadState::Loading => writeln!(f, "  Loading news...")?,
            LoadState::Failed(message) => writeln!(f, "  {}", message)?,
            LoadState::Ready(page) => {
                for (i, article) in page.articles.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, article.title)?;
                    writeln!(
                        f,
                        "     {} | {}",
                        article.source.name,
                        format::long_date(article.published_at.date_naive())
                    )?;
                }
                if page.total_pages > 1 {
                    writeln!(f, "  Page {} of {}", self.page, page.total_pages)?;
                }
            }
        }

        if let Some(article) = &self.selected {
            writeln!(f, "> {}", article.title)?;
            writeln!(f, "  {}", article.content)?;
            writeln!(f, "  Read more: {}", article.url)?;
        }
        Ok(())
    }
}
