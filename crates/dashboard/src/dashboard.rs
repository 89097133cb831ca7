use crate::finance::FinanceSection;
use crate::news::NewsSection;
use crate::overview::OverviewSection;
use crate::weather::WeatherSection;
use pulse_core::config::DashboardConfig;
use pulse_core::finance::port::FinanceProvider;
use pulse_core::news::port::NewsProvider;
use pulse_core::overview::port::OverviewProvider;
use pulse_core::render::entity::Theme;
use pulse_core::weather::port::WeatherProvider;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// # Summary
/// 仪表盘门面：持有四个板块，负责按配置初始化并并发加载。
///
/// # Invariants
/// - 各板块互相独立，任一板块失败不影响其他板块。
/// - 同一板块内的请求由 `&mut self` 串行化，不存在过期响应覆盖新状态的问题。
pub struct Dashboard {
    pub overview: OverviewSection,
    pub weather: WeatherSection,
    pub news: NewsSection,
    pub finance: FinanceSection,
    theme: Theme,
}

impl Dashboard {
    /// # Summary
    /// 注入各数据源并应用初始配置。
    ///
    /// # Logic
    /// 1. 以默认状态构造四个板块。
    /// 2. 依次应用配置中的代码、范围、分类与地点；空值保持默认，非法范围与分类按各板块规则回退。
    pub fn new(
        finance: Arc<dyn FinanceProvider>,
        news: Arc<dyn NewsProvider>,
        weather: Arc<dyn WeatherProvider>,
        overview: Arc<dyn OverviewProvider>,
        config: &DashboardConfig,
    ) -> Self {
        let mut finance = FinanceSection::new(finance);
        finance.search(&config.symbol);
        finance.select_range_str(&config.range);

        let mut news = NewsSection::new(news);
        news.set_category_str(&config.category);

        let mut weather = WeatherSection::new(weather);
        weather.search(&config.location);

        Self {
            overview: OverviewSection::new(overview),
            weather,
            news,
            finance,
            theme: config.theme,
        }
    }

    /// # Summary
    /// 以同一个数据源对象提供全部端口。
    pub fn from_source<P>(source: Arc<P>, config: &DashboardConfig) -> Self
    where
        P: FinanceProvider + NewsProvider + WeatherProvider + OverviewProvider + 'static,
    {
        Self::new(
            source.clone(),
            source.clone(),
            source.clone(),
            source,
            config,
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// # Summary
    /// 并发刷新全部板块。
    ///
    /// # Logic
    /// 四个板块的 `refresh` 分别借用互不相交的字段，在同一任务内并发推进。
    pub async fn load_all(&mut self) {
        info!("Loading all dashboard sections");
        let Self {
            overview,
            weather,
            news,
            finance,
            ..
        } = self;
        tokio::join!(
            overview.refresh(),
            weather.refresh(),
            news.refresh(),
            finance.refresh()
        );
        info!("Dashboard loaded");
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.overview)?;
        writeln!(f, "{}", self.weather)?;
        writeln!(f, "{}", self.news)?;
        write!(f, "{}", self.finance)
    }
}
