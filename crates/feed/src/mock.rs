use crate::latency::{Endpoint, SimulatedLatency};
use crate::{finance, news, overview, weather};
use async_trait::async_trait;
use pulse_core::common::TimeRange;
use pulse_core::common::time::{RealTimeProvider, TimeProvider};
use pulse_core::config::{FeedConfig, LatencyConfig};
use pulse_core::error::FetchError;
use pulse_core::finance::entity::{StockPoint, StockQuote};
use pulse_core::finance::port::FinanceProvider;
use pulse_core::news::entity::NewsPage;
use pulse_core::news::port::NewsProvider;
use pulse_core::overview::entity::OverviewSnapshot;
use pulse_core::overview::port::OverviewProvider;
use pulse_core::weather::entity::{Forecast, WeatherReading};
use pulse_core::weather::port::WeatherProvider;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// # Summary
/// 模拟数据源，实现全部数据源端口。
///
/// # Invariants
/// - 所有随机数来自同一个可注入种子的 `StdRng`，相同种子与相同调用顺序得到相同结果。
/// - 随机源的锁只在同步生成期间持有，绝不跨越 `.await`。
/// - 不缓存任何结果，每次调用都重新生成。
pub struct MockFeed {
    // 共享随机源
    rng: Mutex<StdRng>,
    // 参考时间来源
    clock: Arc<dyn TimeProvider>,
    // 模拟延迟
    latency: SimulatedLatency,
    // 模拟失败概率，已规整到 [0, 1]
    failure_rate: f64,
}

impl MockFeed {
    /// # Summary
    /// 根据配置创建模拟数据源。
    ///
    /// # Logic
    /// 1. 配置了种子则使用确定性随机源，否则从操作系统取种。
    /// 2. 将失败概率规整到 `[0, 1]`，非法值视为 0。
    ///
    /// # Arguments
    /// * `config`: 数据源配置。
    /// * `clock`: 时间供给器。
    ///
    /// # Returns
    /// 初始化后的 MockFeed。
    pub fn new(config: &FeedConfig, clock: Arc<dyn TimeProvider>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let failure_rate = if config.failure_rate.is_nan() {
            0.0
        } else {
            config.failure_rate.clamp(0.0, 1.0)
        };

        Self {
            rng: Mutex::new(rng),
            clock,
            latency: SimulatedLatency::new(config.latency.clone()),
            failure_rate,
        }
    }

    /// # Summary
    /// 创建零延迟、不失败、使用真实时钟的确定性数据源。
    ///
    /// # Arguments
    /// * `seed`: 随机种子。
    pub fn with_seed(seed: u64) -> Self {
        let config = FeedConfig {
            seed: Some(seed),
            failure_rate: 0.0,
            latency: LatencyConfig::zero(),
        };
        Self::new(&config, Arc::new(RealTimeProvider))
    }

    /// # Summary
    /// 在随机源上执行一次生成。
    ///
    /// # Logic
    /// 1. 获取随机源锁（锁中毒时直接取回内部值）。
    /// 2. 按失败概率掷骰，命中则返回 `FetchError::Unavailable`。
    /// 3. 否则执行生成闭包。
    fn generate<T>(
        &self,
        endpoint: Endpoint,
        f: impl FnOnce(&mut StdRng) -> T,
    ) -> Result<T, FetchError> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        if self.failure_rate > 0.0 && rng.random_bool(self.failure_rate) {
            warn!(%endpoint, "Simulated fetch failure");
            return Err(FetchError::Unavailable(format!(
                "simulated {} failure",
                endpoint
            )));
        }
        Ok(f(&mut rng))
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new(&FeedConfig::default(), Arc::new(RealTimeProvider))
    }
}

/// 校验非空参数并返回去除首尾空白后的值
fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, FetchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidRequest(format!("{} must not be empty", field)));
    }
    Ok(trimmed)
}

#[async_trait]
impl FinanceProvider for MockFeed {
    /// # Summary
    /// 模拟获取价格序列。
    ///
    /// # Logic
    /// 1. 校验证券代码非空。
    /// 2. 等待模拟延迟。
    /// 3. 以时钟的本地挂钟时间为参考生成序列。
    async fn fetch_stock_data(
        &self,
        symbol: &str,
        range: TimeRange,
    ) -> Result<Vec<StockPoint>, FetchError> {
        let symbol = require_non_empty("symbol", symbol)?;
        self.latency.wait(Endpoint::StockData).await;

        let now = self.clock.local_now();
        let series = self.generate(Endpoint::StockData, |rng| {
            finance::generate_stock_series(rng, symbol, range, now)
        })?;
        debug!(symbol, %range, points = series.len(), "Generated stock series");
        Ok(series)
    }

    async fn fetch_stock_quote(&self, symbol: &str) -> Result<StockQuote, FetchError> {
        let symbol = require_non_empty("symbol", symbol)?;
        self.latency.wait(Endpoint::StockQuote).await;

        let quote = self.generate(Endpoint::StockQuote, |rng| {
            finance::generate_stock_quote(rng, symbol)
        })?;
        debug!(symbol, price = quote.price, "Generated stock quote");
        Ok(quote)
    }
}

#[async_trait]
impl NewsProvider for MockFeed {
    /// # Summary
    /// 模拟获取一页新闻。
    ///
    /// # Logic
    /// 1. 页码为 0 时拒绝请求。
    /// 2. 等待模拟延迟后以 UTC 当前时间为参考生成。
    async fn fetch_news(&self, category: &str, page: u32) -> Result<NewsPage, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidRequest("page starts at 1".to_string()));
        }
        self.latency.wait(Endpoint::News).await;

        let now = self.clock.now();
        let result = self.generate(Endpoint::News, |rng| {
            news::generate_news_page(rng, category, page, now)
        })?;
        debug!(category, page, articles = result.articles.len(), "Generated news page");
        Ok(result)
    }
}

#[async_trait]
impl WeatherProvider for MockFeed {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherReading, FetchError> {
        let location = require_non_empty("location", location)?;
        self.latency.wait(Endpoint::Weather).await;

        let reading = self.generate(Endpoint::Weather, |rng| {
            weather::generate_current(rng, location)
        })?;
        debug!(location, code = reading.weather_code, "Generated weather reading");
        Ok(reading)
    }

    async fn fetch_forecast(&self, location: &str) -> Result<Forecast, FetchError> {
        let location = require_non_empty("location", location)?;
        self.latency.wait(Endpoint::Forecast).await;

        let now = self.clock.local_now();
        let forecast = self.generate(Endpoint::Forecast, |rng| {
            weather::generate_forecast(rng, now)
        })?;
        debug!(location, "Generated forecast");
        Ok(forecast)
    }
}

#[async_trait]
impl OverviewProvider for MockFeed {
    async fn fetch_overview(&self) -> Result<OverviewSnapshot, FetchError> {
        self.latency.wait(Endpoint::Overview).await;

        let today = self.clock.local_now().date();
        let snapshot = self.generate(Endpoint::Overview, |rng| {
            overview::generate_overview(rng, today)
        })?;
        debug!("Generated overview snapshot");
        Ok(snapshot)
    }
}
