use pulse_core::config::LatencyConfig;
use std::time::Duration;

/// # Summary
/// 模拟数据源的接口种类，用于选择对应的延迟。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    StockData,
    StockQuote,
    News,
    Weather,
    Forecast,
    Overview,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Endpoint::StockData => "stock data",
            Endpoint::StockQuote => "stock quote",
            Endpoint::News => "news",
            Endpoint::Weather => "weather",
            Endpoint::Forecast => "forecast",
            Endpoint::Overview => "overview",
        };
        f.write_str(name)
    }
}

/// # Summary
/// 模拟网络延迟。
///
/// # Invariants
/// - 延迟只通过 `tokio::time::sleep` 实现，不阻塞运行时线程。
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    config: LatencyConfig,
}

impl SimulatedLatency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    /// 指定接口的延迟时长
    pub fn delay(&self, endpoint: Endpoint) -> Duration {
        let ms = match endpoint {
            Endpoint::StockData => self.config.stock_ms,
            Endpoint::StockQuote => self.config.quote_ms,
            Endpoint::News => self.config.news_ms,
            Endpoint::Weather => self.config.weather_ms,
            Endpoint::Forecast => self.config.forecast_ms,
            Endpoint::Overview => self.config.overview_ms,
        };
        Duration::from_millis(ms)
    }

    /// # Summary
    /// 异步等待指定接口的模拟延迟。
    ///
    /// # Logic
    /// 1. 零延迟直接返回，不让出调度。
    /// 2. 否则挂起相应时长。
    pub async fn wait(&self, endpoint: Endpoint) {
        let delay = self.delay(endpoint);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}
