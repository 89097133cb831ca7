use crate::render::entity::Theme;
use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub dashboard: DashboardConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// # Summary
/// 模拟数据源配置。
///
/// # Invariants
/// - `failure_rate` 取值范围 `[0, 1]`，超出部分按边界处理。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    // 随机种子，None 表示每次启动从操作系统取种
    pub seed: Option<u64>,
    // 模拟失败概率
    pub failure_rate: f64,
    pub latency: LatencyConfig,
}

/// 各接口的模拟延迟（毫秒）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub stock_ms: u64,
    pub quote_ms: u64,
    pub news_ms: u64,
    pub weather_ms: u64,
    pub forecast_ms: u64,
    pub overview_ms: u64,
}

impl LatencyConfig {
    /// 全部接口零延迟，用于测试
    pub fn zero() -> Self {
        Self {
            stock_ms: 0,
            quote_ms: 0,
            news_ms: 0,
            weather_ms: 0,
            forecast_ms: 0,
            overview_ms: 0,
        }
    }
}

/// 仪表盘各区块的初始选择
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub symbol: String,
    pub range: String,
    pub category: String,
    pub location: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    pub icon_size: u32,
    pub chart_width: u32,
    pub chart_height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file_prefix: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            failure_rate: 0.0,
            latency: LatencyConfig::default(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            stock_ms: 800,
            quote_ms: 600,
            news_ms: 800,
            weather_ms: 800,
            forecast_ms: 1000,
            overview_ms: 1000,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            symbol: "AAPL".to_string(),
            range: "1m".to_string(),
            category: "general".to_string(),
            location: "New York".to_string(),
            theme: Theme::Light,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "out".to_string(),
            icon_size: 200,
            chart_width: 600,
            chart_height: 300,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file_prefix: "pulse.log".to_string(),
        }
    }
}
