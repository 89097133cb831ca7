use crate::format;
use crate::load::LoadState;
use pulse_core::common::TimeRange;
use pulse_core::finance::entity::{StockPoint, StockQuote};
use pulse_core::finance::port::FinanceProvider;
use pulse_core::render::entity::Theme;
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;
use pulse_render::chart::{ChartKind, draw_chart};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

pub const SERIES_FAILURE: &str = "Failed to load stock data. Please try again later.";
pub const QUOTE_FAILURE: &str = "Failed to load stock quote data. Please try again later.";

pub const DEFAULT_SYMBOL: &str = "AAPL";

/// # Summary
/// 股票板块：当前代码与时间范围，以及价格序列、报价两块独立的加载状态。
///
/// # Invariants
/// - `symbol` 始终为非空的大写代码。
/// - 代码或范围变化后，相关数据回到 `Idle`，直到下一次 `refresh`。
pub struct FinanceSection {
    provider: Arc<dyn FinanceProvider>,
    symbol: String,
    range: TimeRange,
    series: LoadState<Vec<StockPoint>>,
    quote: LoadState<StockQuote>,
}

impl FinanceSection {
    pub fn new(provider: Arc<dyn FinanceProvider>) -> Self {
        Self {
            provider,
            symbol: DEFAULT_SYMBOL.to_string(),
            range: TimeRange::default(),
            series: LoadState::Idle,
            quote: LoadState::Idle,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn series(&self) -> &LoadState<Vec<StockPoint>> {
        &self.series
    }

    pub fn quote(&self) -> &LoadState<StockQuote> {
        &self.quote
    }

    /// # Summary
    /// 提交搜索框输入。
    ///
    /// # Logic
    /// 1. 去掉首尾空白，空输入忽略。
    /// 2. 转为大写后作为新代码，代码变化时清空两块数据。
    ///
    /// # Returns
    /// 输入被接受时返回 `true`。
    pub fn search(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        let symbol = query.to_uppercase();
        if symbol != self.symbol {
            self.symbol = symbol;
            self.series = LoadState::Idle;
            self.quote = LoadState::Idle;
        }
        true
    }

    pub fn set_range(&mut self, range: TimeRange) {
        if range != self.range {
            self.range = range;
            self.series = LoadState::Idle;
        }
    }

    /// 按范围名切换，无法识别时退回 `1m`
    pub fn select_range_str(&mut self, value: &str) {
        let range = value.parse().unwrap_or_else(|_| {
            debug!("Unknown range {:?}, falling back to {}", value, TimeRange::OneMonth);
            TimeRange::OneMonth
        });
        self.set_range(range);
    }

    /// # Summary
    /// 并发加载价格序列与报价。
    ///
    /// # Logic
    /// 1. 两块状态同时置为 `Loading`。
    /// 2. 以当前代码和范围并发发起两个请求，各自独立落定。
    pub async fn refresh(&mut self) {
        self.series = LoadState::Loading;
        self.quote = LoadState::Loading;

        let provider = Arc::clone(&self.provider);
        let (series, quote) = tokio::join!(
            provider.fetch_stock_data(&self.symbol, self.range),
            provider.fetch_stock_quote(&self.symbol)
        );

        self.series = LoadState::settle(series, SERIES_FAILURE);
        self.quote = LoadState::settle(quote, QUOTE_FAILURE);
        info!(symbol = %self.symbol, range = %self.range, "Finance section refreshed");
    }

    /// # Summary
    /// 将已加载的价格序列绘制为面积图。
    ///
    /// # Returns
    /// 序列未就绪时与空序列同样返回 `RenderError::EmptySeries`。
    pub fn draw_chart<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        theme: Theme,
    ) -> Result<(), RenderError> {
        let prices: Vec<f64> = self
            .series
            .ready()
            .map(|points| points.iter().map(|p| p.price).collect())
            .unwrap_or_default();
        draw_chart(surface, &prices, ChartKind::Area, theme)
    }

    fn fmt_quote(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quote {
            LoadState::Idle => Ok(()),
            LoadState::Loading => writeln!(f, "  Loading quote..."),
            LoadState::Failed(message) => writeln!(f, "  {}", message),
            LoadState::Ready(q) => {
                writeln!(f, "  Current Price   ${:.2}", q.price)?;
                writeln!(
                    f,
                    "  Change          {}",
                    format::signed_change(q.change, q.change_percent)
                )?;
                writeln!(f, "  Volume          {}", format::compact(f64::from(q.volume)))?;
                writeln!(f, "  Market Cap      ${}", format::compact(q.market_cap))?;
                writeln!(f, "{} Details", self.symbol)?;
                writeln!(f, "  Open            {}", format::currency(q.open))?;
                writeln!(f, "  Previous Close  {}", format::currency(q.previous_close))?;
                writeln!(
                    f,
                    "  Day Range       {} - {}",
                    format::currency(q.low),
                    format::currency(q.high)
                )?;
                writeln!(
                    f,
                    "  52 Week Range   {} - {}",
                    format::currency(q.fifty_two_week_low),
                    format::currency(q.fifty_two_week_high)
                )?;
                writeln!(
                    f,
                    "  Volume          {}",
                    format::thousands(u64::from(q.volume))
                )?;
                writeln!(f, "  Market Cap      {}", format::currency(q.market_cap))?;
                writeln!(f, "  P/E Ratio       {:.2}", f64::from(q.pe_ratio))?;
                writeln!(f, "  Dividend Yield  {}", format::percent(q.dividend_yield))
            }
        }
    }

    fn fmt_series(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Stock Price Chart ({})", self.symbol, self.range)?;
        match &self.series {
            LoadState::Idle => Ok(()),
            LoadState::Loading => writeln!(f, "  Loading chart..."),
            LoadState::Failed(message) => writeln!(f, "  {}", message),
            LoadState::Ready(points) => {
                let (Some(first), Some(last)) = (points.first(), points.last()) else {
                    return writeln!(f, "  No data");
                };
                let low = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
                let high = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);
                // 超过 30 个点的序列跨度较长，标签带上年份
                let label = |p: &StockPoint| {
                    if points.len() > 30 {
                        format::long_date(p.time.date())
                    } else {
                        format::short_date(p.time.date())
                    }
                };
                writeln!(
                    f,
                    "  {} points, {} to {}",
                    points.len(),
                    label(first),
                    label(last)
                )?;
                writeln!(
                    f,
                    "  First ${:.2}  Last ${:.2}  Low ${:.2}  High ${:.2}",
                    first.price, last.price, low, high
                )
            }
        }
    }
}

impl fmt::Display for FinanceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Financial Dashboard")?;
        writeln!(f, "Stock Market Data: {}", self.symbol)?;
        self.fmt_quote(f)?;
        self.fmt_series(f)
    }
}
