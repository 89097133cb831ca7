use chrono::{Duration, NaiveDateTime, NaiveTime};
use pulse_core::common::TimeRange;
use pulse_core::finance::entity::{StockPoint, StockQuote};
use rand::Rng;

/// 已知证券的基准价格
const BASE_PRICES: [(&str, f64); 10] = [
    ("AAPL", 175.5),
    ("MSFT", 325.75),
    ("GOOGL", 140.2),
    ("AMZN", 130.8),
    ("META", 310.25),
    ("TSLA", 240.5),
    ("NVDA", 450.3),
    ("JPM", 145.6),
    ("V", 250.4),
    ("WMT", 60.9),
];

/// 日内采样点数量（6.5 小时交易时段，每 5 分钟一个点）
pub const INTRADAY_POINTS: usize = 78;
/// 日内采样间隔（分钟）
pub const INTRADAY_STEP_MINUTES: i64 = 5;
/// 开盘时间距零点的分钟数 (09:30)
const MARKET_OPEN_MINUTES: i64 = 9 * 60 + 30;
/// 随机游走的价格下限
const PRICE_FLOOR: f64 = 1.0;

/// # Summary
/// 解析证券的基准价格。
///
/// # Logic
/// 1. 在固定表中查找代码。
/// 2. 未知代码取 `100 + uniform(0, 200)`。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `symbol`: 证券代码（区分大小写）。
///
/// # Returns
/// 基准价格。
pub fn base_price<R: Rng + ?Sized>(rng: &mut R, symbol: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, price)| *price)
        .unwrap_or_else(|| 100.0 + rng.random_range(0.0..200.0))
}

/// 保留两位小数
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// # Summary
/// 有下限的价格随机游走。
///
/// # Invariants
/// - `current` 为未经舍入的累加值，舍入只发生在输出时。
/// - 每一步之后 `current >= 1`。
struct PriceWalk {
    // 未舍入的当前价格
    current: f64,
    // 单步最大波动 = max_step * base / 100
    step_scale: f64,
    max_step: f64,
}

impl PriceWalk {
    fn new(base: f64, max_step: f64) -> Self {
        Self {
            current: base,
            step_scale: base / 100.0,
            max_step,
        }
    }

    /// # Summary
    /// 前进一步并返回舍入后的价格。
    ///
    /// # Logic
    /// 1. 累加 `uniform(-max_step, max_step) * base / 100`。
    /// 2. 若跌破下限，重置为 `1 + uniform(0, 5)`。
    /// 3. 输出两位小数的价格，累加器保持未舍入值。
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.current += rng.random_range(-self.max_step..self.max_step) * self.step_scale;
        if self.current < PRICE_FLOOR {
            self.current = PRICE_FLOOR + rng.random_range(0.0..5.0);
        }
        round_cents(self.current)
    }
}

/// # Summary
/// 生成证券价格序列。
///
/// # Logic
/// 1. 解析基准价格。
/// 2. `OneDay`：从 `now` 当日 09:30 起每 5 分钟一个点，共 78 个点，单步波动 ±1%。
/// 3. 其余区间：从 N 天前到今天（含），每天一个点，共 N+1 个点，单步波动 ±3%。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `symbol`: 证券代码。
/// * `range`: 时间跨度。
/// * `now`: 本地挂钟参考时间。
///
/// # Returns
/// 按时间升序排列的采样点。
pub fn generate_stock_series<R: Rng + ?Sized>(
    rng: &mut R,
    symbol: &str,
    range: TimeRange,
    now: NaiveDateTime,
) -> Vec<StockPoint> {
    let base = base_price(rng, symbol);

    let Some(days) = range.lookback_days() else {
        return generate_intraday(rng, base, now);
    };

    let today = now.date();
    let mut walk = PriceWalk::new(base, 3.0);
    (0..=days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let price = walk.step(rng);
            StockPoint {
                time: date.and_time(NaiveTime::MIN),
                price,
                volume: rng.random_range(1_000_000..11_000_000),
            }
        })
        .collect()
}

fn generate_intraday<R: Rng + ?Sized>(
    rng: &mut R,
    base: f64,
    now: NaiveDateTime,
) -> Vec<StockPoint> {
    let open = now.date().and_time(NaiveTime::MIN) + Duration::minutes(MARKET_OPEN_MINUTES);
    let mut walk = PriceWalk::new(base, 1.0);
    let mut time = open;
    let mut points = Vec::with_capacity(INTRADAY_POINTS);

    for _ in 0..INTRADAY_POINTS {
        let price = walk.step(rng);
        points.push(StockPoint {
            time,
            price,
            volume: rng.random_range(10_000..110_000),
        });
        time += Duration::minutes(INTRADAY_STEP_MINUTES);
    }

    points
}

/// # Summary
/// 生成证券报价快照。
///
/// # Logic
/// 1. `change = uniform(-5, 5) * base / 100`，`previous_close = base - change`。
/// 2. 开盘价围绕昨收 ±2 波动，最高/最低价围绕基准价 0~5 波动，不做排序约束。
/// 3. 52 周高低点固定为基准价的 1.3 / 0.7 倍。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `symbol`: 证券代码。
///
/// # Returns
/// 报价快照，`price` 等于基准价。
pub fn generate_stock_quote<R: Rng + ?Sized>(rng: &mut R, symbol: &str) -> StockQuote {
    let base = base_price(rng, symbol);
    let change = rng.random_range(-5.0..5.0) * (base / 100.0);
    let previous_close = base - change;

    StockQuote {
        price: base,
        change,
        change_percent: change / previous_close * 100.0,
        open: previous_close + rng.random_range(-2.0..2.0),
        high: base + rng.random_range(0.0..5.0),
        low: base - rng.random_range(0.0..5.0),
        volume: rng.random_range(1_000_000..11_000_000),
        market_cap: base * f64::from(rng.random_range(10_000_000u32..1_010_000_000)),
        pe_ratio: rng.random_range(10..40),
        dividend: rng.random_range(0.0..2.0),
        dividend_yield: rng.random_range(0.0..4.0),
        previous_close,
        fifty_two_week_high: base * 1.3,
        fifty_two_week_low: base * 0.7,
    }
}
