use chrono::{Duration, NaiveDate};
use pulse_core::overview::entity::{KpiPoint, OverviewSnapshot};
use rand::Rng;

/// KPI 序列回溯天数，序列长度为该值加一
pub const SERIES_DAYS: i64 = 30;

/// # Summary
/// 生成有界均匀随机 KPI 序列。
///
/// # Logic
/// 1. 从 `days` 天前到 `today`（含）每天一个点。
/// 2. 每个点的值在 `[min, max]` 闭区间内独立均匀抽取。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `days`: 回溯天数。
/// * `min`: 下界（含）。
/// * `max`: 上界（含），小于 `min` 时按 `min` 处理。
/// * `today`: 序列最后一天。
///
/// # Returns
/// 按日期升序排列的 `days + 1` 个点。
pub fn generate_time_series<R: Rng + ?Sized>(
    rng: &mut R,
    days: i64,
    min: u32,
    max: u32,
    today: NaiveDate,
) -> Vec<KpiPoint> {
    let max = max.max(min);
    (0..=days)
        .rev()
        .map(|offset| KpiPoint {
            date: today - Duration::days(offset),
            value: rng.random_range(min..=max),
        })
        .collect()
}

/// # Summary
/// 生成业务总览快照。
///
/// # Logic
/// 1. 头部指标为固定展示值。
/// 2. 收入、用户、订单三条序列分别在各自区间内随机生成。
pub fn generate_overview<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> OverviewSnapshot {
    OverviewSnapshot {
        revenue: "$48,352.91".to_string(),
        revenue_change: 12.5,
        users: "2,420".to_string(),
        users_change: 8.2,
        orders: "1,210".to_string(),
        orders_change: -3.1,
        conversion_rate: "3.8%".to_string(),
        conversion_rate_change: 2.4,
        revenue_series: generate_time_series(rng, SERIES_DAYS, 30_000, 50_000, today),
        users_series: generate_time_series(rng, SERIES_DAYS, 1_800, 2_500, today),
        orders_series: generate_time_series(rng, SERIES_DAYS, 900, 1_300, today),
    }
}
