use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// # Summary
/// 价格序列中的单个采样点。
///
/// # Invariants
/// - `price` 恒大于等于 1，且保留两位小数。
/// - 日粒度采样点的 `time` 为当日零点。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPoint {
    // 采样时间（本地挂钟时间），序列化字段名为 `date`
    #[serde(rename = "date")]
    pub time: NaiveDateTime,
    // 价格
    pub price: f64,
    // 成交量
    pub volume: u32,
}

/// # Summary
/// 单只证券的报价快照，不携带历史。
///
/// # Invariants
/// - `previous_close == price - change`。
/// - `high`/`low` 与 `price` 之间不保证有序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub price: f64,
    // 相对昨收的涨跌额
    pub change: f64,
    // 涨跌幅（百分数）
    pub change_percent: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u32,
    pub market_cap: f64,
    pub pe_ratio: u32,
    pub dividend: f64,
    #[serde(rename = "yield")]
    pub dividend_yield: f64,
    pub previous_close: f64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_stock_point_serializes_time_as_date() {
        let time = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let point = StockPoint {
            time,
            price: 187.5,
            volume: 42_000,
        };

        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["date"], "2026-10-16T09:30:00");
        assert!(value.get("time").is_none());

        let back: StockPoint = serde_json::from_value(value).unwrap();
        assert_eq!(back, point);
    }
}
