use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// KPI 时间序列中的单点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPoint {
    pub date: NaiveDate,
    pub value: u32,
}

/// # Summary
/// 业务总览快照：四个头部指标及三条 KPI 序列。
///
/// # Invariants
/// - 头部指标为展示用的已格式化字符串，`*_change` 为相对上月的百分比变化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    pub revenue: String,
    pub revenue_change: f64,
    pub users: String,
    pub users_change: f64,
    pub orders: String,
    pub orders_change: f64,
    pub conversion_rate: String,
    pub conversion_rate_change: f64,
    #[serde(rename = "revenueData")]
    pub revenue_series: Vec<KpiPoint>,
    #[serde(rename = "usersData")]
    pub users_series: Vec<KpiPoint>,
    #[serde(rename = "ordersData")]
    pub orders_series: Vec<KpiPoint>,
}
