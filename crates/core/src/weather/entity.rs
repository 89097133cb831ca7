use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// # Summary
/// 当前天气读数。
///
/// # Invariants
/// - `weather_code` 与 `description` 来自同一条天气状况记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub location: String,
    // 摄氏度
    pub temperature: i32,
    pub feels_like: i32,
    // 相对湿度（百分数）
    pub humidity: u32,
    // km/h
    pub wind_speed: u32,
    pub weather_code: u16,
    pub description: String,
    pub uv_index: u32,
}

/// # Summary
/// 预报条目，日预报不带 `time`，逐 3 小时预报带 `time`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastItem {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<NaiveTime>,
    pub temperature: i32,
    pub weather_code: u16,
    pub description: String,
    // 降水概率（百分数）
    pub precipitation: u32,
    pub wind_speed: u32,
}

/// 一次预报请求的完整结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub daily: Vec<ForecastItem>,
    pub hourly: Vec<ForecastItem>,
}
