use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use pulse_core::weather::entity::{Forecast, ForecastItem, WeatherReading};
use rand::Rng;

/// 天气状况表 (代码, 描述)，代码与描述必须成对抽取
pub const CONDITIONS: [(u16, &str); 7] = [
    (800, "Clear Sky"),
    (801, "Few Clouds"),
    (802, "Scattered Clouds"),
    (500, "Light Rain"),
    (501, "Moderate Rain"),
    (300, "Drizzle"),
    (200, "Thunderstorm"),
];

/// 日预报天数
pub const DAILY_ITEMS: usize = 7;
/// 逐时预报条目数（覆盖 24 小时）
pub const HOURLY_ITEMS: usize = 8;
/// 逐时预报步长（小时）
pub const HOURLY_STEP_HOURS: i64 = 3;

/// 成对抽取一条天气状况
fn pick_condition<R: Rng + ?Sized>(rng: &mut R) -> (u16, &'static str) {
    CONDITIONS[rng.random_range(0..CONDITIONS.len())]
}

/// 地点的展示名称
fn display_location(location: &str) -> String {
    if location == "New York" {
        "New York, US".to_string()
    } else {
        location.to_string()
    }
}

/// # Summary
/// 生成当前天气读数。
///
/// # Logic
/// 1. 各数值字段在固定区间内独立均匀抽取（温度 10–25°C，湿度 50–80%，风速 5–25 km/h，UV 1–8）。
/// 2. 天气代码与描述按同一下标成对抽取。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `location`: 地点名称。
///
/// # Returns
/// 当前天气读数。
pub fn generate_current<R: Rng + ?Sized>(rng: &mut R, location: &str) -> WeatherReading {
    let temperature = rng.random_range(10..25);
    let feels_like = rng.random_range(8..23);
    let humidity = rng.random_range(50..80);
    let wind_speed = rng.random_range(5..25);
    let (weather_code, description) = pick_condition(rng);

    WeatherReading {
        location: display_location(location),
        temperature,
        feels_like,
        humidity,
        wind_speed,
        weather_code,
        description: description.to_string(),
        uv_index: rng.random_range(1..=8),
    }
}

fn forecast_item<R: Rng + ?Sized>(
    rng: &mut R,
    at: NaiveDateTime,
    with_time: bool,
) -> ForecastItem {
    let (weather_code, description) = pick_condition(rng);
    ForecastItem {
        date: at.date(),
        time: with_time.then(|| at.time()),
        temperature: rng.random_range(10..25),
        weather_code,
        description: description.to_string(),
        precipitation: rng.random_range(10..80),
        wind_speed: rng.random_range(5..25),
    }
}

/// # Summary
/// 计算不晚于 `now` 的最近一个 3 小时整点。
///
/// # Logic
/// 1. 小时数向下取整到 3 的倍数。
/// 2. 分、秒与纳秒清零。
pub fn hourly_anchor(now: NaiveDateTime) -> NaiveDateTime {
    let hour = now.hour() - now.hour() % 3;
    now.date().and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour))
}

/// # Summary
/// 生成 7 日预报与逐 3 小时预报。
///
/// # Logic
/// 1. 日预报：今天起连续 7 天，不带时间。
/// 2. 逐时预报：从最近的 3 小时整点开始，每 3 小时一条，共 8 条。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `now`: 本地挂钟参考时间。
///
/// # Returns
/// 预报结果。
pub fn generate_forecast<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> Forecast {
    let today = now.date().and_time(NaiveTime::MIN);
    let mut daily = Vec::with_capacity(DAILY_ITEMS);
    for day in 0..DAILY_ITEMS {
        let at = today + Duration::days(i64::try_from(day).unwrap_or_default());
        daily.push(forecast_item(rng, at, false));
    }

    let anchor = hourly_anchor(now);
    let mut hourly = Vec::with_capacity(HOURLY_ITEMS);
    let mut at = anchor;
    for _ in 0..HOURLY_ITEMS {
        hourly.push(forecast_item(rng, at, true));
        at += Duration::hours(HOURLY_STEP_HOURS);
    }

    Forecast { daily, hourly }
}
