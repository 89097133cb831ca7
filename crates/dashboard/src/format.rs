//! en-US 风格的数值与日期格式化。

use chrono::{NaiveDate, NaiveTime};

/// 保留两位小数，`-0.00` 归一为 `0.00`
fn fixed2(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" { "0.00".to_string() } else { s }
}

/// 为纯数字串插入千分位逗号
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 整数千分位，如 `1,234,567`
pub fn thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// # Summary
/// 美元金额，如 `$1,234.56`、`-$5.00`。
///
/// # Logic
/// 1. 先按绝对值保留两位小数，再给整数部分加千分位。
/// 2. 只有舍入后仍非零的负数才带负号。
/// 3. 非有限值输出 `N/A`。
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let body = format!("{:.2}", value.abs());
    let (int, frac) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let sign = if value < 0.0 && body != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_digits(int), frac)
}

/// 百分数，两位小数，如 `1.23%`
pub fn percent(value: f64) -> String {
    format!("{}%", fixed2(value))
}

/// 大数缩写：十亿记 `B`，百万记 `M`
pub fn compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1.0e9 {
        format!("{}B", fixed2(value / 1.0e9))
    } else if magnitude >= 1.0e6 {
        format!("{}M", fixed2(value / 1.0e6))
    } else {
        fixed2(value)
    }
}

/// 带符号的涨跌额与涨跌幅，如 `+1.23 (0.70%)`
pub fn signed_change(change: f64, change_percent: f64) -> String {
    let amount = fixed2(change);
    let sign = if amount.starts_with('-') { "" } else { "+" };
    format!("{}{} ({})", sign, amount, percent(change_percent))
}

/// KPI 变化率，正数带 `+`，如 `+12.5%`、`-3.1%`、`0%`
pub fn metric_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

/// 摄氏温度
pub fn celsius(value: i32) -> String {
    format!("{}°C", value)
}

/// 完整日期，如 `Oct 16, 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// 不带年份的短日期，如 `Oct 16`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// 逐日预报日期，如 `Fri, Oct 16`
pub fn forecast_day(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// 十二小时制时刻，如 `3:00 PM`
pub fn clock_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
