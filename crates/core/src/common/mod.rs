use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod time;

/// # Summary
/// 行情图表的时间跨度枚举，决定生成序列的粒度与长度。
///
/// # Invariants
/// - `OneDay` 为日内 5 分钟粒度，其余均为日粒度。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    // 1 日（日内）
    OneDay,
    // 1 周
    OneWeek,
    // 1 月
    #[default]
    OneMonth,
    // 3 月
    ThreeMonths,
    // 1 年
    OneYear,
}

impl TimeRange {
    /// # Summary
    /// 日粒度区间向前回溯的天数。
    ///
    /// # Returns
    /// 日内区间返回 None，其余返回回溯天数。
    pub fn lookback_days(self) -> Option<i64> {
        match self {
            TimeRange::OneDay => None,
            TimeRange::OneWeek => Some(7),
            TimeRange::OneMonth => Some(30),
            TimeRange::ThreeMonths => Some(90),
            TimeRange::OneYear => Some(365),
        }
    }

    /// 全部可选区间，按界面 Tab 顺序排列
    pub const ALL: [TimeRange; 5] = [
        TimeRange::OneDay,
        TimeRange::OneWeek,
        TimeRange::OneMonth,
        TimeRange::ThreeMonths,
        TimeRange::OneYear,
    ];
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" => Ok(TimeRange::OneDay),
            "1w" => Ok(TimeRange::OneWeek),
            "1m" => Ok(TimeRange::OneMonth),
            "3m" => Ok(TimeRange::ThreeMonths),
            "1y" => Ok(TimeRange::OneYear),
            _ => Err(format!("Unknown TimeRange: {}", s)),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::OneDay => write!(f, "1d"),
            TimeRange::OneWeek => write!(f, "1w"),
            TimeRange::OneMonth => write!(f, "1m"),
            TimeRange::ThreeMonths => write!(f, "3m"),
            TimeRange::OneYear => write!(f, "1y"),
        }
    }
}

/// # Summary
/// 新闻分类。
///
/// # Invariants
/// - 未知分类名一律回退到 `General`（见 `resolve`）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum NewsCategory {
    #[default]
    General,
    Technology,
    Business,
    Sports,
    Health,
    Entertainment,
    Science,
}

impl NewsCategory {
    /// 全部分类，按界面 Tab 顺序排列
    pub const ALL: [NewsCategory; 7] = [
        NewsCategory::General,
        NewsCategory::Technology,
        NewsCategory::Business,
        NewsCategory::Sports,
        NewsCategory::Health,
        NewsCategory::Entertainment,
        NewsCategory::Science,
    ];

    /// # Summary
    /// 将任意分类名解析为已知分类。
    ///
    /// # Logic
    /// 1. 尝试按名称精确解析。
    /// 2. 解析失败时回退到 `General`。
    pub fn resolve(name: &str) -> NewsCategory {
        name.parse().unwrap_or_default()
    }

    /// 分类的小写名称，与查询参数一致
    pub fn as_str(self) -> &'static str {
        match self {
            NewsCategory::General => "general",
            NewsCategory::Technology => "technology",
            NewsCategory::Business => "business",
            NewsCategory::Sports => "sports",
            NewsCategory::Health => "health",
            NewsCategory::Entertainment => "entertainment",
            NewsCategory::Science => "science",
        }
    }
}

impl FromStr for NewsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NewsCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown NewsCategory: {}", s))
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
