use crate::format;
use crate::load::LoadState;
use pulse_core::overview::entity::{KpiPoint, OverviewSnapshot};
use pulse_core::overview::port::OverviewProvider;
use pulse_core::render::entity::Theme;
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;
use pulse_render::chart::{ChartKind, draw_chart};
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub const OVERVIEW_FAILURE: &str = "Failed to load overview data. Please try again later.";

/// 头部指标卡片
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    pub value: String,
    pub change: f64,
}

/// KPI 序列选项卡
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KpiSeries {
    Revenue,
    Users,
    Orders,
}

impl KpiSeries {
    pub const ALL: [KpiSeries; 3] = [KpiSeries::Revenue, KpiSeries::Users, KpiSeries::Orders];
}

impl fmt::Display for KpiSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KpiSeries::Revenue => "Revenue",
            KpiSeries::Users => "Users",
            KpiSeries::Orders => "Orders",
        };
        f.write_str(name)
    }
}

/// 业务总览板块
pub struct OverviewSection {
    provider: Arc<dyn OverviewProvider>,
    data: LoadState<OverviewSnapshot>,
}

impl OverviewSection {
    pub fn new(provider: Arc<dyn OverviewProvider>) -> Self {
        Self {
            provider,
            data: LoadState::Idle,
        }
    }

    pub fn data(&self) -> &LoadState<OverviewSnapshot> {
        &self.data
    }

    pub async fn refresh(&mut self) {
        self.data = LoadState::Loading;
        let result = self.provider.fetch_overview().await;
        self.data = LoadState::settle(result, OVERVIEW_FAILURE);
        info!("Overview section refreshed");
    }

    /// # Summary
    /// 四张指标卡片。
    ///
    /// # Logic
    /// 数据未就绪时使用占位值：金额 `$0`，计数 `0`，比率 `0%`，变化率 0。
    pub fn metrics(&self) -> [Metric; 4] {
        let snapshot = self.data.ready();
        let pick = |title, value: Option<&String>, change: Option<f64>, fallback: &str| Metric {
            title,
            value: value.cloned().unwrap_or_else(|| fallback.to_string()),
            change: change.unwrap_or(0.0),
        };
        [
            pick(
                "Total Revenue",
                snapshot.map(|s| &s.revenue),
                snapshot.map(|s| s.revenue_change),
                "$0",
            ),
            pick(
                "Active Users",
                snapshot.map(|s| &s.users),
                snapshot.map(|s| s.users_change),
                "0",
            ),
            pick(
                "New Orders",
                snapshot.map(|s| &s.orders),
                snapshot.map(|s| s.orders_change),
                "0",
            ),
            pick(
                "Conversion Rate",
                snapshot.map(|s| &s.conversion_rate),
                snapshot.map(|s| s.conversion_rate_change),
                "0%",
            ),
        ]
    }

    /// 指定 KPI 序列，数据未就绪时为空
    pub fn series(&self, kind: KpiSeries) -> &[KpiPoint] {
        match self.data.ready() {
            Some(s) => match kind {
                KpiSeries::Revenue => &s.revenue_series,
                KpiSeries::Users => &s.users_series,
                KpiSeries::Orders => &s.orders_series,
            },
            None => &[],
        }
    }

    /// 以面积图绘制指定 KPI 序列，序列为空时返回 `RenderError::EmptySeries`
    pub fn draw_chart<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        kind: KpiSeries,
        theme: Theme,
    ) -> Result<(), RenderError> {
        let values: Vec<f64> = self
            .series(kind)
            .iter()
            .map(|p| f64::from(p.value))
            .collect();
        draw_chart(surface, &values, ChartKind::Area, theme)
    }
}

impl fmt::Display for OverviewSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Overview")?;
        match &self.data {
            LoadState::Loading => return writeln!(f, "  Loading overview..."),
            LoadState::Failed(message) => return writeln!(f, "  {}", message),
            LoadState::Idle | LoadState::Ready(_) => {}
        }

        for metric in self.metrics() {
            writeln!(
                f,
                "  {:<16} {:>12}  {} from last month",
                metric.title,
                metric.value,
                format::metric_change(metric.change)
            )?;
        }
        for kind in KpiSeries::ALL {
            let series = self.series(kind);
            if let (Some(first), Some(last)) = (series.first(), series.last()) {
                writeln!(
                    f,
                    "  {} ({} to {}): latest {}",
                    kind,
                    format::short_date(first.date),
                    format::short_date(last.date),
                    format::thousands(u64::from(last.value))
                )?;
            }
        }
        Ok(())
    }
}
