//! # Pulse Render
//!
//! 绘制层：天气图标与展示型图表，全部面向 `pulse_core::render::port::Surface` 编写。
//! 提供两个表面实现：输出 SVG 文档的 `SvgSurface`，以及记录绘制指令的 `RecordingSurface`。

pub mod chart;
pub mod icon;
pub mod recorder;
pub mod svg;

pub use chart::{ChartKind, draw_chart};
pub use icon::render_weather_icon;
pub use recorder::{DrawOp, RecordingSurface};
pub use svg::SvgSurface;

/// 将数量转换为浮点数，超出 `u32` 的部分饱和处理
pub(crate) fn count_f64(n: usize) -> f64 {
    u32::try_from(n).map(f64::from).unwrap_or(f64::from(u32::MAX))
}
