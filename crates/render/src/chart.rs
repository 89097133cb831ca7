use crate::count_f64;
use pulse_core::render::entity::{Color, Theme};
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;
use tracing::debug;

/// 图表形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
}

/// 图表配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub background: Color,
    pub grid: Color,
    pub series: Color,
}

impl ChartPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::rgb(0xFF, 0xFF, 0xFF),
                grid: Color::rgb(0xE5, 0xE7, 0xEB),
                series: Color::rgb(0x25, 0x63, 0xEB),
            },
            Theme::Dark => Self {
                background: Color::rgb(0x0F, 0x17, 0x2A),
                grid: Color::rgb(0x33, 0x41, 0x55),
                series: Color::rgb(0x60, 0xA5, 0xFA),
            },
        }
    }
}

pub const PADDING: f64 = 20.0;
pub const GRID_LINES: u32 = 4;
const AREA_ALPHA: u8 = 0x33;
const BAR_FILL_RATIO: f64 = 0.7;

/// 数据区域与纵轴范围
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    low: f64,
    high: f64,
}

impl Plot {
    fn y(&self, value: f64) -> f64 {
        self.top + self.height * (1.0 - (value - self.low) / (self.high - self.low))
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// # Summary
/// 计算纵轴范围。
///
/// # Logic
/// 1. 取序列最小值与最大值；柱状图的范围始终包含 0。
/// 2. 范围退化为单点时上下各扩展一个单位，保证缩放可除。
fn value_range(values: &[f64], kind: ChartKind) -> (f64, f64) {
    let mut low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if kind == ChartKind::Bar {
        low = low.min(0.0);
        high = high.max(0.0);
    }
    if high - low <= f64::EPSILON {
        (low - 1.0, high + 1.0)
    } else {
        (low, high)
    }
}

/// # Summary
/// 将数值序列绘制为折线、面积或柱状图。
///
/// # Logic
/// 1. 校验表面尺寸与序列（非空且全为有限值）。
/// 2. 清空表面，铺背景色，绘制等距水平网格线。
/// 3. 按纵轴范围把序列缩放进留白后的数据区域，按 `kind` 绘制。
///
/// # Arguments
/// * `surface`: 绘制目标。
/// * `values`: 按时间顺序排列的数值。
/// * `kind`: 图表形态。
/// * `theme`: 配色主题。
///
/// # Returns
/// 空序列返回 `RenderError::EmptySeries`；包含非有限值返回 `RenderError::InvalidGeometry`。
pub fn draw_chart<S: Surface + ?Sized>(
    surface: &mut S,
    values: &[f64],
    kind: ChartKind,
    theme: Theme,
) -> Result<(), RenderError> {
    let (width, height) = surface.size();
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(RenderError::InvalidSize { width, height });
    }
    if values.is_empty() {
        return Err(RenderError::EmptySeries);
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(RenderError::InvalidGeometry(format!("non-finite value {}", bad)));
    }

    let padding = PADDING.min(width.min(height) / 4.0);
    let (low, high) = value_range(values, kind);
    let plot = Plot {
        left: padding,
        top: padding,
        width: width - 2.0 * padding,
        height: height - 2.0 * padding,
        low,
        high,
    };
    let palette = ChartPalette::for_theme(theme);

    surface.clear()?;
    surface.set_fill_color(palette.background);
    surface.fill_rect(0.0, 0.0, width, height)?;
    draw_grid(surface, &plot, palette.grid)?;

    match kind {
        ChartKind::Line => draw_line(surface, &plot, values, palette.series)?,
        ChartKind::Area => draw_area(surface, &plot, values, palette.series)?,
        ChartKind::Bar => draw_bars(surface, &plot, values, palette.series)?,
    }

    debug!("Rendered {:?} chart with {} points", kind, values.len());
    Ok(())
}

fn draw_grid<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &Plot,
    color: Color,
) -> Result<(), RenderError> {
    surface.set_stroke_color(color);
    surface.set_line_width(1.0);
    for i in 0..=GRID_LINES {
        let y = plot.top + plot.height * f64::from(i) / f64::from(GRID_LINES);
        surface.begin_path();
        surface.move_to(plot.left, y);
        surface.line_to(plot.left + plot.width, y);
        surface.stroke()?;
    }
    Ok(())
}

/// 第 `index` 个数据点的横坐标；单点序列居中
fn x_at(plot: &Plot, index: usize, len: usize) -> f64 {
    if len <= 1 {
        plot.left + plot.width / 2.0
    } else {
        plot.left + plot.width * count_f64(index) / count_f64(len - 1)
    }
}

fn trace_series<S: Surface + ?Sized>(surface: &mut S, plot: &Plot, values: &[f64]) {
    for (i, value) in values.iter().enumerate() {
        let (x, y) = (x_at(plot, i, values.len()), plot.y(*value));
        if i == 0 {
            surface.move_to(x, y);
        } else {
            surface.line_to(x, y);
        }
    }
}

fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &Plot,
    values: &[f64],
    color: Color,
) -> Result<(), RenderError> {
    surface.set_stroke_color(color);
    surface.set_line_width(2.0);
    surface.begin_path();
    trace_series(surface, plot, values);
    surface.stroke()
}

fn draw_area<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &Plot,
    values: &[f64],
    color: Color,
) -> Result<(), RenderError> {
    let first_x = x_at(plot, 0, values.len());
    let last_x = x_at(plot, values.len() - 1, values.len());

    surface.set_fill_color(color.with_alpha(AREA_ALPHA));
    surface.begin_path();
    trace_series(surface, plot, values);
    surface.line_to(last_x, plot.bottom());
    surface.line_to(first_x, plot.bottom());
    surface.close_path();
    surface.fill()?;

    draw_line(surface, plot, values, color)
}

fn draw_bars<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &Plot,
    values: &[f64],
    color: Color,
) -> Result<(), RenderError> {
    let slot = plot.width / count_f64(values.len());
    let bar_width = slot * BAR_FILL_RATIO;
    let zero = plot.y(0.0);

    surface.set_fill_color(color);
    for (i, value) in values.iter().enumerate() {
        let x = plot.left + slot * count_f64(i) + (slot - bar_width) / 2.0;
        let y = plot.y(*value);
        surface.fill_rect(x, y.min(zero), bar_width, (zero - y).abs())?;
    }
    Ok(())
}
