use pulse_core::config::OutputConfig;
use pulse_core::render::error::RenderError;
use pulse_dashboard::Dashboard;
use pulse_render::SvgSurface;
use rand::Rng;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const ICON_FILE: &str = "weather-icon.svg";
pub const CHART_FILE: &str = "stock-chart.svg";

/// # Summary
/// 将天气图标与股价图写入输出目录。
///
/// # Logic
/// 1. 确保输出目录存在。
/// 2. 实时天气已就绪时绘制图标，否则跳过。
/// 3. 价格序列已就绪时绘制面积图，否则跳过。
///
/// # Returns
/// 实际写入的文件路径。
pub fn write_artifacts<R: Rng + ?Sized>(
    dashboard: &Dashboard,
    config: &OutputConfig,
    rng: &mut R,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let dir = Path::new(&config.dir);
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let size = f64::from(config.icon_size);
    let mut icon_svg = SvgSurface::new(size, size)?;
    match dashboard.weather.draw_icon(&mut icon_svg, rng)? {
        Some(icon) => {
            let path = dir.join(ICON_FILE);
            fs::write(&path, icon_svg.finish())?;
            info!(path = %path.display(), "Wrote {} weather icon", icon);
            written.push(path);
        }
        None => warn!("Weather not loaded, skipping icon"),
    }

    let mut chart_svg =
        SvgSurface::new(f64::from(config.chart_width), f64::from(config.chart_height))?;
    match dashboard.finance.draw_chart(&mut chart_svg, dashboard.theme()) {
        Ok(()) => {
            let path = dir.join(CHART_FILE);
            fs::write(&path, chart_svg.finish())?;
            info!(path = %path.display(), symbol = dashboard.finance.symbol(), "Wrote stock chart");
            written.push(path);
        }
        Err(RenderError::EmptySeries) => warn!("Stock series not loaded, skipping chart"),
        Err(e) => return Err(e.into()),
    }

    Ok(written)
}
