use pulse_core::render::entity::{Color, WeatherIcon};
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;
use rand::Rng;
use std::f64::consts::{PI, TAU};
use tracing::debug;

/// 图标调色板
pub mod palette {
    use pulse_core::render::entity::Color;

    pub const SUN: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const CLOUD: Color = Color::rgb(0xE0, 0xE0, 0xE0);
    pub const RAIN_CLOUD: Color = Color::rgb(0x70, 0x80, 0x90);
    pub const GREY_CLOUD: Color = Color::rgb(0xA9, 0xA9, 0xA9);
    pub const STORM_CLOUD: Color = Color::rgb(0x4A, 0x4A, 0x4A);
    pub const RAINDROP: Color = Color::rgb(0x46, 0x82, 0xB4);
    pub const DRIZZLE_DROP: Color = Color::rgb(0x87, 0xCE, 0xEB);
    pub const SNOWFLAKE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const FOG: Color = Color::rgb(0xD3, 0xD3, 0xD3);
}

/// 图标的设计基准边长，其余尺寸均按此比例缩放
pub const BASE_SIZE: f64 = 200.0;

pub const SUN_RADIUS: f64 = 40.0;
pub const SUN_RAYS: u32 = 12;
pub const RAIN_DROPS: u32 = 15;
pub const DRIZZLE_DROPS: u32 = 10;
pub const SNOW_FLAKES: u32 = 20;
pub const STORM_DROPS: u32 = 10;
pub const FOG_BANDS: u32 = 5;

const CLOUD_RADIUS: f64 = 25.0;
const FOG_AMPLITUDE: f64 = 10.0;
const FOG_FREQUENCY: f64 = 0.02;
const FOG_WAVE: f64 = 50.0;
const FOG_MAX_WAVES: u32 = 256;

/// 一次绘制的几何上下文
#[derive(Debug, Clone, Copy)]
struct Frame {
    width: f64,
    height: f64,
    // 相对基准尺寸的缩放系数
    scale: f64,
}

impl Frame {
    fn of<S: Surface + ?Sized>(surface: &S) -> Result<Self, RenderError> {
        let (width, height) = surface.size();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            scale: width.min(height) / BASE_SIZE,
        })
    }
}

/// # Summary
/// 按天气代码在表面上绘制一帧天气图标。
///
/// # Logic
/// 1. 校验表面尺寸并清空表面。
/// 2. 由 `WeatherIcon::from_code` 分类，分派到对应的绘制例程。
/// 3. 雨滴与雪花的位置取自注入的随机源，其余图元完全确定。
///
/// # Arguments
/// * `surface`: 绘制目标。
/// * `rng`: 粒子位置的随机源。
/// * `code`: 天气代码。
///
/// # Returns
/// 实际绘制的图标种类；表面尺寸非法时返回 `RenderError::InvalidSize`。
pub fn render_weather_icon<S, R>(
    surface: &mut S,
    rng: &mut R,
    code: u16,
) -> Result<WeatherIcon, RenderError>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let frame = Frame::of(surface)?;
    surface.clear()?;

    let icon = WeatherIcon::from_code(code);
    match icon {
        WeatherIcon::Thunderstorm => draw_thunderstorm(surface, rng, frame)?,
        WeatherIcon::Drizzle => draw_drizzle(surface, rng, frame)?,
        WeatherIcon::Rain => draw_rain(surface, rng, frame)?,
        WeatherIcon::Snow => draw_snow(surface, rng, frame)?,
        WeatherIcon::Fog => draw_fog(surface, frame)?,
        WeatherIcon::Clear => draw_sun(surface, frame)?,
        WeatherIcon::Clouds => draw_clouds(surface, frame)?,
    }

    debug!("Rendered weather icon {} for code {}", icon, code);
    Ok(icon)
}

fn draw_sun<S: Surface + ?Sized>(surface: &mut S, frame: Frame) -> Result<(), RenderError> {
    let cx = frame.width / 2.0;
    let cy = frame.height / 2.0;
    let radius = SUN_RADIUS * frame.scale;

    surface.begin_path();
    surface.arc(cx, cy, radius, 0.0, TAU)?;
    surface.set_fill_color(palette::SUN);
    surface.fill()?;

    surface.set_stroke_color(palette::SUN);
    surface.set_line_width(3.0 * frame.scale);
    let inner = radius + 10.0 * frame.scale;
    let outer = radius + 25.0 * frame.scale;
    for i in 0..SUN_RAYS {
        let angle = f64::from(i) * TAU / f64::from(SUN_RAYS);
        let (sin, cos) = angle.sin_cos();
        surface.begin_path();
        surface.move_to(cx + cos * inner, cy + sin * inner);
        surface.line_to(cx + cos * outer, cy + sin * outer);
        surface.stroke()?;
    }
    Ok(())
}

/// # Summary
/// 以三段圆弧加底边拼出一朵云，使用当前填充色。
///
/// # Arguments
/// * `x`, `y`: 左侧圆弧的圆心。
/// * `scale`: 云朵自身的缩放系数（已包含表面缩放）。
fn draw_cloud<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    scale: f64,
) -> Result<(), RenderError> {
    let r = CLOUD_RADIUS * scale;
    surface.begin_path();
    surface.arc(x, y, r, PI * 0.5, PI * 1.5)?;
    surface.arc(x + r, y - r, r, PI, TAU)?;
    surface.arc(x + 2.0 * r, y, r, PI * 1.5, PI * 0.5)?;
    surface.move_to(x + 2.0 * r, y + r);
    surface.line_to(x, y + r);
    surface.fill()
}

fn draw_clouds<S: Surface + ?Sized>(surface: &mut S, frame: Frame) -> Result<(), RenderError> {
    let (w, h, s) = (frame.width, frame.height, frame.scale);
    surface.set_fill_color(palette::CLOUD);
    draw_cloud(surface, w / 2.0, h / 2.0, s)?;
    draw_cloud(surface, w / 4.0, h / 3.0, 0.7 * s)?;
    draw_cloud(surface, w * 3.0 / 4.0, h / 4.0, 0.6 * s)
}

/// # Summary
/// 在表面下半部随机撒落椭圆粒子。
///
/// # Arguments
/// * `count`: 粒子数量。
/// * `radius_x`, `radius_y`: 未缩放的椭圆半径。
fn scatter_drops<S, R>(
    surface: &mut S,
    rng: &mut R,
    frame: Frame,
    color: Color,
    count: u32,
    radius_x: f64,
    radius_y: f64,
) -> Result<(), RenderError>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    surface.set_fill_color(color);
    for _ in 0..count {
        let x = rng.random::<f64>() * frame.width;
        let y = frame.height / 2.0 + rng.random::<f64>() * (frame.height / 2.0);
        surface.begin_path();
        surface.ellipse(
            x,
            y,
            radius_x * frame.scale,
            radius_y * frame.scale,
            0.0,
            0.0,
            TAU,
        )?;
        surface.fill()?;
    }
    Ok(())
}

fn draw_rain<S, R>(surface: &mut S, rng: &mut R, frame: Frame) -> Result<(), RenderError>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    surface.set_fill_color(palette::RAIN_CLOUD);
    draw_cloud(surface, frame.width / 2.0, frame.height / 3.0, frame.scale)?;
    scatter_drops(surface, rng, frame, palette::RAINDROP, RAIN_DROPS, 2.0, 7.0)
}

fn draw_drizzle<S, R>(surface: &mut S, rng: &mut R, frame: Frame) -> Result<(), RenderError>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    surface.set_fill_color(palette::GREY_CLOUD);
    draw_cloud(surface, frame.width / 2.0, frame.height / 3.0, frame.scale)?;
    scatter_drops(surface, rng, frame, palette::DRIZZLE_DROP, DRIZZLE_DROPS, 1.0, 5.0)
}

fn draw_snow<S, R>(surface: &mut S, rng: &mut R, frame: Frame) -> Result<(), RenderError>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    surface.set_fill_color(palette::GREY_CLOUD);
    draw_cloud(surface, frame.width / 2.0, frame.height / 3.0, frame.scale)?;

    surface.set_fill_color(palette::SNOWFLAKE);
    for _ in 0..SNOW_FLAKES {
        let x = rng.random::<f64>() * frame.width;
        let y = frame.height / 2.0 + rng.random::<f64>() * (frame.height / 2.0);
        surface.begin_path();
        surface.arc(x, y, 3.0 * frame.scale, 0.0, TAU)?;
        surface.fill()?;
    }
    Ok(())
}

fn draw_thunderstorm<S, R>(surface: &mut S, rng: &mut R, frame: Frame) -> Result<(), RenderError>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let (w, h, s) = (frame.width, frame.height, frame.scale);
    surface.set_fill_color(palette::STORM_CLOUD);
    draw_cloud(surface, w / 2.0, h / 3.0, s)?;

    // 闪电：六个顶点的闭合折线
    let (ox, oy) = (w / 2.0, h / 2.0);
    let bolt = [(15.0, 20.0), (-5.0, 25.0), (0.0, 50.0), (5.0, 30.0), (-10.0, 20.0)];
    surface.set_fill_color(palette::SUN);
    surface.begin_path();
    surface.move_to(ox, oy);
    for (dx, dy) in bolt {
        surface.line_to(ox + dx * s, oy + dy * s);
    }
    surface.close_path();
    surface.fill()?;

    scatter_drops(surface, rng, frame, palette::RAINDROP, STORM_DROPS, 2.0, 7.0)
}

/// # Summary
/// 绘制五条水平雾带，每条上沿为二次曲线波浪。
///
/// # Invariants
/// - 波浪段数有上限，极端宽高比下也不会无界循环。
fn draw_fog<S: Surface + ?Sized>(surface: &mut S, frame: Frame) -> Result<(), RenderError> {
    let (w, h, s) = (frame.width, frame.height, frame.scale);
    let wave = FOG_WAVE * s;
    surface.set_fill_color(palette::FOG);

    for i in 0..FOG_BANDS {
        let y = h / 4.0 + f64::from(i) * 20.0 * s;
        surface.begin_path();
        surface.move_to(0.0, y);

        let mut x = 0.0;
        for _ in 0..FOG_MAX_WAVES {
            if x >= w {
                break;
            }
            // 波形相位按基准坐标计算，缩放后形状不变
            let crest = y + (x / s * FOG_FREQUENCY).sin() * FOG_AMPLITUDE * s;
            surface.quadratic_curve_to(x + wave / 2.0, crest, x + wave, y);
            x += wave;
        }

        surface.line_to(w, y + 10.0 * s);
        surface.line_to(0.0, y + 10.0 * s);
        surface.close_path();
        surface.fill()?;
    }
    Ok(())
}
