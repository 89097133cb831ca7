use pulse_core::render::entity::Color;
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

/// # Summary
/// 将即时模式绘制指令转换为 SVG 文档的表面实现。
///
/// # Invariants
/// - 每次 `fill`/`stroke` 产出一个 `<path>` 元素，`fill_rect` 产出一个 `<rect>` 元素。
/// - 圆弧被拆分为不超过 π 的 SVG 弧段，整圆因此可以正确表示。
pub struct SvgSurface {
    width: f64,
    height: f64,
    fill: Color,
    stroke: Color,
    line_width: f64,
    // 当前路径的 `d` 属性
    path: String,
    // 当前落点
    current: Option<(f64, f64)>,
    // 当前子路径起点，`close_path` 后回到此处
    subpath_start: Option<(f64, f64)>,
    // 已提交的图元
    body: String,
}

impl SvgSurface {
    /// # Summary
    /// 创建指定尺寸的 SVG 表面。
    ///
    /// # Returns
    /// 宽高非正或非有限值时返回 `RenderError::InvalidSize`。
    pub fn new(width: f64, height: f64) -> Result<Self, RenderError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            line_width: 1.0,
            path: String::new(),
            current: None,
            subpath_start: None,
            body: String::new(),
        })
    }

    /// 输出完整的 SVG 文档
    pub fn finish(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = num(self.width),
            h = num(self.height),
            body = self.body
        )
    }

    fn push_command(&mut self, command: String) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push_str(&command);
    }

    /// 追加一段不超过 π 的椭圆弧，终点由调用方计算
    fn push_arc_to(&mut self, rx: f64, ry: f64, rotation: f64, to: (f64, f64)) {
        self.push_command(format!(
            "A {} {} {} 0 1 {} {}",
            num(rx),
            num(ry),
            num(rotation.to_degrees()),
            num(to.0),
            num(to.1)
        ));
        self.current = Some(to);
    }

    /// 写入画笔透明度属性，完全不透明时省略
    fn opacity_attr(attr: &str, color: Color) -> String {
        if color.a == u8::MAX {
            String::new()
        } else {
            format!(r#" {}="{}""#, attr, num(color.opacity()))
        }
    }
}

/// 数值格式化：最多两位小数，去掉多余的零
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// # Summary
/// 计算顺时针扫过角度。
///
/// # Logic
/// 1. 差值不小于 2π 时为整圆。
/// 2. 否则对 2π 取欧几里得模。
pub(crate) fn sweep_angle(start: f64, end: f64) -> f64 {
    let diff = end - start;
    if diff >= TAU { TAU } else { diff.rem_euclid(TAU) }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.body.clear();
        self.begin_path();
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.current = None;
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_command(format!("M {} {}", num(x), num(y)));
        self.current = Some((x, y));
        self.subpath_start = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(x, y);
            return;
        }
        self.push_command(format!("L {} {}", num(x), num(y)));
        self.current = Some((x, y));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(cx, cy);
        }
        self.push_command(format!("Q {} {} {} {}", num(cx), num(cy), num(x), num(y)));
        self.current = Some((x, y));
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError> {
        self.ellipse(x, y, radius, radius, 0.0, start, end)
    }

    /// # Summary
    /// 追加一段顺时针椭圆弧。
    ///
    /// # Logic
    /// 1. 计算起点；有落点时连线过去，否则以起点开启子路径。
    /// 2. 扫过角度超过 π 时拆成两段等分弧，避免 SVG 整圆退化。
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError> {
        if radius_x < 0.0 || radius_y < 0.0 {
            return Err(RenderError::InvalidGeometry(format!(
                "negative radius {}x{}",
                radius_x, radius_y
            )));
        }

        let (sin_r, cos_r) = rotation.sin_cos();
        let point_at = |theta: f64| {
            let (sin_t, cos_t) = theta.sin_cos();
            (
                x + radius_x * cos_t * cos_r - radius_y * sin_t * sin_r,
                y + radius_x * cos_t * sin_r + radius_y * sin_t * cos_r,
            )
        };

        let (sx, sy) = point_at(start);
        if self.current.is_some() {
            self.line_to(sx, sy);
        } else {
            self.move_to(sx, sy);
        }

        let sweep = sweep_angle(start, end);
        if sweep == 0.0 {
            return Ok(());
        }

        let segments: u8 = if sweep > PI { 2 } else { 1 };
        let step = sweep / f64::from(segments);
        for k in 1..=segments {
            let to = point_at(start + step * f64::from(k));
            self.push_arc_to(radius_x, radius_y, rotation, to);
        }
        Ok(())
    }

    fn close_path(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.push_command("Z".to_string());
        self.current = self.subpath_start;
    }

    fn fill(&mut self) -> Result<(), RenderError> {
        if self.path.is_empty() {
            return Ok(());
        }
        write!(
            self.body,
            r#"<path d="{}" fill="{}"{}/>"#,
            self.path,
            self.fill,
            Self::opacity_attr("fill-opacity", self.fill)
        )?;
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), RenderError> {
        if self.path.is_empty() {
            return Ok(());
        }
        write!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
            self.path,
            self.stroke,
            num(self.line_width),
            Self::opacity_attr("stroke-opacity", self.stroke)
        )?;
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError> {
        // SVG 不接受负宽高，先把矩形规整到左上角
        let left = if width < 0.0 { x + width } else { x };
        let top = if height < 0.0 { y + height } else { y };
        write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            num(left),
            num(top),
            num(width.abs()),
            num(height.abs()),
            self.fill,
            Self::opacity_attr("fill-opacity", self.fill)
        )?;
        Ok(())
    }
}
