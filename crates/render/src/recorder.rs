use pulse_core::render::entity::Color;
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;

/// 一条被记录的绘制指令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Ellipse { x: f64, y: f64, radius_x: f64, radius_y: f64 },
    ClosePath,
    Fill { color: Color },
    Stroke { color: Color, width: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: Color },
}

/// # Summary
/// 只记录指令、不产生像素的表面实现，用于断言绘制内容。
///
/// # Invariants
/// - `clear` 丢弃此前的全部记录，只留下一条 `DrawOp::Clear`。
pub struct RecordingSurface {
    width: f64,
    height: f64,
    fill: Color,
    stroke: Color,
    line_width: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            line_width: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// 按提交顺序列出所有填充颜色（含 `fill_rect`）
    pub fn fill_colors(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { color } | DrawOp::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// 统计满足条件的指令数
    pub fn count(&self, predicate: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(DrawOp::QuadraticCurveTo { cx, cy, x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError> {
        if radius < 0.0 {
            return Err(RenderError::InvalidGeometry(format!("negative radius {}", radius)));
        }
        self.ops.push(DrawOp::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
        Ok(())
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        _rotation: f64,
        _start: f64,
        _end: f64,
    ) -> Result<(), RenderError> {
        if radius_x < 0.0 || radius_y < 0.0 {
            return Err(RenderError::InvalidGeometry(format!(
                "negative radius {}x{}",
                radius_x, radius_y
            )));
        }
        self.ops.push(DrawOp::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
        });
        Ok(())
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn fill(&mut self) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Fill { color: self.fill });
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Stroke {
            color: self.stroke,
            width: self.line_width,
        });
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError> {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color: self.fill,
        });
        Ok(())
    }
}
