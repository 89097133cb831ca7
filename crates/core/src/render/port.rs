use crate::render::entity::Color;
use crate::render::error::RenderError;

/// # Summary
/// 即时模式 2D 绘制表面接口，语义对齐 Canvas 2D 上下文的子集。
///
/// # Invariants
/// - 路径指令 (`move_to`/`line_to`/...) 只修改当前路径，不产生输出。
/// - `fill`/`stroke` 使用调用时刻的颜色与线宽提交当前路径，之后路径保持不变直到 `begin_path`。
/// - 角度单位为弧度，顺时针为正方向（屏幕坐标系 y 轴向下）。
pub trait Surface {
    /// 表面的宽高
    fn size(&self) -> (f64, f64);

    /// 清空全部已绘制内容
    fn clear(&mut self) -> Result<(), RenderError>;

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    /// 丢弃当前路径，开始新路径
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);

    /// # Summary
    /// 向当前路径追加一段顺时针圆弧。
    ///
    /// # Logic
    /// 1. 若当前路径已有落点，先连线到圆弧起点。
    /// 2. 扫过角度为 `end - start` 对 2π 取模；差值不小于 2π 时画整圆。
    ///
    /// # Returns
    /// 半径为负时返回 `RenderError::InvalidGeometry`。
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64)
        -> Result<(), RenderError>;

    /// 向当前路径追加一段顺时针椭圆弧，语义同 `arc`
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError>;

    /// 闭合当前子路径
    fn close_path(&mut self);

    /// 以填充色填充当前路径
    fn fill(&mut self) -> Result<(), RenderError>;

    /// 以描边色与线宽描边当前路径
    fn stroke(&mut self) -> Result<(), RenderError>;

    /// # Summary
    /// 直接填充一个矩形，不影响当前路径。
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError>;
}
