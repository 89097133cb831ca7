use thiserror::Error;

/// # Summary
/// 绘制域错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum RenderError {
    // 几何参数非法，如负半径
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    // 绘制表面尺寸非法
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    // 图表没有可绘制的数据
    #[error("Series is empty")]
    EmptySeries,
    // 输出格式化失败
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}
