use thiserror::Error;

/// # Summary
/// 数据获取错误枚举，所有数据源端口共用。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    // 请求参数非法，如空代码、页码为 0
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    // 数据源暂时不可用（模拟故障）
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}
