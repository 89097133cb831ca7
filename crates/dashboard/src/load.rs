use pulse_core::error::FetchError;
use tracing::warn;

/// # Summary
/// 单个数据块的加载状态。
///
/// # Invariants
/// - `Failed` 只携带面向用户的固定文案，底层错误在转换时记录日志后丢弃。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// # Summary
    /// 将一次获取结果折叠为加载状态。
    ///
    /// # Arguments
    /// * `result`: 数据源返回值。
    /// * `message`: 失败时展示的文案。
    pub fn settle(result: Result<T, FetchError>, message: &str) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                warn!(error = %e, "{}", message);
                LoadState::Failed(message.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
