use crate::error::FetchError;
use crate::overview::entity::OverviewSnapshot;
use async_trait::async_trait;

/// # Summary
/// 业务总览数据提供者接口。
#[async_trait]
pub trait OverviewProvider: Send + Sync {
    /// 获取最新的业务总览快照
    async fn fetch_overview(&self) -> Result<OverviewSnapshot, FetchError>;
}
