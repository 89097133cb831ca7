use crate::common::TimeRange;
use crate::error::FetchError;
use crate::finance::entity::{StockPoint, StockQuote};
use async_trait::async_trait;

/// # Summary
/// 行情数据提供者接口。
///
/// # Invariants
/// - 每次调用独立生成结果，实现者不得缓存上一次的响应。
#[async_trait]
pub trait FinanceProvider: Send + Sync {
    /// # Summary
    /// 获取指定证券在某个时间跨度内的价格序列。
    ///
    /// # Arguments
    /// * `symbol`: 证券代码（大写）。
    /// * `range`: 时间跨度。
    ///
    /// # Returns
    /// 成功返回按时间升序排列的采样点列表。
    async fn fetch_stock_data(
        &self,
        symbol: &str,
        range: TimeRange,
    ) -> Result<Vec<StockPoint>, FetchError>;

    /// # Summary
    /// 获取指定证券的报价快照。
    ///
    /// # Arguments
    /// * `symbol`: 证券代码（大写）。
    ///
    /// # Returns
    /// 成功返回报价快照。
    async fn fetch_stock_quote(&self, symbol: &str) -> Result<StockQuote, FetchError>;
}
