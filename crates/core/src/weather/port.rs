use crate::error::FetchError;
use crate::weather::entity::{Forecast, WeatherReading};
use async_trait::async_trait;

/// # Summary
/// 天气数据提供者接口。
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// # Summary
    /// 获取指定地点的当前天气。
    ///
    /// # Arguments
    /// * `location`: 地点名称，不可为空。
    async fn fetch_weather(&self, location: &str) -> Result<WeatherReading, FetchError>;

    /// # Summary
    /// 获取指定地点的 7 日与逐 3 小时预报。
    ///
    /// # Arguments
    /// * `location`: 地点名称，不可为空。
    async fn fetch_forecast(&self, location: &str) -> Result<Forecast, FetchError>;
}
