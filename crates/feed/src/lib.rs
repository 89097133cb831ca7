//! # Pulse Feed
//!
//! 模拟数据源：各领域的随机数据生成器、模拟延迟，以及实现全部数据源端口的 `MockFeed`。
//! 生成器均为纯函数，随机源与参考时间由调用方显式传入。

pub mod finance;
pub mod latency;
pub mod mock;
pub mod news;
pub mod overview;
pub mod weather;

pub use mock::MockFeed;
