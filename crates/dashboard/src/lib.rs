//! # Pulse Dashboard
//!
//! 仪表盘的板块容器：各板块持有自己的本地状态（代码、分类、页码、地点）与加载状态，
//! 通过注入的数据源端口刷新，并提供文本视图与图表/图标绘制入口。

pub mod dashboard;
pub mod finance;
pub mod format;
pub mod load;
pub mod news;
pub mod overview;
pub mod weather;

pub use dashboard::Dashboard;
pub use load::LoadState;
