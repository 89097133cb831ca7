mod artifacts;
mod logging;
mod settings;

use std::sync::Arc;

use pulse_core::common::time::RealTimeProvider;
use pulse_dashboard::Dashboard;
use pulse_feed::MockFeed;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化模拟数据源并通过 Arc<dyn Trait> 注入到各仪表盘板块。
///
/// # Logic
/// 1. 加载层叠配置并初始化全局日志。
/// 2. 实例化基础设施层（时钟、MockFeed）。
/// 3. 构造仪表盘并并发加载全部板块。
/// 4. 打印文本视图，输出天气图标与股价图 SVG。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志，guard 需存活到进程结束
    let config = settings::load()?;
    let _log_guard = logging::init(&config.log)?;
    info!("Pulse dashboard starting...");

    // 2. 实例化基础设施层
    let clock = Arc::new(RealTimeProvider);
    let feed = Arc::new(MockFeed::new(&config.feed, clock));

    // 3. 构造仪表盘并加载
    let mut dashboard = Dashboard::from_source(feed, &config.dashboard);
    dashboard.load_all().await;
    println!("{}", dashboard);

    // 4. 输出图形；配置了种子时图标粒子位置也可复现
    let mut rng = match config.feed.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let written = artifacts::write_artifacts(&dashboard, &config.output, &mut rng)?;
    info!("Wrote {} artifact(s) to {}. Exiting...", written.len(), config.output.dir);

    Ok(())
}
