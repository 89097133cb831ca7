use chrono::{NaiveTime, TimeZone, Utc};
use pulse_core::common::TimeRange;
use pulse_core::common::time::FakeClockProvider;
use pulse_core::config::{FeedConfig, LatencyConfig};
use pulse_core::error::FetchError;
use pulse_core::finance::port::FinanceProvider;
use pulse_core::news::port::NewsProvider;
use pulse_core::overview::port::OverviewProvider;
use pulse_core::weather::port::WeatherProvider;
use pulse_feed::MockFeed;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// # Summary
/// 构造使用固定时钟的模拟数据源。
fn feed_with(seed: u64, latency: LatencyConfig, failure_rate: f64) -> MockFeed {
    let clock = Arc::new(FakeClockProvider::new(
        Utc.with_ymd_and_hms(2026, 10, 16, 14, 20, 0).unwrap(),
    ));
    let config = FeedConfig {
        seed: Some(seed),
        failure_rate,
        latency,
    };
    MockFeed::new(&config, clock)
}

#[tokio::test(start_paused = true)]
async fn test_quote_resolves_after_simulated_latency() -> anyhow::Result<()> {
    let feed = feed_with(1, LatencyConfig::default(), 0.0);

    let start = Instant::now();
    let quote = feed.fetch_stock_quote("AAPL").await?;

    assert!(start.elapsed() >= Duration::from_millis(600));
    assert_eq!(quote.price, 175.5);
    assert_eq!(quote.previous_close, quote.price - quote.change);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_each_endpoint_waits_its_configured_delay() -> anyhow::Result<()> {
    let feed = feed_with(2, LatencyConfig::default(), 0.0);

    let start = Instant::now();
    feed.fetch_forecast("Paris").await?;
    assert!(start.elapsed() >= Duration::from_millis(1000));

    let start = Instant::now();
    feed.fetch_news("general", 1).await?;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(800));
    assert!(elapsed < Duration::from_millis(1000));
    Ok(())
}

#[tokio::test]
async fn test_intraday_uses_clock_date() -> anyhow::Result<()> {
    let feed = feed_with(3, LatencyConfig::zero(), 0.0);
    let series = feed.fetch_stock_data("GOOGL", TimeRange::OneDay).await?;

    assert_eq!(series.len(), 78);
    assert_eq!(
        series[0].time.date(),
        chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    );
    assert_eq!(series[0].time.time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    Ok(())
}

#[tokio::test]
async fn test_same_seed_same_responses() -> anyhow::Result<()> {
    let a = feed_with(99, LatencyConfig::zero(), 0.0);
    let b = feed_with(99, LatencyConfig::zero(), 0.0);

    assert_eq!(
        a.fetch_stock_data("AMZN", TimeRange::OneYear).await?,
        b.fetch_stock_data("AMZN", TimeRange::OneYear).await?
    );
    assert_eq!(a.fetch_weather("Tokyo").await?, b.fetch_weather("Tokyo").await?);
    assert_eq!(a.fetch_overview().await?, b.fetch_overview().await?);
    Ok(())
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let feed = feed_with(4, LatencyConfig::zero(), 0.0);

    assert!(matches!(
        feed.fetch_stock_quote("   ").await,
        Err(FetchError::InvalidRequest(_))
    ));
    assert!(matches!(
        feed.fetch_news("general", 0).await,
        Err(FetchError::InvalidRequest(_))
    ));
    assert!(matches!(
        feed.fetch_forecast("").await,
        Err(FetchError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn test_failure_rate_one_always_fails() {
    let feed = feed_with(5, LatencyConfig::zero(), 1.0);

    assert!(matches!(
        feed.fetch_overview().await,
        Err(FetchError::Unavailable(_))
    ));
    assert!(matches!(
        feed.fetch_weather("Berlin").await,
        Err(FetchError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_out_of_range_failure_rate_is_clamped() -> anyhow::Result<()> {
    let never = feed_with(6, LatencyConfig::zero(), -3.0);
    never.fetch_stock_quote("V").await?;

    let nan = feed_with(6, LatencyConfig::zero(), f64::NAN);
    nan.fetch_stock_quote("V").await?;
    Ok(())
}

#[tokio::test]
async fn test_usable_as_trait_objects() -> anyhow::Result<()> {
    let feed = Arc::new(MockFeed::with_seed(10));
    let finance: Arc<dyn FinanceProvider> = feed.clone();
    let news: Arc<dyn NewsProvider> = feed.clone();

    let (series, page) = tokio::join!(
        finance.fetch_stock_data("JPM", TimeRange::OneWeek),
        news.fetch_news("health", 2)
    );
    assert_eq!(series?.len(), 8);
    assert_eq!(page?.articles[0].id, "health-2-0");
    Ok(())
}
