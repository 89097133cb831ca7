use pulse_core::common::{NewsCategory, TimeRange};
use pulse_core::render::entity::{Theme, WeatherIcon};
use pulse_core::render::error::RenderError;
use pulse_dashboard::LoadState;
use pulse_dashboard::finance::FinanceSection;
use pulse_dashboard::news::NewsSection;
use pulse_dashboard::overview::{KpiSeries, OverviewSection};
use pulse_dashboard::weather::WeatherSection;
use pulse_feed::MockFeed;
use pulse_render::{DrawOp, RecordingSurface};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

fn feed(seed: u64) -> Arc<MockFeed> {
    Arc::new(MockFeed::with_seed(seed))
}

#[tokio::test]
async fn test_finance_search_normalizes_symbol() {
    let mut section = FinanceSection::new(feed(1));
    assert_eq!(section.symbol(), "AAPL");
    assert_eq!(section.range(), TimeRange::OneMonth);

    assert!(!section.search("   "));
    assert_eq!(section.symbol(), "AAPL");

    assert!(section.search(" msft "));
    assert_eq!(section.symbol(), "MSFT");
}

#[tokio::test]
async fn test_finance_range_change_invalidates_series_only() -> anyhow::Result<()> {
    let mut section = FinanceSection::new(feed(2));
    section.refresh().await;
    assert!(section.series().ready().is_some());

    section.set_range(TimeRange::OneYear);
    assert_eq!(*section.series(), LoadState::Idle);
    assert!(section.quote().ready().is_some());

    section.refresh().await;
    assert_eq!(section.series().ready().map(Vec::len), Some(366));

    section.select_range_str("nonsense");
    assert_eq!(section.range(), TimeRange::OneMonth);
    section.select_range_str("1D");
    assert_eq!(section.range(), TimeRange::OneDay);
    Ok(())
}

#[tokio::test]
async fn test_finance_chart_needs_loaded_series() -> anyhow::Result<()> {
    let mut section = FinanceSection::new(feed(3));
    let mut surface = RecordingSurface::new(600.0, 300.0);

    assert!(matches!(
        section.draw_chart(&mut surface, Theme::Light),
        Err(RenderError::EmptySeries)
    ));

    section.refresh().await;
    section.draw_chart(&mut surface, Theme::Dark)?;
    assert_eq!(surface.ops()[0], DrawOp::Clear);
    Ok(())
}

#[tokio::test]
async fn test_news_paging_bounds() {
    let mut section = NewsSection::new(feed(4));
    assert_eq!(section.page(), 1);
    assert!(!section.previous_page());
    // 总页数未知前无法翻页
    assert!(!section.next_page());

    section.refresh().await;
    while section.next_page() {}
    assert_eq!(section.page(), 10);

    section.refresh().await;
    assert_eq!(section.data().ready().unwrap().articles[0].id, "general-10-0");

    assert!(section.previous_page());
    assert_eq!(section.page(), 9);
}

#[tokio::test]
async fn test_news_category_change_resets_page() {
    let mut section = NewsSection::new(feed(5));
    section.refresh().await;
    section.next_page();
    section.next_page();
    assert_eq!(section.page(), 3);

    section.set_category(NewsCategory::Science);
    assert_eq!(section.page(), 1);
    assert_eq!(*section.data(), LoadState::Idle);

    section.set_category_str("unknown");
    assert_eq!(section.category(), NewsCategory::General);
}

#[tokio::test]
async fn test_news_article_modal() {
    let mut section = NewsSection::new(feed(6));
    assert!(!section.select_article("general-1-0"));

    section.refresh().await;
    assert!(section.select_article("general-1-2"));
    assert_eq!(section.selected_article().unwrap().id, "general-1-2");
    assert!(section.to_string().contains("Read more: https://example.com/news/general/1/2"));

    assert!(!section.select_article("missing"));
    assert_eq!(section.selected_article().unwrap().id, "general-1-2");

    section.close_article();
    assert!(section.selected_article().is_none());
}

#[tokio::test]
async fn test_weather_search_and_icon() -> anyhow::Result<()> {
    let mut section = WeatherSection::new(feed(7));
    let mut surface = RecordingSurface::new(200.0, 200.0);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(section.draw_icon(&mut surface, &mut rng)?, None);
    assert!(surface.ops().is_empty());

    assert!(!section.search(""));
    assert!(section.search("  Tokyo "));
    assert_eq!(section.location(), "Tokyo");

    section.refresh().await;
    let code = section.current().ready().unwrap().weather_code;
    let icon = section.draw_icon(&mut surface, &mut rng)?;
    assert_eq!(icon, Some(WeatherIcon::from_code(code)));
    assert_eq!(section.current().ready().unwrap().location, "Tokyo");

    let text = section.to_string();
    assert!(text.contains("Daily Forecast"));
    assert!(text.contains("Hourly Forecast"));
    Ok(())
}

#[tokio::test]
async fn test_weather_uses_coordinates_as_location() {
    let mut section = WeatherSection::new(feed(11));
    section.refresh().await;
    assert!(section.current().ready().is_some());

    assert!(!section.use_coordinates(f64::NAN, -74.006));
    assert_eq!(section.location(), "New York");

    assert!(section.use_coordinates(40.7128, -74.006));
    assert_eq!(section.location(), "40.7128,-74.006");
    assert_eq!(*section.current(), LoadState::Idle);
    assert_eq!(*section.forecast(), LoadState::Idle);

    section.refresh().await;
    assert_eq!(
        section.current().ready().map(|w| w.location.as_str()),
        Some("40.7128,-74.006")
    );
    assert!(section.forecast().ready().is_some());
}

#[tokio::test]
async fn test_overview_defaults_before_load() -> anyhow::Result<()> {
    let mut section = OverviewSection::new(feed(8));
    let values: Vec<String> = section.metrics().into_iter().map(|m| m.value).collect();
    assert_eq!(values, vec!["$0", "0", "0", "0%"]);
    assert!(section.series(KpiSeries::Users).is_empty());
    assert!(section.to_string().contains("$0"));

    section.refresh().await;
    let metrics = section.metrics();
    assert_eq!(metrics[3].value, "3.8%");
    assert_eq!(metrics[1].change, 8.2);
    assert_eq!(section.series(KpiSeries::Orders).len(), 31);

    let mut surface = RecordingSurface::new(600.0, 300.0);
    section.draw_chart(&mut surface, KpiSeries::Revenue, Theme::Light)?;
    // 只有背景是矩形，序列为一块半透明面积
    assert_eq!(surface.count(|op| matches!(op, DrawOp::FillRect { .. })), 1);
    assert_eq!(surface.count(|op| matches!(op, DrawOp::Fill { .. })), 1);
    Ok(())
}
