use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use pulse_core::common::{NewsCategory, TimeRange};
use pulse_feed::finance::{INTRADAY_POINTS, generate_stock_quote, generate_stock_series};
use pulse_feed::news::{SOURCES, generate_news_page, images, titles};
use pulse_feed::overview::generate_overview;
use pulse_feed::weather::{CONDITIONS, generate_current, generate_forecast};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// 永远产出 0 的随机源，使每次均匀抽样都落在区间下界
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(14, 20, 37)
        .unwrap()
}

#[test]
fn test_intraday_series_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    let now = reference_time();
    let series = generate_stock_series(&mut rng, "AAPL", TimeRange::OneDay, now);

    assert_eq!(series.len(), INTRADAY_POINTS);
    assert_eq!(series.len(), 78);
    assert_eq!(
        series[0].time,
        now.date().and_hms_opt(9, 30, 0).unwrap(),
        "Intraday series must open at 09:30"
    );
    for pair in series.windows(2) {
        assert_eq!(pair[1].time - pair[0].time, Duration::minutes(5));
    }
    for point in &series {
        assert!((10_000..110_000).contains(&point.volume));
    }
}

#[test]
fn test_daily_series_lengths_and_spacing() {
    let now = reference_time();
    let cases = [
        (TimeRange::OneWeek, 8),
        (TimeRange::OneMonth, 31),
        (TimeRange::ThreeMonths, 91),
        (TimeRange::OneYear, 366),
    ];

    for (range, expected) in cases {
        let mut rng = StdRng::seed_from_u64(11);
        let series = generate_stock_series(&mut rng, "MSFT", range, now);
        assert_eq!(series.len(), expected, "range {}", range);
        assert_eq!(series.last().unwrap().time.date(), now.date());
        assert_eq!(series[0].time.time(), NaiveTime::MIN);
        for pair in series.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, Duration::days(1));
        }
        for point in &series {
            assert!((1_000_000..11_000_000).contains(&point.volume));
        }
    }
}

#[test]
fn test_series_prices_never_below_floor() {
    let now = reference_time();
    for seed in 0..50 {
        for symbol in ["AAPL", "WMT", "V", "UNKNOWN"] {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = generate_stock_series(&mut rng, symbol, TimeRange::OneYear, now);
            assert!(series.iter().all(|p| p.price >= 1.0));
        }
    }
}

#[test]
fn test_floor_reset_when_walk_keeps_falling() {
    // 每一步都取最大跌幅，价格必然触底并被重置到下限
    let series = generate_stock_series(&mut ZeroRng, "WMT", TimeRange::OneYear, reference_time());
    assert!(series.iter().all(|p| p.price >= 1.0));
    assert_eq!(series.last().unwrap().price, 1.0);
}

#[test]
fn test_series_prices_rounded_to_cents() {
    let mut rng = StdRng::seed_from_u64(3);
    let series = generate_stock_series(&mut rng, "NVDA", TimeRange::ThreeMonths, reference_time());
    for point in series {
        let cents = point.price * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "{} not rounded", point.price);
    }
}

#[test]
fn test_same_seed_same_series() {
    let now = reference_time();
    let a = generate_stock_series(&mut StdRng::seed_from_u64(42), "TSLA", TimeRange::OneMonth, now);
    let b = generate_stock_series(&mut StdRng::seed_from_u64(42), "TSLA", TimeRange::OneMonth, now);
    let c = generate_stock_series(&mut StdRng::seed_from_u64(43), "TSLA", TimeRange::OneMonth, now);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_quote_invariants() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = generate_stock_quote(&mut rng, "AAPL");

        assert_eq!(q.price, 175.5);
        assert_eq!(q.previous_close, q.price - q.change);
        assert!(q.change.abs() <= 175.5 * 0.05);
        assert!((q.change_percent - q.change / q.previous_close * 100.0).abs() < 1e-9);
        assert!((q.open - q.previous_close).abs() <= 2.0);
        assert!(q.high >= q.price && q.high <= q.price + 5.0);
        assert!(q.low <= q.price && q.low >= q.price - 5.0);
        assert!((1_000_000..11_000_000).contains(&q.volume));
        assert!((10..40).contains(&q.pe_ratio));
        assert!((0.0..2.0).contains(&q.dividend));
        assert!((0.0..4.0).contains(&q.dividend_yield));
        assert!(q.market_cap >= 175.5 * 1.0e7 && q.market_cap < 175.5 * 1.01e9);
        assert_eq!(q.fifty_two_week_high, 175.5 * 1.3);
        assert_eq!(q.fifty_two_week_low, 175.5 * 0.7);
    }
}

#[test]
fn test_unknown_symbol_base_price_range() {
    for seed in 0..20 {
        let q = generate_stock_quote(&mut StdRng::seed_from_u64(seed), "ZZZZ");
        assert!((100.0..300.0).contains(&q.price));
    }
}

#[test]
fn test_news_page_shape() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 14, 20, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let page = generate_news_page(&mut rng, "technology", 3, now);

    assert_eq!(page.articles.len(), 6);
    assert_eq!(page.total_results, 100);
    assert_eq!(page.total_pages, 10);

    let tech_titles = titles(NewsCategory::Technology);
    let tech_images = images(NewsCategory::Technology);
    for (i, article) in page.articles.iter().enumerate() {
        assert_eq!(article.id, format!("technology-3-{}", i));
        assert_eq!(article.url, format!("https://example.com/news/technology/3/{}", i));
        assert_eq!(article.title, tech_titles[i]);
        assert_eq!(article.image, tech_images[i]);
        assert!(article.description.contains(&tech_titles[i].to_lowercase()));
        assert!(article.published_at <= now);
        assert!(article.published_at > now - Duration::hours(24));
        assert!(
            SOURCES
                .iter()
                .any(|(name, url)| article.source.name == *name && article.source.url == *url)
        );
    }
}

#[test]
fn test_news_titles_cycle_across_pages() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 14, 20, 0).unwrap();
    let first = generate_news_page(&mut StdRng::seed_from_u64(1), "sports", 1, now);
    let seventh = generate_news_page(&mut StdRng::seed_from_u64(2), "sports", 7, now);

    let a: Vec<_> = first.articles.iter().map(|a| &a.title).collect();
    let b: Vec<_> = seventh.articles.iter().map(|a| &a.title).collect();
    assert_eq!(a, b);
    assert_ne!(first.articles[0].id, seventh.articles[0].id);
}

#[test]
fn test_news_unknown_category_falls_back_to_general() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 14, 20, 0).unwrap();
    let page = generate_news_page(&mut StdRng::seed_from_u64(9), "politics", 2, now);

    assert_eq!(page.articles[0].id, "politics-2-0");
    assert_eq!(page.articles[0].title, titles(NewsCategory::General)[0]);
    assert_eq!(page.articles[5].image, images(NewsCategory::General)[5]);
}

#[test]
fn test_current_weather_bounds_and_pairing() {
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let reading = generate_current(&mut rng, "London");

        assert_eq!(reading.location, "London");
        assert!((10..25).contains(&reading.temperature));
        assert!((8..23).contains(&reading.feels_like));
        assert!((50..80).contains(&reading.humidity));
        assert!((5..25).contains(&reading.wind_speed));
        assert!((1..=8).contains(&reading.uv_index));
        assert!(
            CONDITIONS
                .iter()
                .any(|(code, desc)| *code == reading.weather_code && *desc == reading.description)
        );
    }
}

#[test]
fn test_new_york_display_name() {
    let reading = generate_current(&mut StdRng::seed_from_u64(0), "New York");
    assert_eq!(reading.location, "New York, US");
}

#[test]
fn test_forecast_shape() {
    let now = reference_time();
    let forecast = generate_forecast(&mut StdRng::seed_from_u64(21), now);

    assert_eq!(forecast.daily.len(), 7);
    for (i, item) in forecast.daily.iter().enumerate() {
        assert_eq!(item.date, now.date() + Duration::days(i64::try_from(i).unwrap()));
        assert!(item.time.is_none());
    }

    assert_eq!(forecast.hourly.len(), 8);
    let first = forecast.hourly[0].date.and_time(forecast.hourly[0].time.unwrap());
    assert_eq!(first, now.date().and_hms_opt(12, 0, 0).unwrap());
    let stamps: Vec<NaiveDateTime> = forecast
        .hourly
        .iter()
        .map(|h| h.date.and_time(h.time.unwrap()))
        .collect();
    for pair in stamps.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::hours(3));
    }

    for item in forecast.daily.iter().chain(forecast.hourly.iter()) {
        assert!(
            CONDITIONS
                .iter()
                .any(|(code, desc)| *code == item.weather_code && *desc == item.description)
        );
        assert!((10..25).contains(&item.temperature));
        assert!((10..80).contains(&item.precipitation));
        assert!((5..25).contains(&item.wind_speed));
    }
}

#[test]
fn test_hourly_forecast_rolls_over_midnight() {
    let late = NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(22, 59, 59)
        .unwrap();
    let forecast = generate_forecast(&mut StdRng::seed_from_u64(4), late);

    assert_eq!(forecast.hourly[0].time, NaiveTime::from_hms_opt(21, 0, 0));
    assert_eq!(forecast.hourly[1].date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    assert_eq!(forecast.hourly[1].time, NaiveTime::from_hms_opt(0, 0, 0));
}

#[test]
fn test_overview_series() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let snapshot = generate_overview(&mut StdRng::seed_from_u64(8), today);

    assert_eq!(snapshot.revenue, "$48,352.91");
    assert_eq!(snapshot.orders_change, -3.1);

    let bounded = [
        (&snapshot.revenue_series, 30_000, 50_000),
        (&snapshot.users_series, 1_800, 2_500),
        (&snapshot.orders_series, 900, 1_300),
    ];
    for (series, min, max) in bounded {
        assert_eq!(series.len(), 31);
        assert_eq!(series.last().unwrap().date, today);
        assert_eq!(series[0].date, today - Duration::days(30));
        assert!(series.iter().all(|p| (min..=max).contains(&p.value)));
    }
}
