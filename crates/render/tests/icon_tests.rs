use pulse_core::render::entity::WeatherIcon;
use pulse_core::render::error::RenderError;
use pulse_render::icon::{
    DRIZZLE_DROPS, RAIN_DROPS, SNOW_FLAKES, STORM_DROPS, SUN_RAYS, palette, render_weather_icon,
};
use pulse_render::{DrawOp, RecordingSurface};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn draw(code: u16, seed: u64) -> (WeatherIcon, RecordingSurface) {
    let mut surface = RecordingSurface::new(200.0, 200.0);
    let mut rng = StdRng::seed_from_u64(seed);
    let icon = render_weather_icon(&mut surface, &mut rng, code).unwrap();
    (icon, surface)
}

fn ellipses(surface: &RecordingSurface) -> Vec<(f64, f64, f64, f64)> {
    surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Ellipse {
                x,
                y,
                radius_x,
                radius_y,
            } => Some((*x, *y, *radius_x, *radius_y)),
            _ => None,
        })
        .collect()
}

fn count(n: u32) -> usize {
    usize::try_from(n).unwrap()
}

#[test]
fn test_icon_returned_matches_classification() {
    let cases = [
        (250, WeatherIcon::Thunderstorm),
        (300, WeatherIcon::Drizzle),
        (550, WeatherIcon::Rain),
        (650, WeatherIcon::Snow),
        (750, WeatherIcon::Fog),
        (800, WeatherIcon::Clear),
        (801, WeatherIcon::Clouds),
    ];
    for (code, expected) in cases {
        let (icon, surface) = draw(code, 1);
        assert_eq!(icon, expected, "code {}", code);
        assert_eq!(surface.ops()[0], DrawOp::Clear);
    }
}

#[test]
fn test_sun_disc_and_rays() {
    let (_, surface) = draw(800, 1);

    assert_eq!(surface.fill_colors(), vec![palette::SUN]);
    assert_eq!(
        surface.count(|op| matches!(op, DrawOp::Stroke { color, width } if *color == palette::SUN && *width == 3.0)),
        count(SUN_RAYS)
    );
    assert!(surface.ops().contains(&DrawOp::Arc {
        x: 100.0,
        y: 100.0,
        radius: 40.0,
        start: 0.0,
        end: std::f64::consts::TAU,
    }));
}

#[test]
fn test_clouds_three_light_grey_shapes() {
    let (_, surface) = draw(804, 1);
    assert_eq!(surface.fill_colors(), vec![palette::CLOUD; 3]);
    // 每朵云由三段圆弧组成
    assert_eq!(surface.count(|op| matches!(op, DrawOp::Arc { .. })), 9);
}

#[test]
fn test_rain_cloud_and_droplets() {
    let (_, surface) = draw(501, 3);
    let fills = surface.fill_colors();

    assert_eq!(fills[0], palette::RAIN_CLOUD);
    assert_eq!(fills.len(), 1 + count(RAIN_DROPS));
    assert!(fills[1..].iter().all(|c| *c == palette::RAINDROP));

    let drops = ellipses(&surface);
    assert_eq!(drops.len(), count(RAIN_DROPS));
    for (x, y, rx, ry) in drops {
        assert!((0.0..200.0).contains(&x));
        assert!((100.0..200.0).contains(&y), "droplet y {} outside lower half", y);
        assert_eq!((rx, ry), (2.0, 7.0));
    }
}

#[test]
fn test_drizzle_is_smaller_and_sparser() {
    let (_, surface) = draw(321, 4);
    let fills = surface.fill_colors();

    assert_eq!(fills[0], palette::GREY_CLOUD);
    assert!(fills[1..].iter().all(|c| *c == palette::DRIZZLE_DROP));

    let drops = ellipses(&surface);
    assert_eq!(drops.len(), count(DRIZZLE_DROPS));
    assert!(drops.iter().all(|d| (d.2, d.3) == (1.0, 5.0)));
}

#[test]
fn test_snow_flakes() {
    let (_, surface) = draw(600, 5);
    let fills = surface.fill_colors();

    assert_eq!(fills[0], palette::GREY_CLOUD);
    assert_eq!(
        fills.iter().filter(|c| **c == palette::SNOWFLAKE).count(),
        count(SNOW_FLAKES)
    );
    let flakes = surface.count(|op| matches!(op, DrawOp::Arc { radius, .. } if *radius == 3.0));
    assert_eq!(flakes, count(SNOW_FLAKES));
}

#[test]
fn test_thunderstorm_bolt_then_rain() {
    let (_, surface) = draw(211, 6);
    let fills = surface.fill_colors();

    assert_eq!(fills[0], palette::STORM_CLOUD);
    assert_eq!(fills[1], palette::SUN);
    assert_eq!(fills.len(), 2 + count(STORM_DROPS));
    assert_eq!(surface.count(|op| *op == DrawOp::ClosePath), 1);
    assert!(surface.ops().contains(&DrawOp::LineTo { x: 100.0, y: 150.0 }));
}

#[test]
fn test_fog_bands() {
    let (_, surface) = draw(701, 7);
    assert_eq!(surface.fill_colors(), vec![palette::FOG; 5]);
    assert!(surface.ops().contains(&DrawOp::MoveTo { x: 0.0, y: 50.0 }));
    assert!(surface.ops().contains(&DrawOp::MoveTo { x: 0.0, y: 130.0 }));
}

#[test]
fn test_droplet_positions_follow_seed() {
    let (_, a) = draw(520, 42);
    let (_, b) = draw(520, 42);
    let (_, c) = draw(520, 43);

    assert_eq!(a.ops(), b.ops());
    assert_ne!(ellipses(&a), ellipses(&c));
}

#[test]
fn test_redraw_replaces_previous_frame() {
    let mut surface = RecordingSurface::new(200.0, 200.0);
    let mut rng = StdRng::seed_from_u64(0);

    render_weather_icon(&mut surface, &mut rng, 500).unwrap();
    render_weather_icon(&mut surface, &mut rng, 800).unwrap();

    assert_eq!(surface.count(|op| *op == DrawOp::Clear), 1);
    assert_eq!(surface.fill_colors(), vec![palette::SUN]);
}

#[test]
fn test_larger_surface_scales_shapes() {
    let mut surface = RecordingSurface::new(400.0, 400.0);
    let mut rng = StdRng::seed_from_u64(0);
    render_weather_icon(&mut surface, &mut rng, 800).unwrap();

    assert!(surface.ops().iter().any(|op| matches!(
        op,
        DrawOp::Arc { x, y, radius, .. } if *x == 200.0 && *y == 200.0 && *radius == 80.0
    )));
}

#[test]
fn test_degenerate_surface_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut empty = RecordingSurface::new(0.0, 200.0);
    let result = render_weather_icon(&mut empty, &mut rng, 800);

    assert!(matches!(result, Err(RenderError::InvalidSize { .. })));
    assert!(empty.ops().is_empty());
}
