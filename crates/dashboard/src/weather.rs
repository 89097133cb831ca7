use crate::format;
use crate::load::LoadState;
use pulse_core::render::entity::WeatherIcon;
use pulse_core::render::error::RenderError;
use pulse_core::render::port::Surface;
use pulse_core::weather::entity::{Forecast, ForecastItem, WeatherReading};
use pulse_core::weather::port::WeatherProvider;
use pulse_render::icon::render_weather_icon;
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub const WEATHER_FAILURE: &str = "Failed to load weather data. Please try again later.";
pub const FORECAST_FAILURE: &str = "Failed to load forecast data. Please try again later.";

pub const DEFAULT_LOCATION: &str = "New York";

/// # Summary
/// 天气板块：当前地点、实时天气与预报。
///
/// # Invariants
/// - `location` 始终为去除首尾空白后的非空字符串。
pub struct WeatherSection {
    provider: Arc<dyn WeatherProvider>,
    location: String,
    current: LoadState<WeatherReading>,
    forecast: LoadState<Forecast>,
}

impl WeatherSection {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            location: DEFAULT_LOCATION.to_string(),
            current: LoadState::Idle,
            forecast: LoadState::Idle,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn current(&self) -> &LoadState<WeatherReading> {
        &self.current
    }

    pub fn forecast(&self) -> &LoadState<Forecast> {
        &self.forecast
    }

    /// 提交地点搜索，空白输入被忽略并返回 `false`
    pub fn search(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        if query != self.location {
            self.location = query.to_string();
            self.current = LoadState::Idle;
            self.forecast = LoadState::Idle;
        }
        true
    }

    /// # Summary
    /// 以坐标作为当前地点，地点串形如 `"40.7128,-74.006"`。
    ///
    /// # Returns
    /// 坐标含非有限值时不做修改并返回 `false`。
    pub fn use_coordinates(&mut self, latitude: f64, longitude: f64) -> bool {
        if !(latitude.is_finite() && longitude.is_finite()) {
            return false;
        }
        self.location = format!("{},{}", latitude, longitude);
        self.current = LoadState::Idle;
        self.forecast = LoadState::Idle;
        info!(location = %self.location, "Weather location set from coordinates");
        true
    }

    /// 并发加载实时天气与预报
    pub async fn refresh(&mut self) {
        self.current = LoadState::Loading;
        self.forecast = LoadState::Loading;

        let provider = Arc::clone(&self.provider);
        let (current, forecast) = tokio::join!(
            provider.fetch_weather(&self.location),
            provider.fetch_forecast(&self.location)
        );

        self.current = LoadState::settle(current, WEATHER_FAILURE);
        self.forecast = LoadState::settle(forecast, FORECAST_FAILURE);
        info!(location = %self.location, "Weather section refreshed");
    }

    /// # Summary
    /// 按实时天气代码绘制图标。
    ///
    /// # Returns
    /// 实时天气未就绪时不绘制，返回 `Ok(None)`。
    pub fn draw_icon<S, R>(
        &self,
        surface: &mut S,
        rng: &mut R,
    ) -> Result<Option<WeatherIcon>, RenderError>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        match self.current.ready() {
            Some(reading) => render_weather_icon(surface, rng, reading.weather_code).map(Some),
            None => Ok(None),
        }
    }
}

fn fmt_forecast_item(f: &mut fmt::Formatter<'_>, item: &ForecastItem) -> fmt::Result {
    let when = match item.time {
        Some(time) => format::clock_time(time),
        None => format::forecast_day(item.date),
    };
    writeln!(
        f,
        "  {:<12} {:>5}  {:<16} rain {}%  wind {} km/h",
        when,
        format::celsius(item.temperature),
        item.description,
        item.precipitation,
        item.wind_speed
    )
}

impl fmt::Display for WeatherSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather Dashboard")?;
        match &self.current {
            LoadState::Idle => {}
            LoadState::Loading => writeln!(f, "  Loading weather...")?,
            LoadState::Failed(message) => writeln!(f, "  {}", message)?,
            LoadState::Ready(w) => {
                writeln!(
                    f,
                    "  {} {} ({})",
                    format::celsius(w.temperature),
                    w.description,
                    WeatherIcon::from_code(w.weather_code)
                )?;
                writeln!(f, "  {}", w.location)?;
                writeln!(
                    f,
                    "  Feels Like {} | Humidity {}% | Wind Speed {} km/h | UV Index {}",
                    format::celsius(w.feels_like),
                    w.humidity,
                    w.wind_speed,
                    w.uv_index
                )?;
            }
        }

        match &self.forecast {
            LoadState::Idle => {}
            LoadState::Loading => writeln!(f, "  Loading forecast...")?,
            LoadState::Failed(message) => writeln!(f, "  {}", message)?,
            LoadState::Ready(forecast) => {
                writeln!(f, "Daily Forecast")?;
                for item in &forecast.daily {
                    fmt_forecast_item(f, item)?;
                }
                writeln!(f, "Hourly Forecast")?;
                for item in &forecast.hourly {
                    fmt_forecast_item(f, item)?;
                }
            }
        }
        Ok(())
    }
}
