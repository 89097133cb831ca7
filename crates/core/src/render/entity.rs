use serde::{Deserialize, Serialize};

/// # Summary
/// RGBA 颜色。
///
/// # Invariants
/// - `a == 255` 表示完全不透明。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// 构造不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// 替换透明度分量
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// # Summary
    /// 透明度分量的浮点表示。
    ///
    /// # Returns
    /// `[0, 1]` 区间内的不透明度。
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// # Summary
/// 天气图标种类，由天气代码按区间唯一确定。
///
/// # Invariants
/// - 区间升序且互不重叠，`from_code` 对任意代码都有唯一结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherIcon {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Clear,
    Clouds,
}

impl WeatherIcon {
    /// # Summary
    /// 将天气代码映射到图标种类。
    ///
    /// # Logic
    /// 1. `<300` 雷暴，`<500` 毛毛雨，`<600` 雨，`<700` 雪，`<800` 雾。
    /// 2. `==800` 晴，`>800` 多云。
    ///
    /// # Arguments
    /// * `code`: 天气代码。
    ///
    /// # Returns
    /// 对应的图标种类。
    pub fn from_code(code: u16) -> Self {
        match code {
            0..300 => WeatherIcon::Thunderstorm,
            300..500 => WeatherIcon::Drizzle,
            500..600 => WeatherIcon::Rain,
            600..700 => WeatherIcon::Snow,
            700..800 => WeatherIcon::Fog,
            800 => WeatherIcon::Clear,
            _ => WeatherIcon::Clouds,
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WeatherIcon::Thunderstorm => "thunderstorm",
            WeatherIcon::Drizzle => "drizzle",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::Fog => "fog",
            WeatherIcon::Clear => "clear",
            WeatherIcon::Clouds => "clouds",
        };
        f.write_str(name)
    }
}

/// 界面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classification_inside_ranges() {
        assert_eq!(WeatherIcon::from_code(250), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(350), WeatherIcon::Drizzle);
        assert_eq!(WeatherIcon::from_code(550), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_code(650), WeatherIcon::Snow);
        assert_eq!(WeatherIcon::from_code(750), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(800), WeatherIcon::Clear);
        assert_eq!(WeatherIcon::from_code(801), WeatherIcon::Clouds);
    }

    #[test]
    fn test_icon_classification_boundaries() {
        assert_eq!(WeatherIcon::from_code(299), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(300), WeatherIcon::Drizzle);
        assert_eq!(WeatherIcon::from_code(500), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_code(600), WeatherIcon::Snow);
        assert_eq!(WeatherIcon::from_code(700), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(799), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(0), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(u16::MAX), WeatherIcon::Clouds);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0xFF, 0xD7, 0x00).to_string(), "#FFD700");
        assert_eq!(Color::rgb(0, 0, 0).with_alpha(0).opacity(), 0.0);
    }
}
