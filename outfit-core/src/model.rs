use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// A single resolved weather observation, already in the units the engine expects.
///
/// `humidity_pct` is always on the 0–100 scale. Feeds reporting relative humidity as a
/// 0–1 fraction must go through [`HumidityScale::to_percent`] (or
/// [`WeatherObservation::with_humidity`]) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default)]
    pub condition: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    #[serde(default)]
    pub precipitation_intensity: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub uv_index: i32,
    #[serde(default)]
    pub symbol_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherObservation {
    /// Calm, dry, dark observation at the given temperature and humidity.
    pub fn new(temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            condition: String::new(),
            temperature_c,
            humidity_pct,
            precipitation_intensity: 0.0,
            wind_speed: 0.0,
            uv_index: 0,
            symbol_name: String::new(),
            observed_at: None,
        }
    }

    /// Replace the humidity with `raw`, interpreted on `scale`.
    pub fn with_humidity(mut self, raw: f64, scale: HumidityScale) -> Self {
        self.humidity_pct = scale.to_percent(raw);
        self
    }

    pub fn with_precipitation(mut self, intensity: f64) -> Self {
        self.precipitation_intensity = intensity;
        self
    }

    pub fn with_wind(mut self, speed: f64) -> Self {
        self.wind_speed = speed;
        self
    }

    pub fn with_uv_index(mut self, uv_index: i32) -> Self {
        self.uv_index = uv_index;
        self
    }

    pub fn with_condition(
        mut self,
        condition: impl Into<String>,
        symbol_name: impl Into<String>,
    ) -> Self {
        self.condition = condition.into();
        self.symbol_name = symbol_name.into();
        self
    }

    pub fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = Some(observed_at);
        self
    }
}

/// Scale a raw relative-humidity reading arrives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HumidityScale {
    /// 0–100.
    #[default]
    Percent,
    /// 0–1.
    Fraction,
}

impl HumidityScale {
    pub fn to_percent(self, raw: f64) -> f64 {
        match self {
            HumidityScale::Percent => raw,
            HumidityScale::Fraction => raw * 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HumidityScale::Percent => "percent",
            HumidityScale::Fraction => "fraction",
        }
    }
}

impl fmt::Display for HumidityScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HumidityScale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percent" | "pct" | "%" => Ok(HumidityScale::Percent),
            "fraction" | "ratio" => Ok(HumidityScale::Fraction),
            _ => Err(ParseError::HumidityScale(s.to_string())),
        }
    }
}

/// One recommended piece of clothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Localization key, e.g. `clothing.t_shirt`.
    pub name: String,
    /// Illustration reference; not every item has one.
    pub image: Option<String>,
}

impl ClothingItem {
    pub fn new(name: impl Into<String>, image: Option<&str>) -> Self {
        Self {
            name: name.into(),
            image: image.map(str::to_string),
        }
    }
}

/// Advisory tied to precipitation, wind or UV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherGuide {
    /// Localization key, e.g. `guide.rain`.
    pub message: String,
    pub icon: String,
}

impl WeatherGuide {
    pub fn new(message: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherClothingRecommendation {
    pub clothing_items: Vec<ClothingItem>,
    pub weather_guides: Vec<WeatherGuide>,
}

impl WeatherClothingRecommendation {
    /// First `n` guides in rule order.
    pub fn top_guides(&self, n: usize) -> &[WeatherGuide] {
        &self.weather_guides[..n.min(self.weather_guides.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_humidity_is_scaled_to_percent() {
        let obs = WeatherObservation::new(20.0, 0.0).with_humidity(0.61, HumidityScale::Fraction);
        assert!((obs.humidity_pct - 61.0).abs() < 1e-9);

        let obs = WeatherObservation::new(20.0, 0.0).with_humidity(61.0, HumidityScale::Percent);
        assert_eq!(obs.humidity_pct, 61.0);
    }

    #[test]
    fn humidity_scale_parsing() {
        assert_eq!("percent".parse::<HumidityScale>(), Ok(HumidityScale::Percent));
        assert_eq!("Fraction".parse::<HumidityScale>(), Ok(HumidityScale::Fraction));

        let err = "kelvin".parse::<HumidityScale>().unwrap_err();
        assert!(err.to_string().contains("Unknown humidity scale"));
    }

    #[test]
    fn observation_json_defaults_optional_fields() {
        let obs: WeatherObservation =
            serde_json::from_str(r#"{ "temperature_c": 19.9, "humidity_pct": 20 }"#)
                .expect("minimal observation should parse");

        assert_eq!(obs, WeatherObservation::new(19.9, 20.0));
    }

    #[test]
    fn top_guides_truncates_in_order() {
        let rec = WeatherClothingRecommendation {
            clothing_items: vec![],
            weather_guides: vec![
                WeatherGuide::new("guide.rain", "cloud.rain.fill"),
                WeatherGuide::new("guide.wind", "wind"),
                WeatherGuide::new("guide.sunscreen", "sun.max"),
            ],
        };

        let top = rec.top_guides(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].message, "guide.rain");
        assert_eq!(top[1].message, "guide.wind");
        assert_eq!(rec.top_guides(10).len(), 3);
        assert!(rec.top_guides(0).is_empty());
    }

    #[test]
    fn clothing_item_without_image() {
        let item = ClothingItem::new("clothing.leggings", None);
        assert_eq!(item.image, None);

        let json = serde_json::to_value(&item).expect("serialize item");
        assert!(json["image"].is_null());
    }
}
