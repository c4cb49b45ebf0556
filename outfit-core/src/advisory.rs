//! Advisory guides for precipitation, wind and UV.
//!
//! Each rule is evaluated independently, in declaration order, and contributes at most
//! one guide. No rule suppresses another.

use crate::model::WeatherGuide;

/// Below this temperature (exclusive) precipitation reads as snow and wind calls for
/// insulation rather than a jacket.
pub const FREEZING_POINT_C: f64 = 0.0;

/// Wind speed above which a wind guide is emitted.
pub const WIND_SPEED_THRESHOLD: f64 = 20.0;

/// UV index above which the sunscreen guide is emitted, unless configured otherwise.
pub const DEFAULT_UV_THRESHOLD: i32 = 5;

pub const GUIDE_SNOW: &str = "guide.snow";
pub const GUIDE_RAIN: &str = "guide.rain";
pub const GUIDE_WIND_INSULATION: &str = "guide.wind_insulation";
pub const GUIDE_WIND_JACKET: &str = "guide.wind_jacket";
pub const GUIDE_SUNSCREEN: &str = "guide.sunscreen";

const ICON_SNOW: &str = "snowflake";
const ICON_RAIN: &str = "cloud.rain.fill";
const ICON_WIND_SNOW: &str = "wind.snow";
const ICON_WIND: &str = "wind";
const ICON_UV: &str = "sun.max.trianglebadge.exclamationmark.fill";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryGenerator {
    uv_threshold: i32,
}

impl Default for AdvisoryGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_UV_THRESHOLD)
    }
}

impl AdvisoryGenerator {
    pub fn new(uv_threshold: i32) -> Self {
        Self { uv_threshold }
    }

    pub fn uv_threshold(&self) -> i32 {
        self.uv_threshold
    }

    pub fn advise(
        &self,
        precipitation_intensity: f64,
        temperature_c: f64,
        wind_speed: f64,
        uv_index: i32,
    ) -> Vec<WeatherGuide> {
        let freezing = temperature_c < FREEZING_POINT_C;
        let mut guides = Vec::with_capacity(3);

        if precipitation_intensity > 0.0 {
            guides.push(if freezing {
                WeatherGuide::new(GUIDE_SNOW, ICON_SNOW)
            } else {
                WeatherGuide::new(GUIDE_RAIN, ICON_RAIN)
            });
        }

        if wind_speed > WIND_SPEED_THRESHOLD {
            guides.push(if freezing {
                WeatherGuide::new(GUIDE_WIND_INSULATION, ICON_WIND_SNOW)
            } else {
                WeatherGuide::new(GUIDE_WIND_JACKET, ICON_WIND)
            });
        }

        if uv_index > self.uv_threshold {
            guides.push(WeatherGuide::new(GUIDE_SUNSCREEN, ICON_UV));
        }

        tracing::trace!(
            precipitation_intensity,
            temperature_c,
            wind_speed,
            uv_index,
            guides = guides.len(),
            "generated advisories"
        );

        guides
    }
}
