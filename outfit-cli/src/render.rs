use outfit_core::{
    ColorTokens, Locale, Palette, TemperatureBand, WeatherClothingRecommendation,
    WeatherObservation, i18n,
};
use serde::Serialize;
use std::fmt;

/// Everything shown for one observation.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub observation: &'a WeatherObservation,
    pub band: Option<TemperatureBand>,
    pub colors: ColorTokens,
    pub clothing_items: Vec<ItemView<'a>>,
    pub weather_guides: Vec<GuideView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ItemView<'a> {
    pub name: &'a str,
    pub image: Option<&'a str>,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GuideView<'a> {
    pub message: &'a str,
    pub icon: &'a str,
    pub text: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(
        observation: &'a WeatherObservation,
        recommendation: &'a WeatherClothingRecommendation,
        palette: &Palette,
        locale: Locale,
        max_guides: Option<usize>,
    ) -> Self {
        let guides = match max_guides {
            Some(n) => recommendation.top_guides(n),
            None => &recommendation.weather_guides[..],
        };

        Self {
            observation,
            band: TemperatureBand::of(observation.temperature_c),
            colors: palette.colors_for(observation.temperature_c),
            clothing_items: recommendation
                .clothing_items
                .iter()
                .map(|item| ItemView {
                    name: &item.name,
                    image: item.image.as_deref(),
                    text: i18n::text(&item.name, locale),
                })
                .collect(),
            weather_guides: guides
                .iter()
                .map(|guide| GuideView {
                    message: &guide.message,
                    icon: &guide.icon,
                    text: i18n::text(&guide.message, locale),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = self.observation;

        let band = self.band.map_or("Unbanded", |b| b.as_str());
        write!(
            f,
            "{band} · {:.1}°C · {:.0}% humidity",
            obs.temperature_c, obs.humidity_pct
        )?;
        if !obs.condition.is_empty() {
            write!(f, " · {}", obs.condition)?;
        }
        writeln!(f)?;
        if let Some(at) = obs.observed_at {
            writeln!(f, "Observed at {}", at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        writeln!(
            f,
            "Colors: background {}, text {}",
            self.colors.background, self.colors.text
        )?;

        writeln!(f, "\nWhat to wear:")?;
        if self.clothing_items.is_empty() {
            writeln!(f, "  (no recommendation)")?;
        }
        for item in &self.clothing_items {
            match item.image {
                Some(image) => writeln!(f, "  - {} [{image}]", item.text)?,
                None => writeln!(f, "  - {}", item.text)?,
            }
        }

        if !self.weather_guides.is_empty() {
            writeln!(f, "\nGuides:")?;
            for guide in &self.weather_guides {
                writeln!(f, "  - {} ({})", guide.text, guide.icon)?;
            }
        }

        Ok(())
    }
}

pub fn band_line(temperature_c: f64, palette: &Palette) -> String {
    let colors = palette.colors_for(temperature_c);
    let band = TemperatureBand::of(temperature_c).map_or("Unbanded", |b| b.as_str());

    format!(
        "{band}: background {}, text {}",
        colors.background, colors.text
    )
}
