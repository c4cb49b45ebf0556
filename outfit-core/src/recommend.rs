use crate::{
    advisory::AdvisoryGenerator,
    model::{WeatherClothingRecommendation, WeatherObservation},
    outfit::OutfitClassifier,
};

/// Single entry point combining the outfit table and the advisory rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender {
    classifier: OutfitClassifier,
    advisory: AdvisoryGenerator,
}

impl Recommender {
    pub fn new(advisory: AdvisoryGenerator) -> Self {
        Self {
            classifier: OutfitClassifier,
            advisory,
        }
    }

    pub fn recommend(&self, observation: &WeatherObservation) -> WeatherClothingRecommendation {
        tracing::debug!(
            condition = %observation.condition,
            temperature_c = observation.temperature_c,
            humidity_pct = observation.humidity_pct,
            "recommending outfit"
        );

        WeatherClothingRecommendation {
            clothing_items: self
                .classifier
                .classify(observation.temperature_c, observation.humidity_pct),
            weather_guides: self.advisory.advise(
                observation.precipitation_intensity,
                observation.temperature_c,
                observation.wind_speed,
                observation.uv_index,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        advisory::{GUIDE_SNOW, GUIDE_SUNSCREEN, GUIDE_WIND_INSULATION},
        band::{Palette, TemperatureBand},
        model::HumidityScale,
    };

    #[test]
    fn widget_placeholder_observation() {
        let obs = WeatherObservation::new(19.9, 20.0)
            .with_condition("Rainy", "cloud.rain.fill")
            .with_precipitation(1.0)
            .with_wind(21.0)
            .with_uv_index(5);

        let rec = Recommender::default().recommend(&obs);

        let names: Vec<_> = rec.clothing_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["clothing.thin_knit", "clothing.thin_cardigan", "clothing.long_pants"]);

        let guides: Vec<_> = rec.weather_guides.iter().map(|g| g.message.as_str()).collect();
        assert_eq!(guides, ["guide.rain", "guide.wind_jacket"]);

        assert_eq!(TemperatureBand::of(obs.temperature_c), Some(TemperatureBand::Mild));
    }

    #[test]
    fn freezing_storm_observation() {
        let obs = WeatherObservation::new(-5.0, 70.0)
            .with_precipitation(1.0)
            .with_wind(25.0)
            .with_uv_index(9);

        let rec = Recommender::default().recommend(&obs);

        assert_eq!(rec.clothing_items.len(), 7);
        assert_eq!(rec.clothing_items[0].name, "clothing.padded_coat");

        let guides: Vec<_> = rec.weather_guides.iter().map(|g| g.message.as_str()).collect();
        assert_eq!(guides, [GUIDE_SNOW, GUIDE_WIND_INSULATION, GUIDE_SUNSCREEN]);

        let band = TemperatureBand::of(obs.temperature_c).expect("banded");
        assert_eq!(band, TemperatureBand::ExtremeCold);
        assert_eq!(Palette::default().colors(band).background, "ExtremeCold");
    }

    #[test]
    fn uv_threshold_flows_through() {
        let obs = WeatherObservation::new(22.0, 40.0).with_uv_index(3);

        assert!(Recommender::default().recommend(&obs).weather_guides.is_empty());

        let rec = Recommender::new(AdvisoryGenerator::new(2)).recommend(&obs);
        assert_eq!(rec.weather_guides.len(), 1);
        assert_eq!(rec.weather_guides[0].message, GUIDE_SUNSCREEN);
    }

    #[test]
    fn fraction_and_percent_humidity_agree_after_normalizing() {
        let r = Recommender::default();

        let from_percent =
            WeatherObservation::new(14.0, 0.0).with_humidity(72.0, HumidityScale::Percent);
        let from_fraction =
            WeatherObservation::new(14.0, 0.0).with_humidity(0.72, HumidityScale::Fraction);
        assert_eq!(r.recommend(&from_percent), r.recommend(&from_fraction));

        // Left as a raw fraction, 0.72 would wrongly select the dry list.
        let raw = WeatherObservation::new(14.0, 0.72);
        assert_ne!(r.recommend(&raw), r.recommend(&from_percent));
    }

    #[test]
    fn recommend_is_pure() {
        let obs = WeatherObservation::new(8.0, 65.0).with_precipitation(0.3).with_uv_index(6);
        let r = Recommender::default();
        assert_eq!(r.recommend(&obs), r.recommend(&obs));
    }

    #[test]
    fn engine_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recommender>();
        assert_send_sync::<WeatherObservation>();
        assert_send_sync::<WeatherClothingRecommendation>();
        assert_send_sync::<Palette>();
    }
}
