//! Clothing recommendation keyed on temperature band and humidity.
//!
//! Colder bands layer more. Between the two extreme bands, humidity above
//! [`HUMIDITY_SPLIT_PCT`] swaps the band's list for its humid variant: breathable
//! fabric when warm, denser outerwear when cold.

use crate::{band::TemperatureBand, model::ClothingItem};

/// Humidity (percent) above which a humidity-sensitive band uses its humid list.
pub const HUMIDITY_SPLIT_PCT: f64 = 60.0;

/// Static form of a [`ClothingItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Garment {
    pub key: &'static str,
    pub image: Option<&'static str>,
}

impl Garment {
    const fn new(key: &'static str, image: &'static str) -> Self {
        Self { key, image: Some(image) }
    }

    pub fn to_item(self) -> ClothingItem {
        ClothingItem::new(self.key, self.image)
    }
}

const SLEEVELESS: Garment = Garment::new("clothing.sleeveless", "camisole");
const T_SHIRT: Garment = Garment::new("clothing.t_shirt", "t-shirt");
const SHORTS: Garment = Garment::new("clothing.shorts", "shorts");
const SHORT_SKIRT: Garment = Garment::new("clothing.short_skirt", "skirt");
const THIN_SHIRT: Garment = Garment::new("clothing.thin_shirt", "long-sleeved-shirt");
const THIN_LONG_SLEEVE: Garment = Garment::new("clothing.thin_long_sleeve", "pullover");
const CHINOS: Garment = Garment::new("clothing.chinos", "pants-mans");
const THIN_CARDIGAN: Garment = Garment::new("clothing.thin_cardigan", "cardigan");
const SHIRT: Garment = Garment::new("clothing.shirt", "pullover");
const BLOUSE: Garment = Garment::new("clothing.blouse", "blouse");
const LONG_SLEEVE: Garment = Garment::new("clothing.long_sleeve", "longsleeve");
const HOODIE: Garment = Garment::new("clothing.hoodie", "sweatshirt");
const JEANS: Garment = Garment::new("clothing.jeans", "pants-mans2");
const LIGHT_JACKET: Garment = Garment::new("clothing.light_jacket", "windbreaker");
const THIN_KNIT: Garment = Garment::new("clothing.thin_knit", "knit");
const LONG_PANTS: Garment = Garment::new("clothing.long_pants", "pants-mans2");
const CARDIGAN: Garment = Garment::new("clothing.cardigan", "cardigan");
const FLEECE_HOODIE: Garment = Garment::new("clothing.fleece_hoodie", "sweatshirt");
const JACKET: Garment = Garment::new("clothing.jacket", "anorak");
const FIELD_JACKET: Garment = Garment::new("clothing.field_jacket", "a-down-jacket");
const COTTON_PANTS: Garment = Garment::new("clothing.cotton_pants", "pants");
const KNIT: Garment = Garment::new("clothing.knit", "knit");
const JUMPER: Garment = Garment::new("clothing.jumper", "jacket");
const DENIM: Garment = Garment::new("clothing.jeans", "pants");
const TWEED_JACKET: Garment = Garment::new("clothing.jacket", "jacket");
const TRENCH_COAT: Garment = Garment::new("clothing.trench_coat", "duffle-coat");
const FLEECE_PANTS: Garment = Garment::new("clothing.fleece_pants", "pants");
const LEATHER_JACKET: Garment = Garment::new("clothing.leather_jacket", "jacket");
const FLEECE: Garment = Garment::new("clothing.fleece", "a-down-jacket2");
const WOOL_COAT: Garment = Garment::new("clothing.wool_coat", "duffle-coat");
const LEGGINGS: Garment = Garment::new("clothing.leggings", "leggings-womans");
const THICK_PANTS: Garment = Garment::new("clothing.thick_pants", "pants");
const SCARF: Garment = Garment::new("clothing.scarf", "scarf");
const THERMALS: Garment = Garment::new("clothing.thermal_underwear", "pants-mans3");
const PADDED_COAT: Garment = Garment::new("clothing.padded_coat", "a-down-jacket3");
const HEAVY_COAT: Garment = Garment::new("clothing.heavy_coat", "duffle-coat");
const MUFFLER: Garment = Garment::new("clothing.muffler", "scarf");
const GLOVES: Garment = Garment::new("clothing.gloves", "mittens");
const BEANIE: Garment = Garment::new("clothing.beanie", "beanie");
const THICK_SOCKS: Garment = Garment::new("clothing.thick_socks", "socks");

/// What a band recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layering {
    Fixed(&'static [Garment]),
    ByHumidity {
        humid: &'static [Garment],
        dry: &'static [Garment],
    },
}

impl Layering {
    pub fn for_band(band: TemperatureBand) -> Self {
        use TemperatureBand::*;

        match band {
            ExtremeHot => Layering::Fixed(&[SLEEVELESS, T_SHIRT, SHORTS, SHORT_SKIRT]),
            VeryHot => Layering::ByHumidity {
                humid: &[T_SHIRT, THIN_SHIRT, SHORTS],
                dry: &[THIN_LONG_SLEEVE, CHINOS],
            },
            Warm => Layering::ByHumidity {
                humid: &[THIN_CARDIGAN, SHIRT, BLOUSE],
                dry: &[LONG_SLEEVE, HOODIE, JEANS],
            },
            Mild => Layering::ByHumidity {
                humid: &[LIGHT_JACKET, HOODIE, JEANS],
                dry: &[THIN_KNIT, THIN_CARDIGAN, LONG_PANTS],
            },
            Cool => Layering::ByHumidity {
                humid: &[CARDIGAN, FLEECE_HOODIE, JEANS],
                dry: &[JACKET, FIELD_JACKET, COTTON_PANTS, KNIT],
            },
            Cold => Layering::ByHumidity {
                humid: &[FIELD_JACKET, JUMPER, DENIM],
                dry: &[TWEED_JACKET, TRENCH_COAT, FLEECE_PANTS, KNIT],
            },
            VeryCold => Layering::ByHumidity {
                humid: &[LEATHER_JACKET, DENIM, FLEECE],
                dry: &[WOOL_COAT, LEGGINGS, THICK_PANTS, SCARF, THERMALS, KNIT],
            },
            ExtremeCold => Layering::Fixed(&[
                PADDED_COAT,
                HEAVY_COAT,
                THERMALS,
                MUFFLER,
                GLOVES,
                BEANIE,
                THICK_SOCKS,
            ]),
        }
    }

    pub fn is_humidity_sensitive(&self) -> bool {
        matches!(self, Layering::ByHumidity { .. })
    }

    pub fn garments(&self, humidity_pct: f64) -> &'static [Garment] {
        match *self {
            Layering::Fixed(garments) => garments,
            Layering::ByHumidity { humid, dry } => {
                if humidity_pct > HUMIDITY_SPLIT_PCT {
                    humid
                } else {
                    dry
                }
            }
        }
    }
}

/// Maps temperature and humidity to an ordered clothing list.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutfitClassifier;

impl OutfitClassifier {
    /// Ordered clothing items for the observation. Empty only when the temperature is
    /// NaN. A NaN humidity never exceeds the split and so reads as dry.
    pub fn classify(&self, temperature_c: f64, humidity_pct: f64) -> Vec<ClothingItem> {
        let Some(band) = TemperatureBand::of(temperature_c) else {
            tracing::debug!(temperature_c, "temperature outside every band, no clothing");
            return Vec::new();
        };

        let layering = Layering::for_band(band);
        let garments = layering.garments(humidity_pct);

        tracing::trace!(
            %band,
            humidity_pct,
            humid = layering.is_humidity_sensitive() && humidity_pct > HUMIDITY_SPLIT_PCT,
            items = garments.len(),
            "classified outfit"
        );

        garments.iter().copied().map(Garment::to_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[ClothingItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn every_band_has_two_to_seven_items() {
        for band in TemperatureBand::ALL {
            let layering = Layering::for_band(band);
            for humidity in [0.0, 100.0] {
                let n = layering.garments(humidity).len();
                assert!((2..=7).contains(&n), "{band} humidity {humidity}: {n} items");
            }
        }
    }

    #[test]
    fn only_the_extreme_bands_ignore_humidity() {
        for band in TemperatureBand::ALL {
            let sensitive = Layering::for_band(band).is_humidity_sensitive();
            let extreme =
                matches!(band, TemperatureBand::ExtremeHot | TemperatureBand::ExtremeCold);
            assert_eq!(sensitive, !extreme, "{band}");
        }
    }

    #[test]
    fn non_empty_for_any_number() {
        let c = OutfitClassifier;
        let temperatures = [
            -273.15,
            -30.0,
            -0.0,
            4.999,
            5.0,
            16.5,
            27.999,
            28.0,
            45.0,
            1e9,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ];

        for t in temperatures {
            for h in [0.0, 60.0, 60.001, 100.0, -5.0, 250.0, f64::NAN] {
                assert!(!c.classify(t, h).is_empty(), "t={t} h={h}");
            }
        }
    }

    #[test]
    fn nan_temperature_yields_nothing() {
        assert!(OutfitClassifier.classify(f64::NAN, 50.0).is_empty());
    }

    #[test]
    fn humidity_split_is_strictly_above_sixty() {
        let c = OutfitClassifier;
        let sensitive_samples = [25.0, 21.0, 18.0, 14.0, 10.0, 6.0];

        for t in sensitive_samples {
            assert_ne!(c.classify(t, 61.0), c.classify(t, 60.0), "t={t}");
            assert_eq!(c.classify(t, 0.0), c.classify(t, 59.0), "t={t}");
            assert_eq!(c.classify(t, 60.0), c.classify(t, 59.0), "t={t}");
        }

        for t in [30.0, -5.0] {
            assert_eq!(c.classify(t, 61.0), c.classify(t, 60.0), "t={t}");
        }
    }

    #[test]
    fn breakpoint_selects_warmer_branch() {
        let c = OutfitClassifier;

        assert_eq!(keys(&c.classify(28.0, 80.0))[0], "clothing.sleeveless");
        assert_eq!(
            keys(&c.classify(27.999, 80.0)),
            ["clothing.t_shirt", "clothing.thin_shirt", "clothing.shorts"]
        );

        let expected = |band: TemperatureBand, h: f64| -> Vec<&'static str> {
            Layering::for_band(band).garments(h).iter().map(|g| g.key).collect()
        };

        let pairs = [
            (23.0, 22.999, TemperatureBand::VeryHot, TemperatureBand::Warm),
            (20.0, 19.999, TemperatureBand::Warm, TemperatureBand::Mild),
            (17.0, 16.999, TemperatureBand::Mild, TemperatureBand::Cool),
            (12.0, 11.999, TemperatureBand::Cool, TemperatureBand::Cold),
            (9.0, 8.999, TemperatureBand::Cold, TemperatureBand::VeryCold),
            (5.0, 4.999, TemperatureBand::VeryCold, TemperatureBand::ExtremeCold),
        ];
        for (at, below, upper, lower) in pairs {
            for h in [30.0, 90.0] {
                assert_eq!(keys(&c.classify(at, h)), expected(upper, h), "at {at}");
                assert_eq!(keys(&c.classify(below, h)), expected(lower, h), "below {at}");
            }
        }
    }

    #[test]
    fn mild_dry_scenario() {
        let items = OutfitClassifier.classify(19.9, 20.0);
        assert_eq!(
            keys(&items),
            ["clothing.thin_knit", "clothing.thin_cardigan", "clothing.long_pants"]
        );
        assert_eq!(items[0].image.as_deref(), Some("knit"));
    }

    #[test]
    fn extreme_cold_layers_the_most() {
        let items = OutfitClassifier.classify(-5.0, 70.0);
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].name, "clothing.padded_coat");
        assert_eq!(items[6].name, "clothing.thick_socks");
    }

    #[test]
    fn fraction_humidity_must_be_normalized_first() {
        use crate::model::HumidityScale;

        let c = OutfitClassifier;
        let raw = 0.85;

        // An unnormalized fraction always reads as dry.
        assert_eq!(c.classify(18.0, raw), c.classify(18.0, 10.0));
        assert_eq!(
            c.classify(18.0, HumidityScale::Fraction.to_percent(raw)),
            c.classify(18.0, 85.0)
        );
    }

    #[test]
    fn classify_is_pure() {
        let c = OutfitClassifier;
        assert_eq!(c.classify(14.2, 66.0), c.classify(14.2, 66.0));
    }
}
