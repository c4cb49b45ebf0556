//! Display text for clothing and guide keys.
//!
//! A flat key lookup; hosts with their own localization machinery can ignore this and
//! resolve the keys themselves.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ko]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ko" | "korean" => Ok(Locale::Ko),
            _ => Err(ParseError::Locale(s.to_string())),
        }
    }
}

// (key, en, ko)
const CATALOG: &[(&str, &str, &str)] = &[
    ("clothing.sleeveless", "Sleeveless top", "민소매"),
    ("clothing.t_shirt", "T-shirt", "반팔 티셔츠"),
    ("clothing.shorts", "Shorts", "반바지"),
    ("clothing.short_skirt", "Short skirt", "짧은 치마"),
    ("clothing.thin_shirt", "Thin shirt", "얇은 셔츠"),
    ("clothing.thin_long_sleeve", "Thin long-sleeve tee", "얇은 긴팔 티셔츠"),
    ("clothing.chinos", "Chinos", "면바지"),
    ("clothing.thin_cardigan", "Thin cardigan", "얇은 가디건"),
    ("clothing.shirt", "Shirt", "셔츠"),
    ("clothing.blouse", "Blouse", "블라우스"),
    ("clothing.long_sleeve", "Long-sleeve tee", "긴팔 티셔츠"),
    ("clothing.hoodie", "Hoodie", "후드티"),
    ("clothing.jeans", "Jeans", "청바지"),
    ("clothing.light_jacket", "Light jacket", "얇은 재킷"),
    ("clothing.thin_knit", "Thin knit", "얇은 니트"),
    ("clothing.long_pants", "Long pants", "긴바지"),
    ("clothing.cardigan", "Cardigan", "가디건"),
    ("clothing.fleece_hoodie", "Fleece-lined hoodie", "기모 후드티"),
    ("clothing.jacket", "Jacket", "재킷"),
    ("clothing.field_jacket", "Field jacket", "야상"),
    ("clothing.cotton_pants", "Cotton pants", "면바지"),
    ("clothing.knit", "Knit sweater", "니트"),
    ("clothing.jumper", "Jumper", "점퍼"),
    ("clothing.trench_coat", "Trench coat", "트렌치 코트"),
    ("clothing.fleece_pants", "Fleece-lined pants", "기모 바지"),
    ("clothing.leather_jacket", "Leather jacket", "가죽 재킷"),
    ("clothing.fleece", "Fleece", "플리스"),
    ("clothing.wool_coat", "Wool coat", "울 코트"),
    ("clothing.leggings", "Leggings", "레깅스"),
    ("clothing.thick_pants", "Thick pants", "두꺼운 바지"),
    ("clothing.scarf", "Scarf", "스카프"),
    ("clothing.thermal_underwear", "Thermal underwear", "내복"),
    ("clothing.padded_coat", "Padded coat", "패딩"),
    ("clothing.heavy_coat", "Heavy coat", "두꺼운 코트"),
    ("clothing.muffler", "Muffler", "목도리"),
    ("clothing.gloves", "Gloves", "장갑"),
    ("clothing.beanie", "Beanie", "비니"),
    ("clothing.thick_socks", "Thick socks", "두꺼운 양말"),
    (
        "guide.snow",
        "Snow is likely, take an umbrella!",
        "눈이 내릴 수 있으니 우산을 꼭 챙기세요!",
    ),
    (
        "guide.rain",
        "Rain is likely, take an umbrella!",
        "비가 내릴 수 있으니 우산을 꼭 챙기세요!",
    ),
    (
        "guide.wind_insulation",
        "It's very windy! Bring a padded coat.",
        "바람이 많이 불어요! 패딩을 챙기세요.",
    ),
    (
        "guide.wind_jacket",
        "It's very windy! Bring a jacket.",
        "바람이 많이 불어요! 재킷을 챙기세요.",
    ),
    (
        "guide.sunscreen",
        "The UV index is high. Put on sunscreen.",
        "자외선 지수가 높아요. 선크림을 바르세요.",
    ),
];

/// Display text for `key`, or the key itself when the catalog has no entry.
pub fn text(key: &str, locale: Locale) -> &str {
    CATALOG
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, en, ko)| match locale {
            Locale::En => en,
            Locale::Ko => ko,
        })
        .unwrap_or(key)
}
