//! Core library for the `outfit` CLI.
//!
//! This crate defines:
//! - Temperature banding and the display palette built on it
//! - The clothing table and advisory rules
//! - Shared domain models (observations, recommendations)
//! - Configuration handling
//!
//! Everything except [`Config`] loading is pure: callers hand in an already-resolved
//! [`WeatherObservation`] and get fresh values back.

pub mod advisory;
pub mod band;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod outfit;
pub mod recommend;

pub use advisory::AdvisoryGenerator;
pub use band::{ColorTokens, Palette, TemperatureBand, TextToken};
pub use config::Config;
pub use error::ParseError;
pub use i18n::Locale;
pub use model::{
    ClothingItem, HumidityScale, WeatherClothingRecommendation, WeatherGuide, WeatherObservation,
};
pub use outfit::OutfitClassifier;
pub use recommend::Recommender;
