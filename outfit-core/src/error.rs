use thiserror::Error;

/// Failure to parse one of the textual options accepted at the edges of the engine
/// (command-line flags, config values).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown humidity scale '{0}'. Supported scales: percent, fraction.")]
    HumidityScale(String),

    #[error("Unknown locale '{0}'. Supported locales: en, ko.")]
    Locale(String),

    #[error("Unknown text color '{0}'. Supported colors: white, black.")]
    TextToken(String),
}
