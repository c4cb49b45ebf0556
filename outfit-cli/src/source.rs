use anyhow::{Context, Result};
use async_trait::async_trait;
use outfit_core::WeatherObservation;
use std::{fmt::Debug, path::PathBuf};
use tokio::io::AsyncReadExt;

/// Where the observation handed to the engine comes from.
#[async_trait]
pub trait ObservationSource: Send + Sync + Debug {
    async fn observation(&self) -> Result<WeatherObservation>;
}

/// Observation assembled from command-line flags.
#[derive(Debug, Clone)]
pub struct FlagSource {
    observation: WeatherObservation,
}

impl FlagSource {
    pub fn new(observation: WeatherObservation) -> Self {
        Self { observation }
    }
}

#[async_trait]
impl ObservationSource for FlagSource {
    async fn observation(&self) -> Result<WeatherObservation> {
        Ok(self.observation.clone())
    }
}

/// JSON observation stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ObservationSource for FileSource {
    async fn observation(&self) -> Result<WeatherObservation> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read observation file: {}", self.path.display()))?;

        parse_observation(&body)
            .with_context(|| format!("Invalid observation in {}", self.path.display()))
    }
}

/// JSON observation piped on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait]
impl ObservationSource for StdinSource {
    async fn observation(&self) -> Result<WeatherObservation> {
        let mut body = String::new();
        tokio::io::stdin()
            .read_to_string(&mut body)
            .await
            .context("Failed to read observation from stdin")?;

        parse_observation(&body).context("Invalid observation on stdin")
    }
}

/// `-` selects stdin, anything else is a file path.
pub fn source_for_input(input: PathBuf) -> Box<dyn ObservationSource> {
    if input.as_os_str() == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(input))
    }
}

fn parse_observation(body: &str) -> Result<WeatherObservation> {
    serde_json::from_str(body)
        .with_context(|| format!("Failed to parse observation JSON: {}", truncate_body(body)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    let body = body.trim();
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
