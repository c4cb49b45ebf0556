use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use inquire::{CustomType, Select};
use outfit_core::{
    AdvisoryGenerator, Config, HumidityScale, Locale, Recommender, TextToken, WeatherObservation,
};
use std::path::PathBuf;

use crate::{
    render::{Report, band_line},
    source::{FlagSource, ObservationSource, source_for_input},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "outfit", version, about = "What to wear for the weather")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend clothing and guides for one observation.
    Recommend(RecommendArgs),

    /// Show the temperature band and its colors.
    Band {
        /// Temperature in °C.
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
    },

    /// Interactively edit the configuration file.
    Configure,

    /// Print where the configuration file lives.
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// JSON observation file, or `-` for stdin. The file supplies every observed value.
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "temp", "humidity", "humidity_scale", "precip", "wind", "uv",
            "condition", "symbol", "at",
        ]
    )]
    pub input: Option<PathBuf>,

    /// Temperature in °C.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub temp: Option<f64>,

    /// Relative humidity, on the scale given by --humidity-scale.
    #[arg(long, required_unless_present = "input")]
    pub humidity: Option<f64>,

    /// Precipitation intensity; anything above zero means it is raining or snowing.
    #[arg(long, default_value_t = 0.0)]
    pub precip: f64,

    #[arg(long, default_value_t = 0.0)]
    pub wind: f64,

    #[arg(long, default_value_t = 0)]
    pub uv: i32,

    #[arg(long, default_value = "")]
    pub condition: String,

    /// Display symbol passed through untouched.
    #[arg(long, default_value = "")]
    pub symbol: String,

    /// Observation time (RFC 3339); defaults to now for flag input.
    #[arg(long)]
    pub at: Option<String>,

    /// Scale of --humidity: percent or fraction. JSON input is always percent.
    #[arg(long)]
    pub humidity_scale: Option<HumidityScale>,

    #[arg(long)]
    pub locale: Option<Locale>,

    /// Override the configured UV threshold.
    #[arg(long)]
    pub uv_threshold: Option<i32>,

    /// Show at most this many guides.
    #[arg(long)]
    pub max_guides: Option<usize>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl RecommendArgs {
    /// `default_scale` applies to `--humidity` when `--humidity-scale` is absent.
    fn source(&self, default_scale: HumidityScale) -> Result<Box<dyn ObservationSource>> {
        if let Some(input) = &self.input {
            return Ok(source_for_input(input.clone()));
        }

        // clap enforces both when --input is absent.
        let temp = self.temp.context("--temp is required without --input")?;
        let humidity = self.humidity.context("--humidity is required without --input")?;

        let observed_at = match &self.at {
            Some(at) => parse_timestamp(at)?,
            None => Utc::now(),
        };

        let scale = self.humidity_scale.unwrap_or(default_scale);

        let observation = WeatherObservation::new(temp, 0.0)
            .with_humidity(humidity, scale)
            .with_precipitation(self.precip)
            .with_wind(self.wind)
            .with_uv_index(self.uv)
            .with_condition(self.condition.clone(), self.symbol.clone())
            .with_observed_at(observed_at);

        Ok(Box::new(FlagSource::new(observation)))
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid --at timestamp '{s}', expected RFC 3339"))
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Recommend(args) => {
                let config = Config::load()?;
                recommend(&config, &args).await?;
            }
            Command::Band { temperature } => {
                let config = Config::load()?;
                println!("{}", band_line(temperature, &config.palette()));
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

async fn recommend(config: &Config, args: &RecommendArgs) -> Result<()> {
    let observation = args
        .source(config.display.humidity_scale)?
        .observation()
        .await?;

    let recommender = match args.uv_threshold {
        Some(threshold) => Recommender::new(AdvisoryGenerator::new(threshold)),
        None => config.recommender(),
    };

    let recommendation = recommender.recommend(&observation);
    tracing::debug!(
        items = recommendation.clothing_items.len(),
        guides = recommendation.weather_guides.len(),
        "recommendation ready"
    );

    let report = Report::new(
        &observation,
        &recommendation,
        &config.palette(),
        args.locale.unwrap_or(config.display.locale),
        args.max_guides.or(config.display.max_guides),
    );

    if args.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        print!("{report}");
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    config.advisory.uv_threshold =
        CustomType::<i32>::new("Suggest sunscreen when the UV index is above:")
            .with_default(config.advisory.uv_threshold)
            .with_help_message("5 is the usual choice; 2 for sensitive skin")
            .prompt()
            .context("UV threshold prompt failed")?;

    let colors = vec![TextToken::Black, TextToken::White];
    let start = colors
        .iter()
        .position(|c| *c == config.palette.cool_text)
        .unwrap_or(0);
    config.palette.cool_text = Select::new("Text color on the Cool (12–17°C) band:", colors)
        .with_starting_cursor(start)
        .prompt()
        .context("Palette prompt failed")?;

    let locales = Locale::all().to_vec();
    let start = locales
        .iter()
        .position(|l| *l == config.display.locale)
        .unwrap_or(0);
    config.display.locale = Select::new("Display language:", locales)
        .with_starting_cursor(start)
        .prompt()
        .context("Locale prompt failed")?;

    let scales = vec![HumidityScale::Percent, HumidityScale::Fraction];
    let start = scales
        .iter()
        .position(|s| *s == config.display.humidity_scale)
        .unwrap_or(0);
    config.display.humidity_scale = Select::new("Humidity is given as:", scales)
        .with_starting_cursor(start)
        .prompt()
        .context("Humidity scale prompt failed")?;

    let max_guides = CustomType::<usize>::new("Show at most this many guides (0 = all):")
        .with_default(config.display.max_guides.unwrap_or(0))
        .prompt()
        .context("Guide limit prompt failed")?;
    config.display.max_guides = (max_guides > 0).then_some(max_guides);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
