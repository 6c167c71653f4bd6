pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_source, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_SOURCE: &str = "data/travel_recommendation_api.json";
pub const DEFAULT_FALLBACK_IMAGE: &str = "./Assets/LowerManhattanSkyline.jpg";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_PAGE_TITLE: &str = "Travel Recommendations";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "travel-recs")]
#[command(about = "Search travel recommendations (cities, temples, beaches)")]
pub struct CliConfig {
    /// Dataset location: an http(s) URL or a local JSON file
    #[arg(long)]
    pub source: Option<String>,

    /// Run a single search and exit instead of starting a session
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory the HTML page is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Image shown when a result's image fails to load
    #[arg(long)]
    pub fallback_image: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// Effective settings after merging flags over the settings file over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub fallback_image: String,
    pub output_path: String,
    pub page_title: String,
    pub hero: bool,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            hero: true,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn from_file_config(file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            source: file.source.location.unwrap_or(defaults.source),
            fallback_image: file.page.fallback_image.unwrap_or(defaults.fallback_image),
            output_path: file.page.output_path.unwrap_or(defaults.output_path),
            page_title: file.page.title.unwrap_or(defaults.page_title),
            hero: file.page.hero.unwrap_or(defaults.hero),
            format: defaults.format,
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut settings = Self::from_file_config(file);
        if let Some(source) = &cli.source {
            settings.source = source.clone();
        }
        if let Some(output_path) = &cli.output_path {
            settings.output_path = output_path.clone();
        }
        if let Some(fallback) = &cli.fallback_image {
            settings.fallback_image = fallback.clone();
        }
        settings.format = cli.format;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_source("source", &self.source)?;
        validate_non_empty_string("fallback_image", &self.fallback_image)?;
        if self.format == OutputFormat::Html {
            validate_path("output_path", &self.output_path)?;
        }
        Ok(())
    }
}
