use crate::utils::error::{Result, TravelError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_source, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file.
///
/// ```toml
/// [source]
/// location = "${TRAVEL_DATA_URL}"
///
/// [page]
/// title = "TravelBloom"
/// fallback_image = "./Assets/LowerManhattanSkyline.jpg"
/// output_path = "./site"
/// hero = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: Option<String>,
    pub fallback_image: Option<String>,
    pub output_path: Option<String>,
    pub hero: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| TravelError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| TravelError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(location) = &self.source.location {
            validate_source("source.location", location)?;
        }
        if let Some(output_path) = &self.page.output_path {
            validate_path("page.output_path", output_path)?;
        }
        if let Some(fallback) = &self.page.fallback_image {
            validate_non_empty_string("page.fallback_image", fallback)?;
        }
        Ok(())
    }
}
