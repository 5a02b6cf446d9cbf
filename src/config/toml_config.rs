use super::ClientConfig;
use crate::utils::error::{FitTrackError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "fittrack.toml";
pub const BASE_URL_ENV: &str = "FITTRACK_BASE_URL";

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FitTrackError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string. Missing keys keep defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let config: ClientConfig =
            toml::from_str(&processed_content).map_err(|e| FitTrackError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(config.normalized())
    }

    /// Environment and command-line base URLs, in that order of precedence
    /// (command line wins).
    pub fn with_overrides(mut self, env_base_url: Option<String>, cli_base_url: Option<String>) -> Self {
        if let Some(url) = cli_base_url.or(env_base_url) {
            tracing::debug!("Overriding base_url with {}", url);
            self.base_url = url;
        }
        self.normalized()
    }

    /// Startup loading: explicit file, else `fittrack.toml` if present, else
    /// defaults; then overrides; then validation.
    pub fn load(path: Option<&Path>, cli_base_url: Option<String>) -> Result<Self> {
        let base = match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::debug!("Loading config from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        let config = base.with_overrides(std::env::var(BASE_URL_ENV).ok(), cli_base_url);
        config.validate()?;
        Ok(config)
    }
}

/// Replace `${VAR}` with the environment value; unknown variables are kept
/// verbatim.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FitTrackError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
