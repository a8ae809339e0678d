use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const ENV_WEATHER_API_KEY: &str = "WEATHER_API_KEY";
pub const ENV_NAVER_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub const ENV_NAVER_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";

/// WeatherAPI.com settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    /// Response-language hint for location names and conditions.
    pub lang: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self { api_key: None, lang: "ko".to_string() }
    }
}

/// Naver news search credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NewsConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// request_timeout_secs = 10
///
/// [weather]
/// api_key = "..."
/// lang = "ko"
///
/// [news]
/// client_id = "..."
/// client_secret = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub request_timeout_secs: u64,
    pub weather: WeatherConfig,
    pub news: NewsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            weather: WeatherConfig::default(),
            news: NewsConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-guide", "weather-guide")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay credentials from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Overlay credentials from `lookup`; non-blank values win over the file.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).and_then(non_blank);

        if let Some(key) = get(ENV_WEATHER_API_KEY) {
            self.weather.api_key = Some(key);
        }
        if let Some(id) = get(ENV_NAVER_CLIENT_ID) {
            self.news.client_id = Some(id);
        }
        if let Some(secret) = get(ENV_NAVER_CLIENT_SECRET) {
            self.news.client_secret = Some(secret);
        }
        self
    }

    /// Returns the weather API key, if present and not blank.
    pub fn weather_api_key(&self) -> Option<&str> {
        self.weather.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    /// Both news credentials, or `None` if either is missing or blank.
    pub fn news_credentials(&self) -> Option<(&str, &str)> {
        let id = self.news.client_id.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        let secret = self.news.client_secret.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        Some((id, secret))
    }

    pub fn set_weather_api_key(&mut self, api_key: String) {
        self.weather.api_key = non_blank(api_key);
    }

    pub fn set_news_credentials(&mut self, client_id: String, client_secret: String) {
        self.news.client_id = non_blank(client_id);
        self.news.client_secret = non_blank(client_secret);
    }

    /// Apply an edit of the news credentials where `None` keeps the stored value.
    /// Fails, leaving the config untouched, if the result would have only one of
    /// the two values.
    pub fn update_news_credentials(
        &mut self,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<()> {
        let id = client_id.and_then(non_blank).or_else(|| self.news.client_id.clone());
        let secret =
            client_secret.and_then(non_blank).or_else(|| self.news.client_secret.clone());

        match (id, secret) {
            (Some(id), Some(secret)) => self.set_news_credentials(id, secret),
            (None, None) => {}
            _ => anyhow::bail!("Both Naver Client ID and Client Secret are required"),
        }
        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
