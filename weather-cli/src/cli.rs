use std::io::IsTerminal;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use weather_guide_core::{Config, Guide, classify};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-guide",
    version,
    about = "Weather, comfort index and local news for a city"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter and save API credentials interactively.
    Configure,

    /// Analyze current weather and show local weather news for a city.
    Show {
        /// City name, e.g. "Seoul", "Asan", "Busan".
        city: String,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Response language for location names and conditions.
        #[arg(long)]
        lang: Option<String>,
    },

    /// Classify a temperature/humidity pair without any network access.
    Insight {
        /// Temperature in °C.
        #[arg(long, allow_hyphen_values = true)]
        temp: f64,

        /// Relative humidity in %.
        #[arg(long)]
        humidity: f64,

        #[arg(long)]
        json: bool,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json, lang } => show(&city, json, lang).await,
            Command::Insight { temp, humidity, json } => {
                let insight = classify(temp, humidity);
                if json {
                    println!("{}", serde_json::to_string_pretty(&insight)?);
                } else {
                    println!("{}", render::insight(&insight));
                }
                Ok(())
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    println!("Leave a field empty to keep the current value.");

    let has_weather = config.weather_api_key().is_some();
    if let Some(key) = prompt_secret("WeatherAPI.com API key", has_weather)? {
        config.set_weather_api_key(key);
    }

    let has_news = config.news_credentials().is_some();
    let id = prompt_secret("Naver Client ID", has_news)?;
    let secret = prompt_secret("Naver Client Secret", has_news)?;
    config.update_news_credentials(id, secret)?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str, json: bool, lang: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?.with_env_overrides();
    if let Some(lang) = lang {
        config.weather.lang = lang;
    }

    if city.trim().is_empty() {
        anyhow::bail!("Please enter a city name.");
    }

    fill_missing_credentials(&mut config)?;
    tracing::debug!(
        lang = %config.weather.lang,
        news_enabled = config.news_credentials().is_some(),
        "Configuration resolved"
    );

    let guide =
        Guide::from_config(&config).map_err(|err| anyhow::anyhow!(err.user_message()))?;
    let report =
        guide.analyze(city).await.map_err(|err| anyhow::anyhow!(err.user_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render::report(&report));
    }

    Ok(())
}

/// Ask for credentials that neither the config file nor the environment supplied.
/// Only prompts when attached to a terminal.
fn fill_missing_credentials(config: &mut Config) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    if config.weather_api_key().is_none() {
        if let Some(key) = prompt_secret("Weather API Key", false)? {
            config.set_weather_api_key(key);
        }
    }

    if config.news_credentials().is_none() {
        let id = match config.news.client_id.clone() {
            Some(id) if !id.trim().is_empty() => Some(id),
            _ => prompt_secret("Naver Client ID (empty to skip news)", false)?,
        };
        if let Some(id) = id {
            let secret = match config.news.client_secret.clone() {
                Some(s) if !s.trim().is_empty() => Some(s),
                _ => prompt_secret("Naver Client Secret", false)?,
            };
            if let Some(secret) = secret {
                config.set_news_credentials(id, secret);
            }
        }
    }

    Ok(())
}

fn prompt_secret(label: &str, already_set: bool) -> anyhow::Result<Option<String>> {
    let help = if already_set { "currently set" } else { "not set" };

    let value = Password::new(label)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(help)
        .prompt()
        .with_context(|| format!("Failed to read {label}"))?;

    let value = value.trim();
    Ok(if value.is_empty() { None } else { Some(value.to_string()) })
}
