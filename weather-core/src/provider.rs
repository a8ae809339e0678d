use crate::{
    Config, WeatherReading, WeatherRequest, error::WeatherLookupError,
    provider::weatherapi::WeatherApiSource,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod weatherapi;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, WeatherLookupError>;
}

/// Build an HTTP client with the configured request timeout.
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs)).build()
}

/// Construct the weather source from config.
pub fn weather_source_from_config(
    config: &Config,
) -> Result<Box<dyn WeatherSource>, WeatherLookupError> {
    let api_key = config.weather_api_key().ok_or(WeatherLookupError::MissingCredentials)?;
    let http = http_client(config.request_timeout_secs)?;

    Ok(Box::new(WeatherApiSource::with_client(api_key.to_owned(), http)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_source_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = weather_source_from_config(&cfg).unwrap_err();
        assert!(matches!(err, WeatherLookupError::MissingCredentials));
    }

    #[test]
    fn weather_source_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_weather_api_key("KEY".to_string());

        assert!(weather_source_from_config(&cfg).is_ok());
    }

    #[test]
    fn http_client_builds_with_timeout() {
        assert!(http_client(1).is_ok());
        assert!(http_client(Config::default().request_timeout_secs).is_ok());
    }
}
