use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::{WeatherLookupError, truncate_body},
    model::{WeatherReading, WeatherRequest},
};

use super::WeatherSource;

const WEATHERAPI_BASE: &str = "http://api.weatherapi.com";

/// Current conditions from WeatherAPI.com.
#[derive(Clone)]
pub struct WeatherApiSource {
    api_key: String,
    http: Client,
    base_url: String,
}

impl std::fmt::Debug for WeatherApiSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiSource")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherApiSource {
    pub fn new(api_key: String) -> Self {
        Self::with_client(api_key, Client::new())
    }

    pub fn with_client(api_key: String, http: Client) -> Self {
        Self { api_key, http, base_url: WEATHERAPI_BASE.to_string() }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[instrument(skip(self, request), fields(address = %request.address), level = "debug")]
    async fn fetch_current(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, WeatherLookupError> {
        let url = format!("{}/v1/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.address.as_str()),
                ("lang", request.lang.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "WeatherAPI current request failed");
            return Err(WeatherLookupError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        let observation_time = parsed
            .current
            .last_updated_epoch
            .or(parsed.location.localtime_epoch)
            .and_then(unix_to_utc);

        Ok(WeatherReading {
            location_name: parsed.location.name,
            country: parsed.location.country,
            temperature_c: parsed.current.temp_c,
            feels_like_c: parsed.current.feelslike_c,
            humidity_pct: parsed.current.humidity,
            condition: parsed.current.condition.map(|c| c.text),
            observation_time,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: f64,
    condition: Option<WaCondition>,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherSource for WeatherApiSource {
    async fn current(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, WeatherLookupError> {
        self.fetch_current(request).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}
