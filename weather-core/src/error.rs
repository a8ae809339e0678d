//! Error kinds for the external lookups and the guide orchestration.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching current conditions from the weather provider.
#[derive(Error, Debug)]
pub enum WeatherLookupError {
    #[error("No weather API key configured")]
    MissingCredentials,

    #[error("Weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WeatherLookupError {
    /// User-friendly error message for terminal display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials => {
                "A weather API key is required.\n\
                 Hint: run `weather-guide configure` or set WEATHER_API_KEY."
                    .to_string()
            }
            Self::Request(_) => {
                "Could not reach the weather service. Check your connection.".to_string()
            }
            Self::Status { status, .. } if matches!(status.as_u16(), 401 | 403) => {
                "The weather service rejected the API key.".to_string()
            }
            Self::Status { status, .. } if *status == StatusCode::BAD_REQUEST => {
                "The weather service did not recognise that location.".to_string()
            }
            Self::Status { status, .. } => format!("Weather service error ({status})."),
            Self::Parse(_) => "The weather service sent an unexpected response.".to_string(),
        }
    }
}

/// Failure while searching news. Distinct from a successful search with no hits.
#[derive(Error, Debug)]
pub enum NewsLookupError {
    #[error("News request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("News provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse news response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl NewsLookupError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => "News service unreachable".to_string(),
            Self::Status { status, .. } => format!("News service error ({status})"),
            Self::Parse(_) => "News service sent an unexpected response".to_string(),
        }
    }
}

/// Errors surfaced by [`crate::Guide::analyze`].
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("No city given")]
    MissingCity,

    #[error(transparent)]
    Weather(#[from] WeatherLookupError),

    #[error(transparent)]
    News(#[from] NewsLookupError),
}

impl GuideError {
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCity => "Please enter a city name.".to_string(),
            Self::Weather(err) => err.user_message(),
            Self::News(err) => err.user_message(),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_user_messages() {
        let err = WeatherLookupError::MissingCredentials;
        assert!(err.user_message().contains("WEATHER_API_KEY"));

        let err = WeatherLookupError::Status {
            status: StatusCode::BAD_REQUEST,
            body: String::new(),
        };
        assert!(err.user_message().contains("location"));

        let err = WeatherLookupError::Status {
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert!(err.user_message().contains("API key"));

        let err = WeatherLookupError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert!(err.user_message().contains("502"));
    }

    #[test]
    fn guide_error_wraps_weather_message() {
        let err = GuideError::from(WeatherLookupError::MissingCredentials);
        assert_eq!(err.user_message(), WeatherLookupError::MissingCredentials.user_message());
        assert!(GuideError::MissingCity.user_message().contains("city"));

        let err = GuideError::from(NewsLookupError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        });
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let short = "서울";
        assert_eq!(truncate_body(short), "서울");

        let long: String = std::iter::repeat('날').take(250).collect();
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
