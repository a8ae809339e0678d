//! Runs one analysis: weather lookup, classification, then local news.

use tracing::instrument;

use crate::{
    Config,
    error::{GuideError, WeatherLookupError},
    insight,
    model::{GuideReport, NewsStatus, WeatherRequest},
    news::{NaverNewsSource, NewsSource},
    provider::{WeatherSource, weather_source_from_config},
};

#[derive(Debug)]
pub struct Guide {
    weather: Box<dyn WeatherSource>,
    news: Box<dyn NewsSource>,
    lang: String,
}

impl Guide {
    pub fn new(weather: Box<dyn WeatherSource>, news: Box<dyn NewsSource>) -> Self {
        Self { weather, news, lang: "ko".to_string() }
    }

    /// Build both sources from config. Fails when the weather key is missing or an
    /// HTTP client cannot be built; missing news credentials just disable the news
    /// section.
    pub fn from_config(config: &Config) -> Result<Self, GuideError> {
        let weather = weather_source_from_config(config)?;
        let news = Box::new(NaverNewsSource::from_config(config)?);

        Ok(Self::new(weather, news).with_lang(&config.weather.lang))
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    #[instrument(skip(self), level = "info")]
    pub async fn analyze(&self, city: &str) -> Result<GuideReport, GuideError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(GuideError::MissingCity);
        }

        let request = WeatherRequest { address: city.to_string(), lang: self.lang.clone() };
        let reading = self.weather.current(&request).await?;
        tracing::info!(
            location = %reading.location_name,
            temp_c = reading.temperature_c,
            humidity = reading.humidity_pct,
            "Weather fetched"
        );

        let insight = insight::classify(reading.temperature_c, reading.humidity_pct);

        let (news, news_status) = if !self.news.is_enabled() {
            (Vec::new(), NewsStatus::Disabled)
        } else {
            // Localized name from the provider, not the raw user input.
            match self.news.search(&reading.location_name, insight.keyword).await {
                Ok(items) => (items, NewsStatus::Fetched),
                Err(err) => {
                    tracing::warn!(error = %err, "News lookup failed, showing no news");
                    (Vec::new(), NewsStatus::Failed(err.user_message()))
                }
            }
        };

        Ok(GuideReport { reading, insight, news, news_status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WeatherReading,
        error::NewsLookupError,
        insight::{DiscomfortLevel, NewsKeyword},
        model::NewsItem,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct Calls {
        weather: Vec<String>,
        news: Vec<(String, NewsKeyword)>,
    }

    #[derive(Debug)]
    struct FakeWeather {
        calls: Arc<Mutex<Calls>>,
        fail: bool,
    }

    #[async_trait]
    impl WeatherSource for FakeWeather {
        async fn current(
            &self,
            request: &WeatherRequest,
        ) -> Result<WeatherReading, WeatherLookupError> {
            self.calls.lock().unwrap().weather.push(request.address.clone());
            if self.fail {
                return Err(WeatherLookupError::Status {
                    status: reqwest::StatusCode::BAD_REQUEST,
                    body: "No matching location found.".into(),
                });
            }
            Ok(WeatherReading {
                location_name: "서울".into(),
                country: "대한민국".into(),
                temperature_c: 30.0,
                feels_like_c: 33.0,
                humidity_pct: 70.0,
                condition: None,
                observation_time: None,
            })
        }
    }

    #[derive(Debug)]
    enum NewsBehavior {
        Disabled,
        Items(usize),
        Fail,
    }

    #[derive(Debug)]
    struct FakeNews {
        calls: Arc<Mutex<Calls>>,
        behavior: NewsBehavior,
    }

    #[async_trait]
    impl NewsSource for FakeNews {
        fn is_enabled(&self) -> bool {
            !matches!(self.behavior, NewsBehavior::Disabled)
        }

        async fn search(
            &self,
            city: &str,
            keyword: NewsKeyword,
        ) -> Result<Vec<NewsItem>, NewsLookupError> {
            self.calls.lock().unwrap().news.push((city.to_string(), keyword));
            match self.behavior {
                NewsBehavior::Disabled => Ok(Vec::new()),
                NewsBehavior::Items(n) => Ok((0..n)
                    .map(|i| NewsItem {
                        title: format!("headline {i}"),
                        link: format!("https://n.news.naver.com/{i}"),
                        original_link: format!("https://news.example/{i}"),
                    })
                    .collect()),
                NewsBehavior::Fail => Err(NewsLookupError::Status {
                    status: reqwest::StatusCode::UNAUTHORIZED,
                    body: String::new(),
                }),
            }
        }
    }

    fn guide(weather_fails: bool, news: NewsBehavior) -> (Guide, Arc<Mutex<Calls>>) {
        let calls = Arc::new(Mutex::new(Calls::default()));
        let guide = Guide::new(
            Box::new(FakeWeather { calls: calls.clone(), fail: weather_fails }),
            Box::new(FakeNews { calls: calls.clone(), behavior: news }),
        );
        (guide, calls)
    }

    #[tokio::test]
    async fn blank_city_makes_no_calls() {
        let (guide, calls) = guide(false, NewsBehavior::Items(3));

        let err = guide.analyze("   ").await.unwrap_err();
        assert!(matches!(err, GuideError::MissingCity));

        let calls = calls.lock().unwrap();
        assert!(calls.weather.is_empty());
        assert!(calls.news.is_empty());
    }

    #[tokio::test]
    async fn news_uses_provider_location_and_classifier_keyword() {
        let (guide, calls) = guide(false, NewsBehavior::Items(5));

        let report = guide.analyze(" Seoul ").await.unwrap();
        assert_eq!(report.insight.level, DiscomfortLevel::VeryHigh);
        assert_eq!(report.news.len(), 5);
        assert_eq!(report.news[0].title, "headline 0");
        assert_eq!(report.news_status, NewsStatus::Fetched);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.weather, vec!["Seoul".to_string()]);
        assert_eq!(calls.news, vec![("서울".to_string(), NewsKeyword::Heatwave)]);
    }

    #[tokio::test]
    async fn disabled_news_is_not_queried() {
        let (guide, calls) = guide(false, NewsBehavior::Disabled);

        let report = guide.analyze("Seoul").await.unwrap();
        assert!(report.news.is_empty());
        assert_eq!(report.news_status, NewsStatus::Disabled);
        assert!(calls.lock().unwrap().news.is_empty());
    }

    #[tokio::test]
    async fn news_failure_degrades_to_empty_list() {
        let (guide, _calls) = guide(false, NewsBehavior::Fail);

        let report = guide.analyze("Seoul").await.unwrap();
        assert!(report.news.is_empty());
        assert!(matches!(
            report.news_status,
            NewsStatus::Failed(ref reason) if reason.contains("401")
        ));
    }

    #[tokio::test]
    async fn zero_news_items_is_a_successful_fetch() {
        let (guide, _calls) = guide(false, NewsBehavior::Items(0));

        let report = guide.analyze("Seoul").await.unwrap();
        assert!(report.news.is_empty());
        assert_eq!(report.news_status, NewsStatus::Fetched);
    }

    #[tokio::test]
    async fn weather_failure_skips_news() {
        let (guide, calls) = guide(true, NewsBehavior::Items(3));

        let err = guide.analyze("Nowhere").await.unwrap_err();
        assert!(matches!(err, GuideError::Weather(WeatherLookupError::Status { .. })));
        assert!(calls.lock().unwrap().news.is_empty());
    }

    #[test]
    fn from_config_requires_weather_key() {
        let cfg = Config::default();
        assert!(matches!(
            Guide::from_config(&cfg),
            Err(GuideError::Weather(WeatherLookupError::MissingCredentials))
        ));

        let mut cfg = Config::default();
        cfg.set_weather_api_key("KEY".into());
        assert!(Guide::from_config(&cfg).is_ok());
    }
}
