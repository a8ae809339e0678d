use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::insight::InsightResult;

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub address: String,
    /// Response-language hint passed to the provider, e.g. "ko".
    pub lang: String,
}

/// Current conditions for one location, as reported by the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub condition: Option<String>,
    pub observation_time: Option<DateTime<Utc>>,
}

/// A single headline from the news search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub original_link: String,
}

impl NewsItem {
    /// Title without the search highlight markup (`<b>`) and with common
    /// HTML entities decoded.
    pub fn plain_title(&self) -> String {
        let mut out = String::with_capacity(self.title.len());
        let mut in_tag = false;
        for ch in self.title.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => out.push(ch),
                _ => {}
            }
        }

        out.replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&apos;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }
}

/// What happened to the news part of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum NewsStatus {
    /// No news credentials; no search was attempted.
    Disabled,
    Fetched,
    /// The search failed; the news list is empty.
    Failed(String),
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct GuideReport {
    pub reading: WeatherReading,
    pub insight: InsightResult,
    pub news: Vec<NewsItem>,
    pub news_status: NewsStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: "https://n.news.naver.com/1".to_string(),
            original_link: "https://example.com/1".to_string(),
        }
    }

    #[test]
    fn plain_title_strips_highlight_tags() {
        let news = item("<b>서울</b> 폭염 <b>날씨</b> 경보");
        assert_eq!(news.plain_title(), "서울 폭염 날씨 경보");
    }

    #[test]
    fn plain_title_decodes_entities() {
        let news = item("&quot;Heat&quot; &amp; humidity &lt;today&gt;");
        assert_eq!(news.plain_title(), "\"Heat\" & humidity <today>");
    }

    #[test]
    fn news_status_serializes_with_reason() {
        let json = serde_json::to_value(NewsStatus::Failed("timeout".into())).unwrap();
        assert_eq!(json, serde_json::json!({"state": "failed", "reason": "timeout"}));

        let json = serde_json::to_value(NewsStatus::Disabled).unwrap();
        assert_eq!(json, serde_json::json!({"state": "disabled"}));
    }
}
