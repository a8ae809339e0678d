//! Plain-text rendering of reports for the terminal.

use std::fmt::Write;

use chrono::Local;
use weather_guide_core::{GuideReport, InsightResult, NewsItem, NewsStatus, WeatherReading};

pub fn report(report: &GuideReport) -> String {
    let mut out = String::new();

    out.push_str(&location(&report.reading));
    out.push('\n');
    out.push_str(&metrics(&report.reading));
    out.push_str("\n\n");
    out.push_str(&insight(&report.insight));
    out.push_str("\n\n");
    out.push_str(&news(&report.reading.location_name, &report.news, &report.news_status));

    out
}

fn location(reading: &WeatherReading) -> String {
    let mut line = format!("📍 {}, {}", reading.location_name, reading.country);
    if let Some(condition) = &reading.condition {
        let _ = write!(line, " · {condition}");
    }
    if let Some(at) = reading.observation_time {
        let _ = write!(line, " (as of {})", at.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
    }
    line
}

fn metrics(reading: &WeatherReading) -> String {
    format!(
        "Temperature  {}°C\nFeels like   {}°C\nHumidity     {}%",
        reading.temperature_c, reading.feels_like_c, reading.humidity_pct
    )
}

/// Discomfort panel and styling panel.
pub fn insight(insight: &InsightResult) -> String {
    format!(
        "📊 Discomfort index: {} ({:.1})\n   {}\n\n👕 {}\n   Recommended: {}",
        insight.level.label(),
        insight.discomfort_index,
        insight.description,
        insight.clothing_comment,
        insight.clothing_recommendation,
    )
}

fn news(city: &str, items: &[NewsItem], status: &NewsStatus) -> String {
    let mut out = format!("📰 {city} weather news\n");

    if items.is_empty() {
        let _ = write!(out, "No weather news for {city}.");
        match status {
            NewsStatus::Disabled => {
                out.push_str("\n(News search disabled: Naver credentials not configured.)")
            }
            NewsStatus::Failed(reason) => {
                let _ = write!(out, "\n({reason}.)");
            }
            NewsStatus::Fetched => {}
        }
        return out;
    }

    for (i, item) in items.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. {}\n   {}\n   {}",
            i + 1,
            item.plain_title(),
            item.link,
            item.original_link
        );
    }

    out
}
