//! Core library for the `weather-guide` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Comfort insights (discomfort index, outfit advice, news keyword)
//! - Abstractions over the weather and news providers
//! - The [`Guide`] that runs one analysis end to end
//!
//! It is used by `weather-guide`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod guide;
pub mod insight;
pub mod model;
pub mod news;
pub mod provider;

pub use config::{Config, NewsConfig, WeatherConfig};
pub use error::{GuideError, NewsLookupError, WeatherLookupError};
pub use guide::Guide;
pub use insight::{ClothingBand, DiscomfortLevel, InsightResult, NewsKeyword, classify};
pub use model::{GuideReport, NewsItem, NewsStatus, WeatherReading, WeatherRequest};
pub use news::{NaverNewsSource, NewsSource};
pub use provider::{WeatherSource, weatherapi::WeatherApiSource};
