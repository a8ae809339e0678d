//! Comfort insights derived from temperature and humidity.
//!
//! Two threshold lookups: the discomfort index (temperature + humidity) picks a
//! level and a news keyword, and temperature alone picks an outfit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscomfortLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl DiscomfortLevel {
    /// Level for a discomfort index value. Bands are half-open, checked from
    /// the top; anything not at least 68 (including NaN) is `Low`.
    pub fn from_index(di: f64) -> Self {
        if di >= 80.0 {
            Self::VeryHigh
        } else if di >= 75.0 {
            Self::High
        } else if di >= 68.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Heatwave causes high discomfort",
            Self::High => "Hot with high humidity",
            Self::Moderate => "Mild, unremarkable weather",
            Self::Low => "Pleasant weather",
        }
    }

    pub fn keyword(&self) -> NewsKeyword {
        match self {
            Self::VeryHigh => NewsKeyword::Heatwave,
            Self::High => NewsKeyword::Sweltering,
            Self::Moderate => NewsKeyword::Weather,
            Self::Low => NewsKeyword::Clear,
        }
    }

    pub const fn all() -> &'static [DiscomfortLevel] {
        &[Self::VeryHigh, Self::High, Self::Moderate, Self::Low]
    }
}

impl std::fmt::Display for DiscomfortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Search term used to scope the local news query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewsKeyword {
    #[serde(rename = "폭염")]
    Heatwave,
    #[serde(rename = "무더위")]
    Sweltering,
    #[serde(rename = "날씨")]
    Weather,
    #[serde(rename = "쾌청")]
    Clear,
}

impl NewsKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heatwave => "폭염",
            Self::Sweltering => "무더위",
            Self::Weather => "날씨",
            Self::Clear => "쾌청",
        }
    }
}

impl std::fmt::Display for NewsKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingBand {
    Hot,
    Mild,
    Chilly,
    Cold,
}

impl ClothingBand {
    /// Band for a temperature in °C; same half-open, top-down rule as
    /// [`DiscomfortLevel::from_index`].
    pub fn from_temperature(temp_c: f64) -> Self {
        if temp_c >= 28.0 {
            Self::Hot
        } else if temp_c >= 20.0 {
            Self::Mild
        } else if temp_c >= 12.0 {
            Self::Chilly
        } else {
            Self::Cold
        }
    }

    pub fn comment(&self) -> &'static str {
        match self {
            Self::Hot => "Hot weather!",
            Self::Mild => "Great weather for activity",
            Self::Chilly => "Chilly weather",
            Self::Cold => "Cold weather",
        }
    }

    pub const fn all() -> &'static [ClothingBand] {
        &[Self::Hot, Self::Mild, Self::Chilly, Self::Cold]
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Hot => "sleeveless tops, shorts, linen",
            Self::Mild => "short sleeves, shirts, jeans",
            Self::Chilly => "jackets, cardigans",
            Self::Cold => "coats, padded jackets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightResult {
    pub discomfort_index: f64,
    pub level: DiscomfortLevel,
    pub description: String,
    pub clothing: ClothingBand,
    pub clothing_comment: String,
    pub clothing_recommendation: String,
    pub keyword: NewsKeyword,
}

/// Standard discomfort index (temperature-humidity index).
pub fn discomfort_index(temp_c: f64, humidity_pct: f64) -> f64 {
    0.81 * temp_c + 0.01 * humidity_pct * (0.99 * temp_c - 14.3) + 46.3
}

/// Classify a temperature/humidity pair. Any real values are accepted.
pub fn classify(temp_c: f64, humidity_pct: f64) -> InsightResult {
    let discomfort_index = discomfort_index(temp_c, humidity_pct);
    let level = DiscomfortLevel::from_index(discomfort_index);
    let clothing = ClothingBand::from_temperature(temp_c);

    InsightResult {
        discomfort_index,
        level,
        description: level.description().to_string(),
        clothing,
        clothing_comment: clothing.comment().to_string(),
        clothing_recommendation: clothing.recommendation().to_string(),
        keyword: level.keyword(),
    }
}
