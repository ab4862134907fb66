//! Star ratings. Stored ratings arrive as numbers or numeric strings depending
//! on which form created them, so reading is lenient: anything unparsable is
//! zero filled stars. Submitted ratings are strict integers in `1..=5`.

use crate::api::ApiError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub const MAX_STARS: u8 = 5;

/// Display-side rating; `0` means "no usable rating".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RatingValue(u8);

impl RatingValue {
    #[must_use]
    pub fn from_json(raw: &Value) -> Self {
        Self(coerce_stars(raw))
    }

    #[must_use]
    pub const fn filled(self) -> u8 {
        self.0
    }

    /// Renders filled and outline stars, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(MAX_STARS - self.0);
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl<'de> Deserialize<'de> for RatingValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

impl From<Rating> for RatingValue {
    fn from(rating: Rating) -> Self {
        Self(rating.0)
    }
}

/// Coerces a stored rating into `0..=5` filled stars.
#[must_use]
pub fn coerce_stars(raw: &Value) -> u8 {
    let parsed = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(value) if value.is_finite() && value > 0.0 => {
            // truncation is intended: 4.7 shows four filled stars
            value.trunc().min(f64::from(MAX_STARS)) as u8
        }
        _ => 0,
    }
}

/// A rating chosen on a submission form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// # Errors
    /// Returns `ApiError::Validation` outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, ApiError> {
        if (1..=MAX_STARS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ApiError::validation(format!(
                "Rating must be between 1 and {MAX_STARS}"
            )))
        }
    }

    /// Accepts form input such as `"4"` or `4`.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` unless the input is an integer in `1..=5`.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.trim()
            .parse::<u8>()
            .map_err(|_| ApiError::validation("Please select a rating"))
            .and_then(Self::new)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let value = match &raw {
            Value::Number(number) => number.as_u64().and_then(|n| u8::try_from(n).ok()),
            Value::String(text) => text.trim().parse::<u8>().ok(),
            _ => None,
        };
        value
            .ok_or_else(|| serde::de::Error::custom("rating must be an integer"))
            .and_then(|value| Self::new(value).map_err(serde::de::Error::custom))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
