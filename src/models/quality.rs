use crate::errors::{AppError, AppResult};

/// Recall quality on the SM-2 scale (0 = blackout … 5 = perfect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    /// "Again" button.
    pub const AGAIN: Quality = Quality(2);
    /// "Good" button.
    pub const GOOD: Quality = Quality(4);

    pub fn new(value: i64) -> AppResult<Self> {
        match value {
            0..=5 => Ok(Quality(value as u8)),
            _ => Err(AppError::InvalidQuality(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Ratings below 3 count as a failed recall.
    pub fn is_lapse(self) -> bool {
        self.0 < 3
    }

    /// Parse a rating typed at the review prompt: `a`/`again`, `g`/`good`
    /// or a digit 0-5.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" | "again" => Some(Self::AGAIN),
            "g" | "good" => Some(Self::GOOD),
            other => other.parse::<i64>().ok().and_then(|v| Self::new(v).ok()),
        }
    }
}
