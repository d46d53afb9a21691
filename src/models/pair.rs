use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ease assigned to every freshly created pair.
pub const DEFAULT_EASE: f64 = 2.4;

/// Lower bound for `Pair::ease`.
pub const MIN_EASE: f64 = 1.3;

/// A vocabulary flashcard with its spaced-repetition metadata.
///
/// Field names on disk follow the stored format (`english`, `zulu`,
/// `createdAt`, ...); `front` / `back` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub id: Uuid,
    #[serde(rename = "english", alias = "front")]
    pub front: String,
    #[serde(rename = "zulu", alias = "back")]
    pub back: String,
    /// Days until next review. `0` means the card was never reviewed.
    pub interval: f64,
    pub ease: f64,
    /// Unix timestamp (ms) after which the pair is due.
    pub due: i64,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<i64>,
}

impl Pair {
    /// Build a new pair with default scheduling fields, due immediately.
    pub fn new(front: impl Into<String>, back: impl Into<String>, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            front: front.into(),
            back: back.into(),
            interval: 0.0,
            ease: DEFAULT_EASE,
            due: now,
            created_at: now,
            last_reviewed: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.interval == 0.0
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.due <= now
    }

    /// Dedup key: both sides as stored.
    pub fn key(&self) -> (&str, &str) {
        (self.front.as_str(), self.back.as_str())
    }

    /// "New" or "Review", as shown above the card.
    pub fn tag(&self) -> &'static str {
        if self.is_new() { "New" } else { "Review" }
    }
}

/// A `{front, back}` candidate that has not been accepted into the store yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDraft {
    #[serde(rename = "english", alias = "front")]
    pub front: String,
    #[serde(rename = "zulu", alias = "back")]
    pub back: String,
}

impl PairDraft {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Trimmed copy, or `None` when either side is empty after trimming.
    pub fn sanitized(&self) -> Option<PairDraft> {
        let front = self.front.trim();
        let back = self.back.trim();
        if front.is_empty() || back.is_empty() {
            return None;
        }
        Some(PairDraft::new(front, back))
    }
}

/// Flat record for export: scheduling metadata stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairExport {
    pub english: String,
    pub zulu: String,
}

impl From<&Pair> for PairExport {
    fn from(p: &Pair) -> Self {
        Self {
            english: p.front.clone(),
            zulu: p.back.clone(),
        }
    }
}
