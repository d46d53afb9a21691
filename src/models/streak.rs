use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Count of consecutive calendar days with at least one review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub last_review_date: Option<NaiveDate>,
}

impl Streak {
    /// "1 day" / "3 days"
    pub fn label(&self) -> String {
        crate::utils::formatting::plural(self.count as usize, "day", "days")
    }
}
