//! Simplified SM-2 scheduling.
//!
//! A rating below 3 sends the card back for a same-day retry (half a day).
//! A first successful recall, or a success after such a retry, schedules the
//! card one day out; later successes multiply the interval by the ease.
//! The ease itself moves by the classic SM-2 delta and never drops below
//! [`MIN_EASE`].

use crate::models::pair::{MIN_EASE, Pair};
use crate::models::quality::Quality;
use crate::utils::date::DAY_MS;

/// Interval (days) assigned after a lapse.
const LAPSE_INTERVAL: f64 = 0.5;

/// Longest interval (days) a card can be pushed out to.
pub const MAX_INTERVAL: f64 = 36_500.0;

/// Result of scheduling one review.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewOutcome {
    pub interval: f64,
    pub ease: f64,
    pub due: i64,
}

/// Compute the next interval, ease and due timestamp for `pair` without
/// touching it.
pub fn next_review(pair: &Pair, quality: Quality, now: i64) -> ReviewOutcome {
    let interval = next_interval(pair.interval, pair.ease, quality).min(MAX_INTERVAL);
    let ease = next_ease(pair.ease, quality);
    let due = now.saturating_add((interval * DAY_MS as f64).round() as i64);

    ReviewOutcome {
        interval,
        ease,
        due,
    }
}

/// Apply a review to `pair` in place and return what was written.
pub fn review(pair: &mut Pair, quality: Quality, now: i64) -> ReviewOutcome {
    let outcome = next_review(pair, quality, now);
    pair.interval = outcome.interval;
    pair.ease = outcome.ease;
    pair.due = outcome.due;
    pair.last_reviewed = Some(now);
    outcome
}

/// Outcomes for the two rating buttons, `(again, good)`.
pub fn preview(pair: &Pair, now: i64) -> (ReviewOutcome, ReviewOutcome) {
    (
        next_review(pair, Quality::AGAIN, now),
        next_review(pair, Quality::GOOD, now),
    )
}

#[allow(clippy::if_same_then_else)]
fn next_interval(interval: f64, ease: f64, quality: Quality) -> f64 {
    if quality.is_lapse() {
        LAPSE_INTERVAL
    } else if interval == 0.0 {
        1.0
    } else if interval < 1.0 {
        1.0
    } else {
        (interval * ease).round()
    }
}

fn next_ease(ease: f64, quality: Quality) -> f64 {
    let miss = 5.0 - quality.value() as f64;
    let delta = 0.1 - miss * (0.08 + miss * 0.02);
    (ease + delta).max(MIN_EASE)
}
