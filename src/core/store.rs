//! In-memory pair list mirrored to a key-value backend.
//!
//! Two keys are used: one holds the JSON array of pairs, the other the
//! streak record. Every mutation is flushed before the method returns.

use crate::core::import;
use crate::core::scheduler::{self, MAX_INTERVAL, ReviewOutcome};
use crate::core::streak;
use crate::errors::{AppError, AppResult};
use crate::models::pair::{DEFAULT_EASE, MIN_EASE, Pair, PairDraft, PairExport};
use crate::models::quality::Quality;
use crate::models::streak::Streak;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

pub const PAIRS_KEY: &str = "zulu-bloom-pairs";
pub const STREAK_KEY: &str = "zulu-bloom-streak";

/// Persistent string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Volatile backend, handy for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored pair as found on disk; older records may lack scheduling fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPair {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "front")]
    english: String,
    #[serde(alias = "back")]
    zulu: String,
    #[serde(default)]
    interval: Option<f64>,
    #[serde(default)]
    ease: Option<f64>,
    #[serde(default)]
    due: Option<i64>,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    last_reviewed: Option<i64>,
}

impl StoredPair {
    /// `None` when either side is blank.
    fn into_pair(self, now: i64) -> Option<Pair> {
        if self.english.trim().is_empty() || self.zulu.trim().is_empty() {
            return None;
        }

        let id = self
            .id
            .and_then(|s| Uuid::parse_str(&s).ok())
            .unwrap_or_else(Uuid::new_v4);

        let interval = self.interval.filter(|i| i.is_finite()).unwrap_or(0.0);
        let ease = self.ease.filter(|e| e.is_finite()).unwrap_or(DEFAULT_EASE);

        Some(Pair {
            id,
            front: self.english,
            back: self.zulu,
            interval: interval.clamp(0.0, MAX_INTERVAL),
            ease: ease.max(MIN_EASE),
            due: self.due.unwrap_or(now),
            created_at: self.created_at.unwrap_or(now),
            last_reviewed: self.last_reviewed,
        })
    }
}

pub struct PairStore<S: KeyValueStore> {
    kv: S,
    pairs: Vec<Pair>,
    streak: Streak,
}

impl<S: KeyValueStore> PairStore<S> {
    /// Load persisted state, merge the seed pairs that are not present yet
    /// (appended after the stored ones) and flush the result.
    pub fn open(kv: S, seed: &[PairDraft], now: i64) -> AppResult<Self> {
        let mut pairs = load_pairs(&kv, now)?;
        let streak = load_streak(&kv)?;

        let (seeded, _) = import::add_batch(&pairs, seed, now);
        pairs.extend(seeded);

        let mut store = Self { kv, pairs, streak };
        store.persist_pairs()?;
        Ok(store)
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn get(&self, id: Uuid) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    pub fn streak(&self) -> Streak {
        self.streak
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Add the acceptable candidates in front of the existing pairs.
    /// Returns how many were actually added.
    pub fn add_batch(&mut self, candidates: &[PairDraft], now: i64) -> AppResult<usize> {
        let (accepted, count) = import::add_batch(&self.pairs, candidates, now);
        if count == 0 {
            return Ok(0);
        }

        self.pairs.splice(0..0, accepted);
        self.persist_pairs()?;
        Ok(count)
    }

    /// Single manual add; `false` when the pair was empty or already known.
    pub fn add_pair(&mut self, front: &str, back: &str, now: i64) -> AppResult<bool> {
        let added = self.add_batch(&[PairDraft::new(front, back)], now)?;
        Ok(added == 1)
    }

    /// Run the scheduler on one pair and persist the update.
    pub fn review(&mut self, id: Uuid, quality: Quality, now: i64) -> AppResult<ReviewOutcome> {
        let pair = self
            .pairs
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::UnknownPair(id.to_string()))?;

        let outcome = scheduler::review(pair, quality, now);
        self.persist_pairs()?;
        Ok(outcome)
    }

    /// Record a review day; only the first one of a day changes the streak.
    pub fn touch_streak(&mut self, today: NaiveDate) -> AppResult<Streak> {
        let updated = streak::touch(&self.streak, today);
        if updated != self.streak {
            self.streak = updated;
            let json = serde_json::to_string(&self.streak)?;
            self.kv.set(STREAK_KEY, &json)?;
        }
        Ok(self.streak)
    }

    /// Front/back of every pair, store order, metadata stripped.
    pub fn export(&self) -> Vec<PairExport> {
        self.pairs.iter().map(PairExport::from).collect()
    }

    fn persist_pairs(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.pairs)?;
        self.kv.set(PAIRS_KEY, &json)
    }
}

/// Missing key → empty list. Unparsable document → empty list with a
/// warning. Individual malformed records are dropped.
fn load_pairs<S: KeyValueStore>(kv: &S, now: i64) -> AppResult<Vec<Pair>> {
    let Some(raw) = kv.get(PAIRS_KEY)? else {
        return Ok(Vec::new());
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warning(format!("Stored pairs are unreadable ({e}); starting empty."));
            return Ok(Vec::new());
        }
    };

    let total = values.len();
    let pairs: Vec<Pair> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<StoredPair>(v).ok())
        .filter_map(|sp| sp.into_pair(now))
        .collect();

    if pairs.len() < total {
        warning(format!(
            "Skipped {} malformed stored pair(s).",
            total - pairs.len()
        ));
    }

    Ok(pairs)
}

fn load_streak<S: KeyValueStore>(kv: &S) -> AppResult<Streak> {
    let Some(raw) = kv.get(STREAK_KEY)? else {
        return Ok(Streak::default());
    };

    match serde_json::from_str(&raw) {
        Ok(s) => Ok(s),
        Err(e) => {
            warning(format!("Stored streak is unreadable ({e}); resetting."));
            Ok(Streak::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DAY_MS;

    fn open_empty() -> PairStore<MemoryKv> {
        PairStore::open(MemoryKv::new(), &[], 0).unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn malformed_document_loads_empty() {
        let kv = MemoryKv::new()
            .with(PAIRS_KEY, "{not json")
            .with(STREAK_KEY, "not json");
        let store = PairStore::open(kv, &[], 0).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.streak(), Streak::default());
    }

    #[test]
    fn legacy_records_get_default_scheduling() {
        let raw = r#"[
            {"id":"not-a-uuid","english":"hello","zulu":"sawubona"},
            {"english":"bye","zulu":"hamba kahle","interval":3,"ease":0.4,"due":77},
            {"english":42}
        ]"#;
        let store = PairStore::open(MemoryKv::new().with(PAIRS_KEY, raw), &[], 1_000).unwrap();

        assert_eq!(store.len(), 2);
        let hello = &store.pairs()[0];
        assert_eq!(hello.interval, 0.0);
        assert_eq!(hello.ease, DEFAULT_EASE);
        assert_eq!(hello.due, 1_000);

        let bye = &store.pairs()[1];
        assert_eq!(bye.interval, 3.0);
        assert_eq!(bye.ease, MIN_EASE);
        assert_eq!(bye.due, 77);
    }

    #[test]
    fn seed_merges_without_duplicates_and_persists() {
        let existing = serde_json::to_string(&vec![Pair::new("water", "amanzi", 0)]).unwrap();
        let kv = MemoryKv::new().with(PAIRS_KEY, &existing);
        let seed = vec![
            PairDraft::new("water", "amanzi"),
            PairDraft::new("fire", "umlilo"),
        ];
        let store = PairStore::open(kv, &seed, 5).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.pairs()[1].front, "fire");

        let persisted = store.backend().get(PAIRS_KEY).unwrap().unwrap();
        let reloaded = PairStore::open(MemoryKv::new().with(PAIRS_KEY, &persisted), &[], 9).unwrap();
        assert_eq!(reloaded.pairs(), store.pairs());
    }

    #[test]
    fn add_batch_prepends_and_reports_count() {
        let mut store = open_empty();
        store.add_pair("one", "kunye", 0).unwrap();
        let n = store
            .add_batch(
                &[
                    PairDraft::new("two", "kubili"),
                    PairDraft::new("one", "kunye"),
                    PairDraft::new("three", "kuthathu"),
                ],
                1,
            )
            .unwrap();

        assert_eq!(n, 2);
        let fronts: Vec<&str> = store.pairs().iter().map(|p| p.front.as_str()).collect();
        assert_eq!(fronts, vec!["two", "three", "one"]);
    }

    #[test]
    fn add_pair_rejects_duplicates_and_blanks() {
        let mut store = open_empty();
        assert!(store.add_pair("yes", "yebo", 0).unwrap());
        assert!(!store.add_pair(" yes ", "yebo", 0).unwrap());
        assert!(!store.add_pair("", "yebo", 0).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn review_updates_and_persists() {
        let mut store = open_empty();
        store.add_pair("no", "cha", 0).unwrap();
        let id = store.pairs()[0].id;

        let outcome = store.review(id, Quality::GOOD, 10).unwrap();
        assert_eq!(outcome.interval, 1.0);
        assert_eq!(store.get(id).unwrap().due, 10 + DAY_MS);

        let raw = store.backend().get(PAIRS_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""lastReviewed":10"#));
    }

    #[test]
    fn review_of_unknown_pair_fails() {
        let mut store = open_empty();
        let err = store.review(Uuid::new_v4(), Quality::GOOD, 0).unwrap_err();
        assert!(matches!(err, AppError::UnknownPair(_)));
    }

    #[test]
    fn streak_is_persisted_once_per_day() {
        let mut store = open_empty();
        store.touch_streak(day("2025-05-01")).unwrap();
        store.touch_streak(day("2025-05-01")).unwrap();
        let s = store.touch_streak(day("2025-05-02")).unwrap();
        assert_eq!(s.count, 2);

        let raw = store.backend().get(STREAK_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"count":2,"lastReviewDate":"2025-05-02"}"#);
    }

    #[test]
    fn export_matches_imported_pairs() {
        let mut store = open_empty();
        let drafts = import::parse_bulk_text("a = b\nc = d\na = b");
        let n = store.add_batch(&drafts, 0).unwrap();
        let exported = store.export();
        assert_eq!(n, 2);
        assert_eq!(exported.len(), 2);
        assert_eq!(
            exported[0],
            PairExport {
                english: "a".into(),
                zulu: "b".into(),
            }
        );
        assert_eq!(
            exported[1],
            PairExport {
                english: "c".into(),
                zulu: "d".into(),
            }
        );
    }

    #[test]
    fn blank_stored_records_are_skipped() {
        let raw = r#"[
            {"english":"  ","zulu":"x"},
            {"english":"cat","zulu":""},
            {"english":"dog","zulu":"inja"}
        ]"#;
        let store = PairStore::open(MemoryKv::new().with(PAIRS_KEY, raw), &[], 0).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.pairs()[0].front, "dog");
    }

    #[test]
    fn huge_stored_interval_reviews_without_overflow() {
        let raw = r#"[{"english":"a","zulu":"b","interval":1e300,"ease":2.5,"due":0}]"#;
        let mut store = PairStore::open(MemoryKv::new().with(PAIRS_KEY, raw), &[], 0).unwrap();
        assert_eq!(store.pairs()[0].interval, MAX_INTERVAL);

        let id = store.pairs()[0].id;
        let now = 1_700_000_000_000;
        let outcome = store.review(id, Quality::GOOD, now).unwrap();
        assert_eq!(outcome.interval, MAX_INTERVAL);
        assert!(outcome.due > now);
    }

    #[test]
    fn maxed_out_streak_keeps_counting_safely() {
        let kv = MemoryKv::new().with(
            STREAK_KEY,
            r#"{"count":4294967295,"lastReviewDate":"2025-05-01"}"#,
        );
        let mut store = PairStore::open(kv, &[], 0).unwrap();
        let s = store.touch_streak(day("2025-05-02")).unwrap();
        assert_eq!(s.count, u32::MAX);
    }
}
