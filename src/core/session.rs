//! Review session: one card at a time over a freshly scheduled queue.
//!
//! ```text
//! Idle / CaughtUp / Complete --start--> Active | CaughtUp
//! Active   --reveal--> Revealed
//! Revealed --rate----> Active (next card) | Complete
//! ```

use crate::core::queue::{self, Advance, Progress, SessionQueue};
use crate::core::scheduler::ReviewOutcome;
use crate::core::store::{KeyValueStore, PairStore};
use crate::errors::{AppError, AppResult};
use crate::models::quality::Quality;
use crate::models::streak::Streak;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    CaughtUp,
    Active,
    Revealed,
    Complete,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::CaughtUp => "caught up",
            SessionState::Active => "showing a card",
            SessionState::Revealed => "showing an answer",
            SessionState::Complete => "complete",
        }
    }
}

/// What a rating did: the scheduler result for the rated card and the
/// streak after the review.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rated {
    pub id: Uuid,
    pub outcome: ReviewOutcome,
    pub streak: Streak,
}

#[derive(Debug, Default)]
pub struct Session {
    queue: SessionQueue,
    current: Option<Uuid>,
    state: SessionState,
    reviewed: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the queue from the store and show the first due card.
    pub fn start<S: KeyValueStore>(&mut self, store: &PairStore<S>, now: i64) -> SessionState {
        self.queue = queue::schedule(store.pairs(), now);
        self.reviewed = 0;
        self.current = None;

        if self.queue.is_empty() {
            self.state = SessionState::CaughtUp;
            return self.state;
        }
        self.next_card()
    }

    pub fn reveal(&mut self) -> AppResult<()> {
        match self.state {
            SessionState::Active => {
                self.state = SessionState::Revealed;
                Ok(())
            }
            SessionState::Revealed => Ok(()),
            other => Err(AppError::InvalidSessionState {
                action: "reveal",
                state: other.as_str(),
            }),
        }
    }

    /// Rate the revealed card: schedule it, persist, touch the streak and
    /// move on to the next card.
    pub fn rate<S: KeyValueStore>(
        &mut self,
        store: &mut PairStore<S>,
        quality: Quality,
        now: i64,
        today: NaiveDate,
    ) -> AppResult<Rated> {
        let id = match (self.state, self.current) {
            (SessionState::Revealed, Some(id)) => id,
            (other, _) => {
                return Err(AppError::InvalidSessionState {
                    action: "rate",
                    state: other.as_str(),
                });
            }
        };

        let outcome = store.review(id, quality, now)?;
        // the card is rated from here on, even if the streak write fails
        self.reviewed += 1;
        self.next_card();
        let streak = store.touch_streak(today)?;

        Ok(Rated {
            id,
            outcome,
            streak,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current(&self) -> Option<Uuid> {
        self.current
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn reviewed(&self) -> usize {
        self.reviewed
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(self.reviewed, self.queue.len(), self.current.is_some())
    }

    fn next_card(&mut self) -> SessionState {
        match self.queue.advance() {
            Advance::Card(id) => {
                self.current = Some(id);
                self.state = SessionState::Active;
            }
            Advance::Complete => {
                self.current = None;
                self.state = SessionState::Complete;
            }
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryKv, STREAK_KEY};
    use crate::models::pair::PairDraft;
    use crate::utils::date::DAY_MS;

    const NOW: i64 = 1_750_000_000_000;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn store_with(n: usize) -> PairStore<MemoryKv> {
        let drafts: Vec<PairDraft> = (0..n)
            .map(|i| PairDraft::new(format!("front {i}"), format!("back {i}")))
            .collect();
        PairStore::open(MemoryKv::new(), &drafts, NOW).unwrap()
    }

    #[test]
    fn empty_store_is_caught_up() {
        let store = store_with(0);
        let mut s = Session::new();
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.start(&store, NOW), SessionState::CaughtUp);
        assert!(s.current().is_none());
        assert_eq!(s.progress().percent, 0.0);
    }

    #[test]
    fn full_pass_through_the_queue() {
        let mut store = store_with(2);
        let mut s = Session::new();
        assert_eq!(s.start(&store, NOW), SessionState::Active);
        assert_eq!(s.progress().total, 2);

        s.reveal().unwrap();
        let first = s.rate(&mut store, Quality::GOOD, NOW, today()).unwrap();
        assert_eq!(first.outcome.interval, 1.0);
        assert_eq!(first.streak.count, 1);
        assert_eq!(s.state(), SessionState::Active);
        assert_eq!(s.progress().percent, 50.0);

        s.reveal().unwrap();
        let second = s.rate(&mut store, Quality::AGAIN, NOW, today()).unwrap();
        assert_eq!(second.outcome.due, NOW + DAY_MS / 2);
        assert_eq!(s.state(), SessionState::Complete);
        assert_eq!(s.reviewed(), 2);
        assert_eq!(s.progress().percent, 100.0);

        // nothing due any more: restart lands in CaughtUp
        assert_eq!(s.start(&store, NOW + 1), SessionState::CaughtUp);
        assert_eq!(s.reviewed(), 0);
    }

    #[test]
    fn lapsed_card_comes_back_the_same_day() {
        let mut store = store_with(1);
        let mut s = Session::new();
        s.start(&store, NOW);
        s.reveal().unwrap();
        s.rate(&mut store, Quality::AGAIN, NOW, today()).unwrap();

        assert_eq!(s.start(&store, NOW + DAY_MS / 2), SessionState::Active);
    }

    #[test]
    fn rating_requires_a_revealed_card() {
        let mut store = store_with(1);
        let mut s = Session::new();

        let err = s.rate(&mut store, Quality::GOOD, NOW, today()).unwrap_err();
        assert!(matches!(err, AppError::InvalidSessionState { action: "rate", .. }));

        s.start(&store, NOW);
        assert!(s.rate(&mut store, Quality::GOOD, NOW, today()).is_err());
        assert_eq!(store.pairs()[0].interval, 0.0);
    }

    /// Backend whose streak writes always fail.
    #[derive(Default)]
    struct StreakWriteFails(MemoryKv);

    impl KeyValueStore for StreakWriteFails {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
            if key == STREAK_KEY {
                return Err(AppError::Io(std::io::Error::other("disk full")));
            }
            self.0.set(key, value)
        }
    }

    #[test]
    fn failed_streak_write_still_moves_on() {
        let drafts = vec![PairDraft::new("a", "b"), PairDraft::new("c", "d")];
        let mut store = PairStore::open(StreakWriteFails::default(), &drafts, NOW).unwrap();
        let mut s = Session::new();
        s.start(&store, NOW);
        let first = s.current();

        s.reveal().unwrap();
        assert!(s.rate(&mut store, Quality::GOOD, NOW, today()).is_err());

        assert_eq!(s.reviewed(), 1);
        assert_eq!(s.state(), SessionState::Active);
        assert_ne!(s.current(), first);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn reveal_outside_a_card_fails() {
        let store = store_with(0);
        let mut s = Session::new();
        s.start(&store, NOW);
        assert!(s.reveal().is_err());
    }

    #[test]
    fn queue_follows_due_order() {
        let mut store = store_with(3);
        let ids: Vec<Uuid> = store.pairs().iter().map(|p| p.id).collect();

        // push the first pair's due after the others
        let mut s = Session::new();
        s.start(&store, NOW);
        s.reveal().unwrap();
        s.rate(&mut store, Quality::AGAIN, NOW, today()).unwrap();

        let mut s2 = Session::new();
        s2.start(&store, NOW + DAY_MS);
        assert_eq!(s2.current(), Some(ids[1]));
        assert_eq!(s2.remaining(), 2);
    }
}
