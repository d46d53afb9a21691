use crate::models::pair::Pair;
use std::collections::VecDeque;
use uuid::Uuid;

/// Due pairs for one session, oldest `due` first. Holds ids only; the pairs
/// stay owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionQueue {
    items: VecDeque<Uuid>,
}

/// Result of popping the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Card(Uuid),
    Complete,
}

/// Select every pair with `due <= now`, ordered ascending by `due`.
/// Ties keep store order (`sort_by_key` is stable).
pub fn schedule(pairs: &[Pair], now: i64) -> SessionQueue {
    let mut due: Vec<&Pair> = pairs.iter().filter(|p| p.is_due(now)).collect();
    due.sort_by_key(|p| p.due);

    SessionQueue {
        items: due.into_iter().map(|p| p.id).collect(),
    }
}

impl SessionQueue {
    pub fn advance(&mut self) -> Advance {
        match self.items.pop_front() {
            Some(id) => Advance::Card(id),
            None => Advance::Complete,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &Uuid> {
        self.items.iter()
    }
}

/// Session progress as shown in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub reviewed: usize,
    pub total: usize,
    pub percent: f64,
}

impl Progress {
    pub fn compute(reviewed: usize, remaining: usize, has_active: bool) -> Self {
        let total = reviewed + remaining + usize::from(has_active);
        let percent = if total == 0 {
            0.0
        } else {
            (reviewed as f64 / total as f64 * 100.0).min(100.0)
        };
        Self {
            reviewed,
            total,
            percent,
        }
    }
}
