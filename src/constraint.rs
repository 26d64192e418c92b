//! Round-scoped play constraints.
//!
//! A [`ConstraintState`] always carries the size of the last accepted play
//! ("N-of-a-kind mode"). When a play matched the one before it, it also carries
//! a [`Lock`] naming the rank and the rotation index that must answer it. Rank
//! and target live in one struct, so they are present or absent together.

use crate::cards::Rank;
use std::fmt;

/// A rank that one specific seat must match next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lock {
    pub rank: Rank,
    pub target: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintState {
    lock: Option<Lock>,
    required_count: usize,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl ConstraintState {
    /// Singles mode with no lock; the state every round starts in.
    pub const fn unconstrained() -> Self {
        Self { lock: None, required_count: 1 }
    }

    /// Build an explicit state. A zero count is raised to one.
    pub fn new(lock: Option<Lock>, required_count: usize) -> Self {
        Self { lock, required_count: required_count.max(1) }
    }

    pub fn lock(&self) -> Option<Lock> {
        self.lock
    }

    pub fn locked_rank(&self) -> Option<Rank> {
        self.lock.map(|l| l.rank)
    }

    pub fn target(&self) -> Option<usize> {
        self.lock.map(|l| l.target)
    }

    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// True when a lock exists and binds `seat`.
    pub fn targets(&self, seat: usize) -> bool {
        self.target() == Some(seat)
    }

    /// Singles-mode lock held by somebody other than `seat`: that seat sits out.
    pub fn skips(&self, seat: usize) -> bool {
        self.required_count == 1 && self.lock.is_some() && !self.targets(seat)
    }

    /// Re-derive after an accepted play of `count` cards of `rank`.
    /// `matched` says the play repeated the previous play's rank and size;
    /// then `next` must answer it.
    pub fn after_play(&mut self, rank: Rank, count: usize, matched: bool, next: usize) {
        self.required_count = count.max(1);
        self.lock = matched.then_some(Lock { rank, target: next });
    }

    /// `seat` passed. A lock aimed at it is lifted; the count is left alone.
    pub fn after_pass(&mut self, seat: usize) {
        if self.targets(seat) {
            self.lock = None;
        }
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lock {
            Some(Lock { rank, target }) => {
                write!(f, "seat {} must play {}x {}", target + 1, self.required_count, rank)
            }
            None if self.required_count == 1 => f.write_str("singles"),
            None => write!(f, "{}-of-a-kind", self.required_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unconstrained_in_singles() {
        let c = ConstraintState::default();
        assert_eq!(c.required_count(), 1);
        assert!(c.lock().is_none());
        assert!(!c.skips(0));
        assert_eq!(c.to_string(), "singles");
    }

    #[test]
    fn matched_play_locks_the_next_seat() {
        let mut c = ConstraintState::unconstrained();
        c.after_play(Rank::Nine, 1, true, 2);
        assert_eq!(c.lock(), Some(Lock { rank: Rank::Nine, target: 2 }));
        assert!(c.targets(2));
        assert!(c.skips(0));
        assert!(!c.skips(2));
    }

    #[test]
    fn unmatched_play_sets_count_only() {
        let mut c = ConstraintState::new(Some(Lock { rank: Rank::Four, target: 1 }), 1);
        c.after_play(Rank::Jack, 3, false, 2);
        assert_eq!(c.lock(), None);
        assert_eq!(c.required_count(), 3);
        assert_eq!(c.to_string(), "3-of-a-kind");
    }

    #[test]
    fn failed_lock_keeps_required_count() {
        let mut c = ConstraintState::unconstrained();
        c.after_play(Rank::Six, 2, true, 1);
        c.after_pass(0);
        assert!(c.lock().is_some(), "only the target lifts the lock");
        c.after_pass(1);
        assert_eq!(c.lock(), None);
        assert_eq!(c.required_count(), 2);
    }

    #[test]
    fn multi_card_lock_does_not_skip_others() {
        let c = ConstraintState::new(Some(Lock { rank: Rank::Six, target: 1 }), 2);
        assert!(!c.skips(0));
    }
}
