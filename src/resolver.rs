//! Legal-move selection.
//!
//! The policy is deterministic "play low, climb high": shed the lowest rank
//! that satisfies the pile, and only open wide (pairs, trips, quads) when
//! leading an empty pile.

use crate::cards::Card;
use crate::constraint::ConstraintState;
use crate::hand::{Group, Hand, HandError};

/// Largest group a player may open with.
pub const MAX_GROUP: usize = 4;

/// Outcome of asking a player for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Play {
    Played(Group),
    Passed,
}

impl Play {
    pub fn group(&self) -> Option<&Group> {
        match self {
            Play::Played(g) => Some(g),
            Play::Passed => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Play::Passed)
    }
}

/// Pick the cards `seat` would play without touching the hand.
///
/// ```
/// use president_rs::constraint::ConstraintState;
/// use president_rs::hand::Hand;
/// use president_rs::resolver::choose_play;
///
/// let hand: Hand = "5d 9c 9h".parse().unwrap();
/// let top = "7s".parse().ok();
/// let cards = choose_play(&hand, top, &ConstraintState::unconstrained(), 0).unwrap();
/// assert_eq!(cards.len(), 1);
/// assert_eq!(cards[0].to_string(), "9♥");
/// ```
pub fn choose_play(
    hand: &Hand,
    top: Option<Card>,
    constraint: &ConstraintState,
    seat: usize,
) -> Option<Vec<Card>> {
    let groups = hand.groups();
    let count = constraint.required_count();

    if let Some(lock) = constraint.lock() {
        if lock.target != seat {
            return None;
        }
        let held = groups.get(lock.rank);
        return (held.len() >= count).then(|| held[..count].to_vec());
    }

    if count == 1 {
        return match top {
            None => groups.largest().map(|best| best[..best.len().min(MAX_GROUP)].to_vec()),
            Some(top) => groups.lowest_with(1, Some(top.value())).map(|cards| vec![cards[0]]),
        };
    }

    groups.lowest_with(count, top.map(Card::value)).map(|cards| cards[..count].to_vec())
}

/// Choose a move for `seat` and commit it: the chosen cards leave the hand.
/// A pass leaves the hand untouched.
pub fn resolve_play(
    hand: &mut Hand,
    top: Option<Card>,
    constraint: &ConstraintState,
    seat: usize,
) -> Result<Play, HandError> {
    match choose_play(hand, top, constraint, seat) {
        Some(cards) => hand.take(&cards).map(Play::Played),
        None => Ok(Play::Passed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::constraint::Lock;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn leading_opens_with_widest_group() {
        let mut h = hand("3s 3h 3d 8c");
        let play = resolve_play(&mut h, None, &ConstraintState::unconstrained(), 0).unwrap();
        let g = play.group().unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.rank(), Rank::Three);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn leading_with_all_singles_plays_lowest() {
        let h = hand("Kd 4s 9c");
        let cards = choose_play(&h, None, &ConstraintState::unconstrained(), 0).unwrap();
        assert_eq!(cards, vec![card("4s")]);
    }

    #[test]
    fn single_must_reach_pile_top() {
        let h = hand("5d 6s");
        assert!(choose_play(&h, Some(card("7h")), &ConstraintState::unconstrained(), 0).is_none());
        let h = hand("5d 7s");
        assert_eq!(
            choose_play(&h, Some(card("7h")), &ConstraintState::unconstrained(), 0),
            Some(vec![card("7s")])
        );
    }

    #[test]
    fn multi_mode_plays_exact_count() {
        let h = hand("4s 4h 4d Js Jh");
        let c = ConstraintState::new(None, 2);
        let cards = choose_play(&h, Some(card("10c")), &c, 1).unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.rank() == Rank::Jack));

        let cards = choose_play(&h, None, &c, 1).unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.rank() == Rank::Four));
    }

    #[test]
    fn targeted_lock_needs_exact_rank_and_count() {
        let c = ConstraintState::new(Some(Lock { rank: Rank::Nine, target: 1 }), 1);
        let h = hand("9s 9h Ad");
        assert_eq!(choose_play(&h, Some(card("9c")), &c, 1), Some(vec![card("9s")]));

        let h = hand("Ad 2c");
        assert!(choose_play(&h, Some(card("9c")), &c, 1).is_none());
    }

    #[test]
    fn lock_aimed_elsewhere_means_pass() {
        let c = ConstraintState::new(Some(Lock { rank: Rank::Nine, target: 2 }), 2);
        let h = hand("9s 9h");
        assert!(choose_play(&h, Some(card("9c")), &c, 1).is_none());
    }

    #[test]
    fn pass_leaves_hand_untouched() {
        let mut h = hand("3s 4s");
        let before = h.clone();
        let play =
            resolve_play(&mut h, Some(card("Ah")), &ConstraintState::unconstrained(), 0).unwrap();
        assert!(play.is_pass());
        assert_eq!(h, before);
    }

    #[test]
    fn empty_hand_always_passes() {
        let h = Hand::default();
        assert!(choose_play(&h, None, &ConstraintState::unconstrained(), 0).is_none());
    }
}
