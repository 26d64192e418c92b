//! One round of play: turns rotate until everybody but one passes, a 2 is
//! played, or a four-card run cuts the pile.

use crate::cards::{Card, Rank};
use crate::constraint::{ConstraintState, Lock};
use crate::game::Player;
use crate::hand::{Group, HandError};
use crate::resolver::{resolve_play, Play};
use tracing::{debug, info, warn};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("a round needs at least 2 players, got {0}")]
    TooFewPlayers(usize),
    #[error("start index {start} out of range for {seats} players")]
    StartOutOfRange { start: usize, seats: usize },
    #[error("seat {0} has no cards and should have been eliminated")]
    EliminatedPlayer(usize),
    #[error("rotation changed size: expected {expected} players, got {got}")]
    SeatMismatch { expected: usize, got: usize },
    #[error("lock targets seat {target} but only {seats} players are seated")]
    TargetOutOfRange { target: usize, seats: usize },
    #[error("round already ended")]
    Ended,
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EndCause {
    AllButOnePassed,
    TwoPlayed,
    FourOfAKindCut,
}

impl EndCause {
    pub fn label(self) -> &'static str {
        match self {
            EndCause::AllButOnePassed => "everyone else passed",
            EndCause::TwoPlayed => "a 2 was played",
            EndCause::FourOfAKindCut => "four of a kind cut the pile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Awaiting(usize),
    Ended(EndCause),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundOutcome {
    /// Rotation index of the last seat whose play was accepted.
    pub last_player_to_act: Option<usize>,
    pub cause: EndCause,
    pub pile_was_cut: bool,
    /// Everything played this round, now out of the game.
    pub discarded: Vec<Card>,
}

impl RoundOutcome {
    /// Piles, pile tops and constraints never carry into the next round.
    pub fn clears_pile(&self) -> bool {
        true
    }
}

/// What a single turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnEvent {
    /// `lock` is the lock this play placed on the next seat, if it matched.
    Played { seat: usize, group: Group, lock: Option<Lock> },
    Passed { seat: usize },
    /// Sat out because a singles lock binds another seat.
    Skipped { seat: usize, lock: Lock },
}

impl TurnEvent {
    pub fn seat(&self) -> usize {
        match self {
            TurnEvent::Played { seat, .. }
            | TurnEvent::Passed { seat }
            | TurnEvent::Skipped { seat, .. } => *seat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub event: TurnEvent,
    pub ended: Option<RoundOutcome>,
}

/// True once `consecutive_passes` reaches `seats - 1`.
pub fn all_but_one_passed(consecutive_passes: usize, seats: usize) -> bool {
    consecutive_passes >= seats.saturating_sub(1)
}

/// True if any card in `group` has the top rank.
pub fn contains_terminating_rank(group: &[Card]) -> bool {
    group.iter().any(|c| c.rank() == Rank::HIGHEST)
}

/// True if the last four cards on `pile` share one rank.
///
/// ```
/// use president_rs::cards::parse_cards;
/// use president_rs::round::is_four_of_a_kind;
///
/// let pile = parse_cards("3s 8s 8h 8d 8c").unwrap();
/// assert!(is_four_of_a_kind(&pile));
/// assert!(!is_four_of_a_kind(&pile[..4]));
/// ```
pub fn is_four_of_a_kind(pile: &[Card]) -> bool {
    if pile.len() < 4 {
        return false;
    }
    let tail = &pile[pile.len() - 4..];
    tail.iter().all(|c| c.rank() == tail[3].rank())
}

/// The per-round state machine. Rotation indices refer to the player slice
/// handed to [`Round::new`]; the same slice must be passed to every step.
#[derive(Debug, Clone)]
pub struct Round {
    seats: usize,
    state: RoundState,
    pile: Vec<Card>,
    top: Option<Card>,
    last_play: Option<(Rank, usize)>,
    constraint: ConstraintState,
    passed: Vec<bool>,
    consecutive_passes: usize,
    last_player: Option<usize>,
}

impl Round {
    pub fn new(players: &[Player], start: usize) -> Result<Self, RoundError> {
        let seats = players.len();
        if seats < 2 {
            return Err(RoundError::TooFewPlayers(seats));
        }
        if start >= seats {
            return Err(RoundError::StartOutOfRange { start, seats });
        }
        if let Some(seat) = players.iter().position(|p| p.hand.is_empty()) {
            return Err(RoundError::EliminatedPlayer(seat));
        }
        Ok(Self {
            seats,
            state: RoundState::Awaiting(start),
            pile: Vec::new(),
            top: None,
            last_play: None,
            constraint: ConstraintState::unconstrained(),
            passed: vec![false; seats],
            consecutive_passes: 0,
            last_player: None,
        })
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    pub fn top(&self) -> Option<Card> {
        self.top
    }

    pub fn constraint(&self) -> &ConstraintState {
        &self.constraint
    }

    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn has_passed(&self, seat: usize) -> bool {
        self.passed.get(seat).copied().unwrap_or(false)
    }

    pub fn last_player(&self) -> Option<usize> {
        self.last_player
    }

    /// Play one turn for the awaiting seat.
    pub fn step(&mut self, players: &mut [Player]) -> Result<Step, RoundError> {
        let seat = match self.state {
            RoundState::Awaiting(seat) => seat,
            RoundState::Ended(_) => return Err(RoundError::Ended),
        };
        if players.len() != self.seats {
            return Err(RoundError::SeatMismatch { expected: self.seats, got: players.len() });
        }
        if let Some(target) = self.constraint.target() {
            if target >= self.seats {
                warn!(target, seats = self.seats, "lock points outside the rotation");
                return Err(RoundError::TargetOutOfRange { target, seats: self.seats });
            }
        }

        let player = &mut players[seat];
        let (event, cause) = if let Some(lock) =
            self.constraint.lock().filter(|_| self.constraint.skips(seat))
        {
            debug!(seat, player = %player.name, rank = %lock.rank, "skipped by lock");
            self.record_pass(seat);
            (TurnEvent::Skipped { seat, lock }, None)
        } else {
            match resolve_play(&mut player.hand, self.top, &self.constraint, seat)? {
                Play::Played(group) => {
                    debug!(seat, player = %player.name, cards = %group, "played");
                    let cause = self.record_play(seat, &group);
                    let lock = self.constraint.lock();
                    (TurnEvent::Played { seat, group, lock }, cause)
                }
                Play::Passed => {
                    debug!(seat, player = %player.name, "passed");
                    self.record_pass(seat);
                    (TurnEvent::Passed { seat }, None)
                }
            }
        };

        let cause = cause.or_else(|| {
            all_but_one_passed(self.consecutive_passes, self.seats)
                .then_some(EndCause::AllButOnePassed)
        });
        let ended = match cause {
            Some(cause) => Some(self.finish(cause)),
            None => {
                self.state = RoundState::Awaiting(self.next_active(seat));
                None
            }
        };
        Ok(Step { event, ended })
    }

    fn record_play(&mut self, seat: usize, group: &Group) -> Option<EndCause> {
        let rank = group.rank();
        let matched = self.last_play == Some((rank, group.len()));
        self.pile.extend_from_slice(group.as_slice());
        self.top = Some(group.lead());
        self.last_play = Some((rank, group.len()));
        self.last_player = Some(seat);
        self.consecutive_passes = 0;
        self.passed.iter_mut().for_each(|p| *p = false);
        self.constraint.after_play(rank, group.len(), matched, (seat + 1) % self.seats);

        if contains_terminating_rank(group.as_slice()) {
            Some(EndCause::TwoPlayed)
        } else if is_four_of_a_kind(&self.pile) {
            Some(EndCause::FourOfAKindCut)
        } else {
            None
        }
    }

    fn record_pass(&mut self, seat: usize) {
        self.passed[seat] = true;
        self.consecutive_passes += 1;
        self.constraint.after_pass(seat);
    }

    fn next_active(&self, seat: usize) -> usize {
        let mut next = (seat + 1) % self.seats;
        for _ in 0..self.seats {
            if !self.passed[next] {
                break;
            }
            next = (next + 1) % self.seats;
        }
        next
    }

    fn finish(&mut self, cause: EndCause) -> RoundOutcome {
        info!(?cause, last = ?self.last_player, cards = self.pile.len(), "round over");
        self.state = RoundState::Ended(cause);
        self.top = None;
        self.last_play = None;
        self.constraint = ConstraintState::unconstrained();
        RoundOutcome {
            last_player_to_act: self.last_player,
            cause,
            pile_was_cut: cause == EndCause::FourOfAKindCut,
            discarded: std::mem::take(&mut self.pile),
        }
    }
}

/// Run a full round with `start` leading; `on_turn` sees every turn in order.
pub fn run_round_with<F>(
    players: &mut [Player],
    start: usize,
    mut on_turn: F,
) -> Result<RoundOutcome, RoundError>
where
    F: FnMut(&TurnEvent),
{
    let mut round = Round::new(players, start)?;
    loop {
        let step = round.step(players)?;
        on_turn(&step.event);
        if let Some(outcome) = step.ended {
            return Ok(outcome);
        }
    }
}

pub fn run_round(players: &mut [Player], start: usize) -> Result<RoundOutcome, RoundError> {
    run_round_with(players, start, |_| {})
}
