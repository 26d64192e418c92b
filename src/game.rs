use crate::cards::{Card, Rank, Suit};
use crate::config::{ConfigError, GameConfig};
use crate::deck::Deck;
use crate::hand::Hand;
use crate::round::{EndCause, Round, RoundError, RoundOutcome, TurnEvent};
use std::fmt;
use tracing::info;

/// The card whose holder leads the first round.
pub const OPENING_CARD: Card = Card::new(Rank::Queen, Suit::Hearts);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("the game is already over")]
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self { name: name.into(), hand }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's remaining cards
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// One line of game narration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryEntry {
    Turn { round: usize, player: String, event: TurnEvent },
    RoundEnded { round: usize, cause: EndCause, last: Option<String> },
    Finished { player: String, place: usize },
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Turn { round, player, event } => match event {
                TurnEvent::Played { group, lock: Some(lock), .. } => write!(
                    f,
                    "R{round} {player} plays {group}, matching! next must play {}x {}",
                    group.len(),
                    lock.rank
                ),
                TurnEvent::Played { group, lock: None, .. } => {
                    write!(f, "R{round} {player} plays {group}")
                }
                TurnEvent::Passed { .. } => write!(f, "R{round} {player} passes"),
                TurnEvent::Skipped { lock, .. } => {
                    write!(f, "R{round} {player} passes (locked on {})", lock.rank)
                }
            },
            HistoryEntry::RoundEnded { round, cause, last } => match last {
                Some(name) => write!(f, "R{round} over: {}, {name} leads next", cause.label()),
                None => write!(f, "R{round} over: {}", cause.label()),
            },
            HistoryEntry::Finished { player, place } => {
                write!(f, "{player} is out of cards (place {place})")
            }
        }
    }
}

/// Final ranking, first out first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    pub order: Vec<String>,
}

impl Standings {
    pub fn president(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.order.iter().enumerate() {
            writeln!(f, "{}. {name}", i + 1)?;
        }
        Ok(())
    }
}

/// A whole game: deal, then rounds until one player still holds cards.
///
/// `players` is the live rotation; index 0 leads the next round.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) round: Option<Round>,
    round_number: usize,
    finish_order: Vec<String>,
    discarded: Vec<Card>,
    // cards still held by the last player when the game ends
    unplayed: Vec<Card>,
    history: Vec<HistoryEntry>,
    dealt: usize,
    over: bool,
}

impl Game {
    /// Shuffle, deal the full deck and seat the Queen of Hearts holder first.
    ///
    /// ```
    /// use president_rs::config::GameConfig;
    /// use president_rs::game::{Game, OPENING_CARD};
    ///
    /// let game = Game::new(&GameConfig::default().with_seed(Some(1))).unwrap();
    /// assert!(game.players()[0].hand().contains(OPENING_CARD));
    /// ```
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut deck = Deck::standard();
        match config.seed {
            Some(seed) => deck.shuffle_seeded(seed),
            None => deck.shuffle_with(&mut rand::rng()),
        }
        let players = config
            .player_names
            .iter()
            .zip(deck.deal(config.num_players()))
            .map(|(name, cards)| Player::new(name.clone(), Hand::new(cards)))
            .collect();
        let mut game = Self::from_players(players)?;
        game.seat_opening_card_first();
        Ok(game)
    }

    /// Start from hands that are already dealt, in the given rotation.
    pub fn from_players(players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(RoundError::TooFewPlayers(players.len()).into());
        }
        let dealt = players.iter().map(|p| p.hand.len()).sum();
        Ok(Self {
            players,
            round: None,
            round_number: 0,
            finish_order: Vec::new(),
            discarded: Vec::new(),
            unplayed: Vec::new(),
            history: Vec::new(),
            dealt,
            over: false,
        })
    }

    fn seat_opening_card_first(&mut self) {
        if let Some(pos) = self.players.iter().position(|p| p.hand.contains(OPENING_CARD)) {
            info!(player = %self.players[pos].name, "holds the queen of hearts");
            self.players.rotate_left(pos);
        }
    }

    /// Returns the live rotation, leader first
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the round in progress, if any
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the number of rounds started so far
    pub fn round_number(&self) -> usize {
        self.round_number
    }

    /// Returns players who have emptied their hands, in order
    pub fn finish_order(&self) -> &[String] {
        &self.finish_order
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn standings(&self) -> Option<Standings> {
        self.over.then(|| Standings { order: self.finish_order.clone() })
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of cards dealt at the start of the game.
    pub fn dealt(&self) -> usize {
        self.dealt
    }

    /// Every card still in play: hands, the live pile and finished rounds.
    pub fn census(&self) -> Vec<Card> {
        let mut all: Vec<Card> =
            self.players.iter().flat_map(|p| p.hand.cards().iter().copied()).collect();
        if let Some(round) = &self.round {
            all.extend_from_slice(round.pile());
        }
        all.extend_from_slice(&self.discarded);
        all.extend_from_slice(&self.unplayed);
        all
    }

    /// Play a single turn, starting a new round first if needed.
    pub fn step(&mut self) -> Result<(), GameError> {
        if self.over {
            return Err(GameError::Finished);
        }
        let mut round = match self.round.take() {
            Some(round) => round,
            None => {
                let round = Round::new(&self.players, 0)?;
                self.round_number += 1;
                round
            }
        };
        let result = round.step(&mut self.players);
        self.round = Some(round);
        let step = result?;
        let player = self.players[step.event.seat()].name.clone();
        self.history.push(HistoryEntry::Turn {
            round: self.round_number,
            player,
            event: step.event,
        });
        if let Some(outcome) = step.ended {
            self.round = None;
            self.close_round(outcome);
        }
        Ok(())
    }

    /// Play until one player is left and return the ranking.
    pub fn play_to_end(&mut self) -> Result<Standings, GameError> {
        while !self.over {
            self.step()?;
        }
        Ok(Standings { order: self.finish_order.clone() })
    }

    fn close_round(&mut self, outcome: RoundOutcome) {
        let last = outcome
            .last_player_to_act
            .and_then(|i| self.players.get(i))
            .map(|p| p.name.clone());
        self.history.push(HistoryEntry::RoundEnded {
            round: self.round_number,
            cause: outcome.cause,
            last: last.clone(),
        });
        if outcome.clears_pile() {
            self.discarded.extend(outcome.discarded);
        }

        // seat of the last actor once emptied hands ahead of it are gone
        let leader = outcome.last_player_to_act.and_then(|seat| {
            let player = self.players.get(seat)?;
            let removed = self.players[..seat].iter().filter(|p| p.hand.is_empty()).count();
            (!player.hand.is_empty()).then_some(seat - removed)
        });

        let (out, staying): (Vec<Player>, Vec<Player>) =
            std::mem::take(&mut self.players).into_iter().partition(|p| p.hand.is_empty());
        self.players = staying;
        for p in out {
            self.record_finish(p.name);
        }
        self.players.rotate_left(leader.unwrap_or(0));

        if self.players.len() <= 1 {
            for p in std::mem::take(&mut self.players) {
                self.unplayed.extend_from_slice(p.hand.cards());
                self.record_finish(p.name);
            }
            self.over = true;
            info!(rounds = self.round_number, "game over");
        }
    }

    fn record_finish(&mut self, name: String) {
        self.finish_order.push(name.clone());
        let place = self.finish_order.len();
        info!(player = %name, place, "finished");
        self.history.push(HistoryEntry::Finished { player: name, place });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64, n: usize) -> Game {
        Game::new(&GameConfig::default().with_players(n).with_seed(Some(seed))).unwrap()
    }

    #[test]
    fn deal_uses_whole_deck() {
        let game = seeded(3, 4);
        assert_eq!(game.dealt(), 52);
        assert!(game.players.iter().all(|p| p.hand.len() == 13));
    }

    #[test]
    fn same_seed_same_game() {
        let a = seeded(11, 3).play_to_end().unwrap();
        let b = seeded(11, 3).play_to_end().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Game::new(&GameConfig::default().with_players(1)).unwrap_err();
        assert_eq!(err, GameError::Config(ConfigError::TooFewPlayers(1)));
    }

    #[test]
    fn stepping_a_finished_game_fails() {
        let mut game = seeded(5, 2);
        game.play_to_end().unwrap();
        assert_eq!(game.step(), Err(GameError::Finished));
    }

    #[test]
    fn failed_round_start_keeps_the_round_count() {
        let players =
            vec![Player::new("A", "3s".parse().unwrap()), Player::new("B", Hand::default())];
        let mut game = Game::from_players(players).unwrap();
        for _ in 0..3 {
            assert_eq!(game.step(), Err(GameError::Round(RoundError::EliminatedPlayer(1))));
        }
        assert_eq!(game.round_number(), 0);
        assert!(game.round().is_none());
    }
}
