//! president-rs: President card game engine
//!
//! Players shed cards in rising same-rank groups until one is left holding
//! cards. The heart of the crate is the round engine: a turn-by-turn state
//! machine that picks legal plays, enforces match locks, and detects the
//! three ways a round ends (everyone else passes, a 2 is played, or four of a
//! kind cuts the pile).
//!
//! ## Quick start: run one round
//! ```
//! use president_rs::game::Player;
//! use president_rs::round::{run_round, EndCause};
//!
//! let mut players = vec![
//!     Player::new("Elias", "3s 3h 3d Kc".parse().unwrap()),
//!     Player::new("Axel", "4s 9h".parse().unwrap()),
//!     Player::new("Tito", "5c 6d".parse().unwrap()),
//! ];
//! let outcome = run_round(&mut players, 0).unwrap();
//! assert_eq!(outcome.cause, EndCause::AllButOnePassed);
//! assert_eq!(outcome.last_player_to_act, Some(0));
//! ```
//!
//! ## Full game
//! ```
//! use president_rs::config::GameConfig;
//! use president_rs::game::Game;
//!
//! let mut game = Game::new(&GameConfig::default().with_seed(Some(3))).unwrap();
//! let standings = game.play_to_end().unwrap();
//! assert_eq!(standings.order.len(), 3);
//! ```
//!
//! ## TUI
//! Run the spectator TUI with:
//! ```sh
//! cargo run --bin president-rs
//! ```

pub mod cards;
pub mod config;
pub mod constraint;
pub mod deck;
pub mod game;
pub mod hand;
pub mod logging;
pub mod resolver;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
