//! Ratatui spectator table: configure a game in the menu, then step through
//! it turn by turn or let it autoplay.

pub mod app;
pub mod controller;
mod ui;
