use crate::config::GameConfig;
use crate::game::{Game, GameError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Step,
    ToggleAutoplay,
    NewGame,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // None until a config is applied from the menu
    pub game: Option<Game>,
    pub config: GameConfig,
    // UI focus seat index into the live rotation
    pub focus: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_seed: Option<u64>,
    pub cfg_autoplay_delay_ms: u64,
    pub autoplay_delay_ms: u64,
    autoplay: bool,
    last_auto_step: Option<Instant>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = GameConfig::default();
        let default_delay = 400;
        Self {
            scene: Scene::Menu,
            game: None,
            cfg_num_players: config.num_players(),
            cfg_seed: config.seed,
            config,
            focus: 0,
            menu_index: 0,
            cfg_autoplay_delay_ms: default_delay,
            autoplay_delay_ms: default_delay,
            autoplay: false,
            last_auto_step: None,
            help_open: false,
            history_open: false,
            history_offset: 0,
            error: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn game_running(&self) -> bool {
        self.game.as_ref().is_some_and(|g| !g.is_over())
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let len = self.game.as_ref().map_or(0, |g| g.history().len());
                    let max_offset = len.saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Step => self.scene == Scene::Table && self.step(),
            InputAction::ToggleAutoplay => {
                if self.scene == Scene::Table && self.game_running() {
                    self.autoplay = !self.autoplay;
                    self.last_auto_step = None;
                }
                false
            }
            InputAction::NewGame => {
                if self.scene == Scene::Table {
                    self.new_game();
                }
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSeat(idx) => {
                if self.scene == Scene::Table {
                    self.set_focus(idx);
                }
                false
            }
        }
    }

    /// Deal a fresh game from the applied config.
    pub fn new_game(&mut self) {
        self.autoplay = false;
        self.history_offset = 0;
        self.focus = 0;
        match Game::new(&self.config) {
            Ok(game) => {
                self.game = Some(game);
                self.error = None;
            }
            Err(err) => {
                self.game = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Advance one turn. Returns true if a turn was played.
    pub fn step(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        match game.step() {
            Ok(()) => {
                let seats = game.players().len();
                if seats > 0 && self.focus >= seats {
                    self.focus = seats - 1;
                }
                if game.is_over() {
                    self.autoplay = false;
                }
                true
            }
            Err(GameError::Finished) => {
                self.autoplay = false;
                false
            }
            Err(err) => {
                self.autoplay = false;
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Called by the controller on every tick; plays a turn when autoplay is
    /// on and the delay has elapsed.
    pub fn on_tick(&mut self) {
        if self.scene != Scene::Table || !self.autoplay {
            return;
        }
        let delay = Duration::from_millis(self.autoplay_delay_ms);
        if self.last_auto_step.is_some_and(|at| at.elapsed() < delay) {
            return;
        }
        self.last_auto_step = Some(Instant::now());
        self.step();
    }

    fn seats(&self) -> usize {
        self.game.as_ref().map_or(0, |g| g.players().len())
    }

    pub fn focus_next(&mut self) {
        let n = self.seats();
        if n == 0 {
            return;
        }
        self.focus = (self.focus + 1) % n;
    }

    pub fn focus_prev(&mut self) {
        let n = self.seats();
        if n == 0 {
            return;
        }
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus(&mut self, idx: usize) {
        let n = self.seats();
        if n == 0 {
            return;
        }
        self.focus = idx % n;
    }
}
