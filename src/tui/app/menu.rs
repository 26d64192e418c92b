use crate::config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Seed,
    AutoplayDelayMs,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Players, MenuItem::Seed, MenuItem::AutoplayDelayMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
            MenuItem::AutoplayDelayMs => format!("Autoplay Delay (ms): {}", app.cfg_autoplay_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(1, |s| s.saturating_add(1)));
            }
            MenuItem::AutoplayDelayMs => {
                app.cfg_autoplay_delay_ms = app.cfg_autoplay_delay_ms.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > MIN_PLAYERS {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::Seed => {
                // stepping below 1 switches back to a random shuffle
                app.cfg_seed = app.cfg_seed.and_then(|s| s.checked_sub(1)).filter(|&s| s > 0);
            }
            MenuItem::AutoplayDelayMs => {
                app.cfg_autoplay_delay_ms = app.cfg_autoplay_delay_ms.saturating_sub(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu if self.game.is_some() => super::Scene::Table,
            super::Scene::Menu => super::Scene::Menu,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_num_players = self.config.num_players();
        self.cfg_seed = self.config.seed;
        self.cfg_autoplay_delay_ms = self.autoplay_delay_ms;
        self.scene = super::Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        self.cfg_num_players = self.cfg_num_players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.autoplay_delay_ms = self.cfg_autoplay_delay_ms;
        self.config = GameConfig::default().with_players(self.cfg_num_players).with_seed(self.cfg_seed);
        self.new_game();
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        if self.game.is_some() {
            self.scene = super::Scene::Table;
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
