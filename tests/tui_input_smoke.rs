use crossterm::event::KeyCode;
use president_rs::tui::app::{AppState, InputAction, Scene};
use president_rs::tui::controller::handle_key;

fn setup_table_app() -> AppState {
    let mut app = AppState::default();
    app.cfg_seed = Some(17);
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_num_players, 4);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.game.as_ref().map(|g| g.players().len()), Some(4));
}

#[test]
fn menu_cancel_needs_a_game() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuCancel);
    assert!(matches!(app.scene, Scene::Menu));
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(matches!(app.scene, Scene::Menu));
    let _ = app.handle_input(InputAction::MenuCancel);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn space_plays_a_turn() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    let game = app.game.as_ref().unwrap();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.round_number(), 1);
}

#[test]
fn quit_key_reports_exit() {
    let mut app = setup_table_app();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    let mut app = AppState::default();
    assert!(handle_key(&mut app, KeyCode::Char('Q')));
}

#[test]
fn focus_wraps_across_seats() {
    let mut app = setup_table_app();
    let n = app.game.as_ref().unwrap().players().len();
    assert!(n >= 2);
    app.focus = n - 1;
    let _ = app.handle_input(InputAction::FocusNext);
    assert_eq!(app.focus, 0);
    let _ = app.handle_input(InputAction::FocusPrev);
    assert_eq!(app.focus, n - 1);
    assert!(!handle_key(&mut app, KeyCode::Char('2')));
    assert_eq!(app.focus, 1);
}
