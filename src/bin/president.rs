use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use president_rs::config::GameConfig;
use president_rs::game::Game;
use president_rs::logging::init_tracing;
use president_rs::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Without a TTY, play one game and print the narration.
fn run_headless() -> Result<(), Box<dyn Error>> {
    init_tracing(std::env::var_os("PRESIDENT_VERBOSE").is_some());
    let config = GameConfig::from_env()?;
    let mut game = Game::new(&config)?;
    println!("president-rs {}: {}", president_rs::VERSION, config.player_names.join(", "));
    if let Some(leader) = game.players().first() {
        println!("{} holds the Q♥ and leads.", leader.name());
    }
    let mut printed = 0;
    while !game.is_over() {
        game.step()?;
        for entry in &game.history()[printed..] {
            println!("{entry}");
        }
        printed = game.history().len();
    }
    if let Some(standings) = game.standings() {
        println!("\nStandings:\n{standings}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    if !io::stdout().is_terminal() {
        return run_headless();
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}
