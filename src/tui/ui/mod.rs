mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::layout::Rect;
use ratatui::prelude::Frame;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub(crate) fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }
    if let Some(err) = app.error() {
        draw_error_line(f, err);
    }
}

// Last terminal row, over whatever the scene drew.
fn draw_error_line(f: &mut Frame, err: &str) {
    let size = f.area();
    if size.height == 0 {
        return;
    }
    let row = Rect { x: size.x, y: size.y + size.height - 1, width: size.width, height: 1 };
    let para = Paragraph::new(format!("Error: {err}")).style(Style::default().fg(Color::Red));
    f.render_widget(para, row);
}
