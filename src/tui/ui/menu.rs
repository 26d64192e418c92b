use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____                 _     _            _
|  _ \ _ __ ___  ___ (_) __| | ___ _ __ | |_
| |_) | '__/ _ \/ __|| |/ _` |/ _ \ '_ \| __|
|  __/| | |  __/\__ \| | (_| |  __/ | | | |_
|_|   |_|  \___||___/|_|\__,_|\___|_| |_|\__|
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 70, f.area());
    let block = Block::default().title("president-rs").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Yellow))))
        .collect();

    let [logo_area, cfg_area] =
        Layout::vertical([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
            .areas(inner(area));

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, logo_area);

    let mut cfg_lines: Vec<Line> = vec![Line::from(Span::styled(
        "New game:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Deal  [Q] Quit  [Esc] Back  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, cfg_area);
}
