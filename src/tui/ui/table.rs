use crate::cards::{Card, Suit};
use crate::game::{Game, Player};
use crate::round::RoundState;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const PILE_SLOTS: usize = 4;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let Some(game) = app.game.as_ref() else {
        let para = Paragraph::new("No game dealt. Press M for the menu.")
            .block(Block::default().title("president-rs").borders(Borders::ALL));
        f.render_widget(para, f.area());
        return;
    };

    let [header_area, pile_area, seats_area, status_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Min(3),
        Constraint::Length(4),
    ])
    .areas(f.area());

    // Header
    let constraint = game
        .round()
        .map(|r| r.constraint().to_string())
        .unwrap_or_else(|| "new round".to_string());
    let header_lines = vec![
        Line::from(format!(
            "Round {}   Players left: {}   Autoplay: {}",
            game.round_number(),
            game.players().len(),
            if app.autoplay() { "on" } else { "off" },
        )),
        Line::from(format!("Mode: {constraint}   {}", finish_line(game))),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("president-rs").borders(Borders::ALL));
    f.render_widget(header, header_area);

    // Pile: the most recent cards, oldest on the left
    let pile = game.round().map(|r| r.pile()).unwrap_or(&[]);
    let pile_block =
        Block::default().title(format!("Pile ({} cards)", pile.len())).borders(Borders::ALL);
    let pile_inner = inner(pile_area);
    f.render_widget(pile_block, pile_area);
    let shown = &pile[pile.len().saturating_sub(PILE_SLOTS)..];
    let slots = Layout::horizontal([Constraint::Length(8); PILE_SLOTS]).split(pile_inner);
    for (i, slot) in slots.iter().enumerate() {
        let highlight = i + 1 == shown.len();
        render_card_widget(f, *slot, shown.get(i).copied(), highlight.then_some(Color::Yellow));
    }

    // Seats: top row left-to-right, bottom row right-to-left
    let total = game.players().len();
    let top_cols = (total + 1) / 2;
    let bottom_cols = total - top_cols;
    let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(inner(seats_area));
    f.render_widget(Block::default().title("Table").borders(Borders::ALL), seats_area);
    for (r, cols) in [top_cols, bottom_cols].into_iter().enumerate() {
        if cols == 0 {
            continue;
        }
        let col_chunks =
            Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols]).split(rows[r]);
        for (c, seat_area) in col_chunks.iter().enumerate() {
            let idx = if r == 0 { c } else { total - 1 - c };
            if let Some(p) = game.players().get(idx) {
                render_seat(f, *seat_area, app, game, idx, p);
            }
        }
    }

    // Status bar
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(inner(status_area));
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let left_info = match game.standings() {
        Some(standings) => vec![
            Line::from(format!(
                "Game over. President: {}",
                standings.president().unwrap_or("-")
            )),
            Line::from("N deals again, M changes the table."),
        ],
        None => vec![
            Line::from(format!("Next: {}", acting_name(game).unwrap_or("-"))),
            Line::from(
                game.history().last().map(|e| e.to_string()).unwrap_or_else(|| "Dealt.".into()),
            ),
        ],
    };
    let right_keys = vec![
        Line::from("Space step • P autoplay • N new"),
        Line::from("? help • H history • M menu"),
    ];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), left);
    f.render_widget(Paragraph::new(right_keys).alignment(Alignment::Right), right);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app, game);
    }
}

fn acting_seat(game: &Game) -> Option<usize> {
    match game.round().map(|r| r.state()) {
        Some(RoundState::Awaiting(i)) => Some(i),
        Some(RoundState::Ended(_)) => None,
        // next round is led by the head of the rotation
        None => (!game.is_over()).then_some(0),
    }
}

fn acting_name(game: &Game) -> Option<&str> {
    acting_seat(game).and_then(|i| game.players().get(i)).map(Player::name)
}

fn finish_line(game: &Game) -> String {
    if game.finish_order().is_empty() {
        return String::new();
    }
    format!("Out: {}", game.finish_order().join(", "))
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, game: &Game, idx: usize, p: &Player) {
    let round = game.round();
    let acting = acting_seat(game) == Some(idx);
    let passed = round.is_some_and(|r| r.has_passed(idx));
    let locked = round.is_some_and(|r| r.constraint().targets(idx));

    let mut title = p.name().to_string();
    if idx == app.focus {
        title.push_str(" [Focus]");
    }
    if locked {
        title.push_str(" [Locked]");
    }
    if passed {
        title.push_str(" [Passed]");
    }
    if acting {
        title.push_str(" [Act]");
    }
    let border = if passed {
        Color::DarkGray
    } else if locked {
        Color::LightRed
    } else if acting {
        Color::Yellow
    } else if idx == app.focus {
        Color::Cyan
    } else {
        Color::Reset
    };
    let block = Block::default().title(title).borders(Borders::ALL).border_style(border);

    let mut lines = vec![Line::from(format!("Cards: {}", p.hand().len()))];
    if idx == app.focus {
        let mut spans = Vec::with_capacity(p.hand().len() * 2);
        for card in p.hand().cards() {
            spans.push(card_span(*card));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_history(f: &mut Frame, app: &AppState, game: &Game) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let history = game.history();
    let end = history.len().saturating_sub(app.history_offset());
    let start = end.saturating_sub(AppState::HISTORY_PAGE_SIZE);
    let mut lines: Vec<Line> = if start == end {
        vec![Line::from("No history yet.")]
    } else {
        history[start..end].iter().map(|e| Line::from(e.to_string())).collect()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space: play one turn"),
        Line::from("- P: autoplay on / off"),
        Line::from("- N: deal a new game"),
        Line::from("- ] / [: focus next / prev"),
        Line::from("- 1-8: focus seat"),
        Line::from("- H: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- Play equal or higher; the leader may open with a set"),
        Line::from("- Matching the last play forces the next player to match or pass"),
        Line::from("- A 2 or four of a kind ends the round"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: deal with these settings"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn card_span(c: Card) -> Span<'static> {
    Span::styled(c.to_string(), suit_style(c.suit()))
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = match card {
        Some(c) => Line::from(card_span(c)),
        None => Line::from(Span::styled("·", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center).block(block), area);
}
