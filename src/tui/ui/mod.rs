//! UI rendering using ratatui.

mod board;
mod palette;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use noughts::Difficulty;

use super::app::App;
use palette::Palette;

/// Draws the full frame and records the board hitboxes on the app.
pub fn draw(f: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.session().theme());

    // Paint the whole frame in the theme's base colors first.
    let backdrop =
        Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(backdrop, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Noughts — Tic Tac Toe")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let hitboxes = board::render_board(f, chunks[1], app.session(), *app.cursor(), &palette);
    app.set_cell_hitboxes(hitboxes);

    let status = Paragraph::new(app.session().status_line())
        .style(Style::default().fg(palette.status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    render_settings(f, chunks[3], app, &palette);

    let help =
        Paragraph::new("1-9 / Arrows+Enter / Click: Move | R: Restart | T: Theme | D: Difficulty | Q: Quit")
            .style(Style::default().fg(palette.grid))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

/// Settings line: theme label, difficulty selector, and the notice that
/// the difficulty has no gameplay effect yet.
fn render_settings(f: &mut Frame, area: ratatui::layout::Rect, app: &App, palette: &Palette) {
    let selected = app.session().difficulty();

    let mut spans = vec![Span::raw(format!(
        "Theme: {}  |  Difficulty: ",
        app.session().theme().label()
    ))];
    for (i, option) in Difficulty::iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if option == selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.grid)
        };
        spans.push(Span::styled(format!("[{}]", option.label()), style));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "AI opponent by difficulty is not implemented yet",
            Style::default().fg(palette.grid),
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(widget, area);
}
