//! Board grid rendering and cell hitboxes.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;

use noughts::{Cell, GameSession, Mark, Position};

use super::palette::Palette;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the 3x3 grid centered in `area` and returns each cell's screen
/// rectangle in row-major order for mouse hit-testing.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    session: &GameSession,
    cursor: Position,
    palette: &Palette,
) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = row_bands(board_area);

    render_separator(f, rows[1], palette);
    render_separator(f, rows[3], palette);
    for band in [rows[0], rows[2], rows[4]] {
        let cols = column_bands(band);
        render_vertical_sep(f, cols[1], palette);
        render_vertical_sep(f, cols[3], palette);
    }

    let cells = cell_rects(board_area);
    for pos in Position::iter() {
        render_cell(f, cells[pos.index()], session, pos, cursor, palette);
    }
    cells
}

/// Computes the nine cell rectangles inside `area`, row-major.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let rows = row_bands(area);
    let mut rects = [Rect::default(); 9];
    for (band, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = column_bands(row_area);
        for (i, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[band * 3 + i] = cell;
        }
    }
    rects
}

fn row_bands(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area)
}

fn column_bands(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area)
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    session: &GameSession,
    pos: Position,
    cursor: Position,
    palette: &Palette,
) {
    let (text, mut style) = match session.board().get(pos) {
        Cell::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(palette.grid),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(win) = session.win()
        && win.contains(pos)
    {
        style = style.fg(palette.winning);
    }
    // The cursor marker only matters while moves are still possible.
    if pos == cursor && session.win().is_none() {
        style = style.bg(palette.cursor);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.grid));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(palette.grid))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rects_map_back_to_their_position() {
        let area = Rect::new(0, 0, 40, 11);
        let rects = cell_rects(area);
        for pos in Position::iter() {
            let rect = rects[pos.index()];
            assert!(rect.width > 0 && rect.height > 0);
            // The rect's own corner must hit-test back to the same cell.
            let hit = Position::iter().find(|p| {
                rects[p.index()].contains(ratatui::layout::Position::new(rect.x, rect.y))
            });
            assert_eq!(hit, Some(pos));
        }
    }

    #[test]
    fn cell_rects_do_not_overlap_separators() {
        let area = Rect::new(0, 0, 40, 11);
        let rects = cell_rects(area);
        // Middle row of cells starts below the first separator line.
        assert_eq!(rects[3].y, area.y + 4);
        assert_eq!(rects[6].y, area.y + 8);
    }
}
