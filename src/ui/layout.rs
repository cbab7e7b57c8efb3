//! Layout helpers — split the terminal area into panes.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of the widget picker column.
const PICKER_WIDTH: u16 = 25;

/// Screen regions:
///
/// ```text
/// ┌picker┐┌docs──────┐┌source────┐
/// │      │├chain─────┤├children──┤
/// │      │├default css──────────┤
/// └──────┘└─────────────────────┘
///  status bar
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub picker_area: Rect,
    pub docs_area: Rect,
    pub source_area: Rect,
    pub chain_area: Rect,
    pub children_area: Rect,
    pub styles_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PICKER_WIDTH), Constraint::Min(10)])
            .split(rows[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // links
                Constraint::Percentage(35), // chain + children
                Constraint::Min(3),         // default css
            ])
            .split(columns[1]);

        let halves = |r: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(r)
        };
        let links = halves(right[0]);
        let middle = halves(right[1]);

        Self {
            picker_area: columns[0],
            docs_area: links[0],
            source_area: links[1],
            chain_area: middle[0],
            children_area: middle[1],
            styles_area: right[2],
            status_area: rows[1],
        }
    }
}

/// Map a click inside a bordered list to a content row index (before scroll).
pub fn row_in_bordered(area: Rect, column: u16, row: u16) -> Option<usize> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    let top = area.y.saturating_add(1);
    let bottom = area.y.saturating_add(area.height.saturating_sub(1));
    if row < top || row >= bottom {
        return None;
    }
    Some((row - top) as usize)
}
