//! Input handling — maps key/mouse events to cursor moves and selections.
//!
//! Selections never touch the displayed view directly: they go through the
//! navigation controller, which republishes into `state.screen`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::widget::ClassId;
use crate::ui::layout::{row_in_bordered, AppLayout};
use crate::ui::styles_panel::StylesPanel;

use super::state::{AppState, Pane};

/// Rows scrolled per wheel notch in the CSS panel.
const WHEEL_STEP: u16 = 3;

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Home => {
            jump(state, 0);
            return;
        }
        KeyCode::End => {
            jump(state, usize::MAX);
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::NextPane => state.pane = state.pane.next(),
        Action::PrevPane => state.pane = state.pane.prev(),
        Action::MoveUp => move_cursor(state, false),
        Action::MoveDown => move_cursor(state, true),
        Action::Select => select_highlighted(state),
        Action::FocusParent => {
            let _ = state
                .navigation
                .select_from_chain(1, &mut state.screen);
        }
    }
}

/// Number of rows in the list shown by `pane`.
fn pane_len(state: &AppState, pane: Pane) -> usize {
    let view = state.screen.view.as_ref();
    match pane {
        Pane::Picker => state.screen.picker.len(),
        Pane::Chain => view.map_or(0, |v| v.chain.len()),
        Pane::Children => view.map_or(0, |v| v.children.len()),
        Pane::Styles => view.map_or(0, |v| StylesPanel::line_count(state.navigation.catalog(), &v.styles)),
    }
}

fn move_cursor(state: &mut AppState, down: bool) {
    let len = pane_len(state, state.pane);
    let screen = &mut state.screen;
    match state.pane {
        Pane::Styles => {
            let max = len.saturating_sub(1).min(u16::MAX as usize) as u16;
            screen.styles_scroll = if down {
                screen.styles_scroll.saturating_add(1).min(max)
            } else {
                screen.styles_scroll.saturating_sub(1)
            };
        }
        pane => {
            let cursor = match pane {
                Pane::Picker => &mut screen.picker_cursor,
                Pane::Chain => &mut screen.chain_cursor,
                _ => &mut screen.children_cursor,
            };
            if down {
                cursor.select_next(len);
            } else {
                cursor.select_prev();
            }
            if pane == Pane::Picker {
                preview_highlighted(state);
            }
        }
    }
}

fn jump(state: &mut AppState, target: usize) {
    let len = pane_len(state, state.pane);
    let row = target.min(len.saturating_sub(1));
    let screen = &mut state.screen;
    match state.pane {
        Pane::Picker => screen.picker_cursor.selected = row,
        Pane::Chain => screen.chain_cursor.selected = row,
        Pane::Children => screen.children_cursor.selected = row,
        Pane::Styles => screen.styles_scroll = row.min(u16::MAX as usize) as u16,
    }
    if state.pane == Pane::Picker {
        preview_highlighted(state);
    }
}

/// The picker previews as you move, like a highlighted option.  Landing on
/// the current focus again leaves the other panes' cursors alone.
fn preview_highlighted(state: &mut AppState) {
    let screen = &state.screen;
    let highlighted = screen.picker.get(screen.picker_cursor.selected).copied();
    if highlighted.is_some() && highlighted != state.navigation.focus() {
        select_highlighted(state);
    }
}

/// Focus whatever the active pane has highlighted.
fn select_highlighted(state: &mut AppState) {
    let screen = &state.screen;
    match state.pane {
        Pane::Picker => {
            if let Some(&id) = screen.picker.get(screen.picker_cursor.selected) {
                select_class(state, id);
            }
        }
        Pane::Chain => {
            let index = screen.chain_cursor.selected;
            let _ = state.navigation.select_from_chain(index, &mut state.screen);
        }
        Pane::Children => {
            let child = screen
                .view
                .as_ref()
                .and_then(|v| v.children.get(screen.children_cursor.selected));
            if let Some(id) = child {
                select_class(state, id);
            }
        }
        Pane::Styles => {}
    }
}

/// Picker and child rows select by name, same as any other caller.
fn select_class(state: &mut AppState, id: ClassId) {
    let name = state.navigation.catalog().name(id).to_string();
    let _ = state.navigation.select_widget(&name, &mut state.screen);
}

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let layout = AppLayout::from_area(state.terminal_area);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hits = [
                (Pane::Picker, layout.picker_area),
                (Pane::Chain, layout.chain_area),
                (Pane::Children, layout.children_area),
            ];
            for (pane, area) in hits {
                let Some(content_row) = row_in_bordered(area, column, row) else {
                    continue;
                };
                state.pane = pane;
                let screen = &mut state.screen;
                let cursor = match pane {
                    Pane::Picker => &mut screen.picker_cursor,
                    Pane::Chain => &mut screen.chain_cursor,
                    _ => &mut screen.children_cursor,
                };
                let clicked = content_row + cursor.offset;
                if clicked < pane_len(state, pane) {
                    set_cursor(state, pane, clicked);
                    select_highlighted(state);
                }
                return;
            }
            if row_in_bordered(layout.styles_area, column, row).is_some() {
                state.pane = Pane::Styles;
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            if row_in_bordered(layout.styles_area, column, row).is_none() {
                return;
            }
            let down = mouse.kind == MouseEventKind::ScrollDown;
            let previous = state.pane;
            state.pane = Pane::Styles;
            for _ in 0..WHEEL_STEP {
                move_cursor(state, down);
            }
            state.pane = previous;
        }
        _ => {}
    }
}

fn set_cursor(state: &mut AppState, pane: Pane, row: usize) {
    let screen = &mut state.screen;
    match pane {
        Pane::Picker => screen.picker_cursor.selected = row,
        Pane::Chain => screen.chain_cursor.selected = row,
        Pane::Children => screen.children_cursor.selected = row,
        Pane::Styles => {}
    }
}
