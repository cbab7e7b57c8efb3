//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! The focused class itself is owned by the [`NavigationController`]; the
//! screen only keeps the last view it was handed.

use std::sync::Arc;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{catalog::Catalog, error::DissectError, focus::FocusView, widget::ClassId};
use crate::ui::class_list::ListCursor;

use super::navigation::{DisplaySurface, NavigationController};

/// Which pane receives movement and selection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Picker,
    Chain,
    Children,
    Styles,
}

impl Pane {
    const ORDER: [Pane; 4] = [Pane::Picker, Pane::Chain, Pane::Children, Pane::Styles];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|&p| p == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|&p| p == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The TUI's display surface: whatever the controller last published, plus
/// per-pane cursors that are reset on every publish.
#[derive(Debug, Default)]
pub struct Screen {
    pub view: Option<FocusView>,
    /// Last rejected selection, shown in the status bar until the next publish.
    pub error: Option<String>,
    /// Classes offered in the picker.
    pub picker: Vec<ClassId>,
    pub picker_cursor: ListCursor,
    pub chain_cursor: ListCursor,
    pub children_cursor: ListCursor,
    pub styles_scroll: u16,
}

impl Screen {
    pub fn new(picker: Vec<ClassId>) -> Self {
        Self {
            picker,
            ..Self::default()
        }
    }
}

impl DisplaySurface for Screen {
    fn publish(&mut self, view: &FocusView) {
        self.view = Some(view.clone());
        self.error = None;
        self.chain_cursor = ListCursor::default();
        self.children_cursor = ListCursor::default();
        self.styles_scroll = 0;
        if let Some(i) = self.picker.iter().position(|&id| id == view.focus) {
            self.picker_cursor.selected = i;
        }
    }

    fn report(&mut self, error: &DissectError) {
        self.error = Some(error.to_string());
    }
}

/// Top-level application state.
pub struct AppState {
    pub navigation: NavigationController,
    pub screen: Screen,
    pub pane: Pane,
    pub config: AppConfig,
    pub should_quit: bool,
    /// Size of the last drawn frame, used for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, config: AppConfig) -> Self {
        Self {
            screen: Screen::new(catalog.listed()),
            navigation: NavigationController::new(catalog),
            pane: Pane::default(),
            config,
            should_quit: false,
            terminal_area: Rect::default(),
        }
    }
}
