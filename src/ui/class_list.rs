//! Scrollable list of widget classes.
//!
//! One widget serves the picker, the inheritance chain and the child list.
//! With [`ClassList::tree_guides`] each row is indented one level deeper
//! than the previous one, which is how the chain reads as a tree from the
//! focused class down to its root.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::{catalog::Catalog, widget::ClassId};

use super::theme::Theme;

// ───────────────────────────────────────── state ─────────────

/// Highlighted row and scroll offset of one list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selected row inside a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}

// ───────────────────────────────────────── widget ────────────

pub struct ClassList<'a> {
    catalog: &'a Catalog,
    rows: &'a [ClassId],
    focus: Option<ClassId>,
    tree_guides: bool,
    active: bool,
    empty_text: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> ClassList<'a> {
    pub fn new(catalog: &'a Catalog, rows: &'a [ClassId]) -> Self {
        Self {
            catalog,
            rows,
            focus: None,
            tree_guides: false,
            active: false,
            empty_text: "",
            block: None,
        }
    }

    /// Draw this class in the focus colour.
    pub fn focus(mut self, focus: Option<ClassId>) -> Self {
        self.focus = focus;
        self
    }

    pub fn tree_guides(mut self, on: bool) -> Self {
        self.tree_guides = on;
        self
    }

    /// Only the active pane shows its selection bar.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Placeholder drawn when there are no rows.
    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row_prefix(&self, index: usize) -> String {
        if !self.tree_guides || index == 0 {
            return String::new();
        }
        format!("{}└─ ", "   ".repeat(index - 1))
    }
}

impl<'a> StatefulWidget for ClassList<'a> {
    type State = ListCursor;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if self.rows.is_empty() {
            let line = Line::from(Span::styled(self.empty_text, Theme::muted_style()));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        state.selected = state.selected.min(self.rows.len() - 1);
        state.clamp_scroll(inner.height as usize);

        let visible = self
            .rows
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (index, &class)) in visible.enumerate() {
            let y = inner.y + i as u16;
            let style = if self.active && index == state.selected {
                Theme::selected_style()
            } else if Some(class) == self.focus {
                Theme::focus_style()
            } else {
                Theme::class_style()
            };
            let line = Line::from(vec![
                Span::styled(self.row_prefix(index), Theme::muted_style()),
                Span::styled(self.catalog.name(class).to_string(), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
