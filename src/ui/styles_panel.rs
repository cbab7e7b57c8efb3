//! Default CSS panel — one section per inheritance chain entry.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::core::{
    catalog::Catalog,
    styles::{StyleEntry, StyleOrigin},
};

use super::theme::Theme;

pub const NO_CSS: &str = "(no default CSS)";

/// Section heading, e.g. `"Checkbox (own)"` or `"Widget (inherited, 2 up)"`.
pub fn heading(catalog: &Catalog, entry: &StyleEntry) -> String {
    let name = catalog.name(entry.class);
    match entry.origin() {
        StyleOrigin::Own => format!("{name} (own)"),
        StyleOrigin::Inherited { depth } => format!("{name} (inherited, {depth} up)"),
    }
}

/// Styled lines for every entry, separated by a blank line.
pub fn style_lines<'a>(catalog: &Catalog, entries: &'a [StyleEntry]) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        let heading_style = match entry.origin() {
            StyleOrigin::Own => Theme::own_heading_style(),
            StyleOrigin::Inherited { .. } => Theme::inherited_heading_style(),
        };
        lines.push(Line::from(Span::styled(
            format!("── {} ──", heading(catalog, entry)),
            heading_style,
        )));
        if entry.is_empty() {
            lines.push(Line::from(Span::styled(NO_CSS, Theme::muted_style())));
        } else {
            lines.extend(
                entry
                    .css
                    .lines()
                    .map(|l| Line::from(Span::styled(l, Theme::css_style()))),
            );
        }
    }
    lines
}

pub struct StylesPanel<'a> {
    catalog: &'a Catalog,
    entries: &'a [StyleEntry],
    scroll: u16,
    block: Option<Block<'a>>,
}

impl<'a> StylesPanel<'a> {
    pub fn new(catalog: &'a Catalog, entries: &'a [StyleEntry]) -> Self {
        Self {
            catalog,
            entries,
            scroll: 0,
            block: None,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Total rendered line count, for clamping the scroll offset.
    pub fn line_count(catalog: &Catalog, entries: &[StyleEntry]) -> usize {
        style_lines(catalog, entries).len()
    }
}

impl<'a> Widget for StylesPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut paragraph =
            Paragraph::new(style_lines(self.catalog, self.entries)).scroll((self.scroll, 0));
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
