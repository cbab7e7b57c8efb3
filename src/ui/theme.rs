//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── lists ──────────────────────────────────────────────────
    pub fn class_style() -> Style {
        Style::default().fg(Color::White)
    }

    /// The class currently under inspection.
    pub fn focus_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── style panel ────────────────────────────────────────────
    pub fn own_heading_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn inherited_heading_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn css_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn link_style() -> Style {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn error_bar_style() -> Style {
        Style::default()
            .bg(Color::Red)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}
