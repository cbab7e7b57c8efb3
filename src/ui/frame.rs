//! Whole-frame rendering: every pane drawn from the last published view.

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, Pane};

use super::{
    class_list::ClassList, layout::AppLayout, styles_panel::StylesPanel, theme::Theme,
};

fn pane_block(title: String, active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style(active))
}

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    state.terminal_area = frame.area();
    let layout = AppLayout::from_area(frame.area());
    let catalog = state.navigation.catalog();
    let screen = &mut state.screen;
    let view = screen.view.as_ref();
    let focus = view.map(|v| v.focus);

    let picker = ClassList::new(catalog, &screen.picker)
        .focus(focus)
        .active(state.pane == Pane::Picker)
        .block(pane_block("Widgets".into(), state.pane == Pane::Picker));
    frame.render_stateful_widget(picker, layout.picker_area, &mut screen.picker_cursor);

    let link = |url: Option<&str>| {
        Paragraph::new(Line::from(Span::styled(
            url.unwrap_or_default().to_string(),
            Theme::link_style(),
        )))
    };
    frame.render_widget(
        link(view.map(|v| v.links.documentation.as_str()))
            .block(pane_block("Documentation".into(), false)),
        layout.docs_area,
    );
    frame.render_widget(
        link(view.map(|v| v.links.source.as_str())).block(pane_block("Source Code".into(), false)),
        layout.source_area,
    );

    let chain = view.map(|v| v.chain.as_slice()).unwrap_or_default();
    let chain_list = ClassList::new(catalog, chain)
        .focus(focus)
        .tree_guides(true)
        .active(state.pane == Pane::Chain)
        .block(pane_block("Inheritance".into(), state.pane == Pane::Chain));
    frame.render_stateful_widget(chain_list, layout.chain_area, &mut screen.chain_cursor);

    let children = view.map(|v| v.children.as_slice()).unwrap_or_default();
    let child_list = ClassList::new(catalog, children)
        .active(state.pane == Pane::Children)
        .empty_text("(no child widgets)")
        .block(pane_block(
            format!("Child Widgets ({})", children.len()),
            state.pane == Pane::Children,
        ));
    frame.render_stateful_widget(child_list, layout.children_area, &mut screen.children_cursor);

    let styles = view.map(|v| v.styles.as_slice()).unwrap_or_default();
    let css_title = match focus {
        Some(id) => format!("Default CSS · {}", catalog.name(id)),
        None => "Default CSS".to_string(),
    };
    frame.render_widget(
        StylesPanel::new(catalog, styles)
            .scroll(screen.styles_scroll)
            .block(pane_block(css_title, state.pane == Pane::Styles)),
        layout.styles_area,
    );

    let status = match &screen.error {
        Some(err) => Paragraph::new(err.as_str()).style(Theme::error_bar_style()),
        None => Paragraph::new(state.config.status_bar_hint()).style(Theme::status_bar_style()),
    };
    frame.render_widget(status, layout.status_area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::AppConfig;
    use crate::core::fixtures;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draws_every_pane_for_the_focused_class() {
        let mut state = AppState::new(Arc::new(fixtures::scenario()), AppConfig::default());
        state
            .navigation
            .initialize("Checkbox", &mut state.screen)
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains(" Widgets "));
        assert!(text.contains("└─ Button"));
        assert!(text.contains("Child Widgets (1)"));
        assert!(text.contains("── Checkbox (own) ──"));
        assert!(text.contains("(no default CSS)"));
        assert!(text.contains("widgets/checkbox"));
        assert_eq!(state.terminal_area.width, 120);
    }

    #[test]
    fn error_replaces_status_hint() {
        let mut state = AppState::new(Arc::new(fixtures::scenario()), AppConfig::default());
        state
            .navigation
            .initialize("Checkbox", &mut state.screen)
            .unwrap();
        let _ = state.navigation.select_widget("Ghost", &mut state.screen);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(screen_text(&terminal).contains("widget class `Ghost` is not in the catalog"));
    }
}
