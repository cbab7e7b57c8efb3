//! Plain-text display surface for `--print`.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::app::navigation::DisplaySurface;
use crate::core::{catalog::Catalog, error::DissectError, focus::FocusView};

use super::styles_panel::{heading, NO_CSS};

/// Render a focus view as a plain report.
pub fn render_view(catalog: &Catalog, view: &FocusView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", catalog.name(view.focus));
    let _ = writeln!(out, "  documentation: {}", view.links.documentation);
    let _ = writeln!(out, "  source:        {}", view.links.source);

    out.push_str("\nInheritance chain\n");
    for (i, class) in view.chain.iter().enumerate() {
        let guide = if i == 0 {
            String::new()
        } else {
            format!("{}└─ ", "   ".repeat(i - 1))
        };
        let _ = writeln!(out, "  {guide}{}", catalog.name(class));
    }

    out.push_str("\nDefault CSS\n");
    for entry in &view.styles {
        let _ = writeln!(out, "── {} ──", heading(catalog, entry));
        if entry.is_empty() {
            let _ = writeln!(out, "{NO_CSS}");
        } else {
            let _ = writeln!(out, "{}", entry.css);
        }
        out.push('\n');
    }

    out.push_str("Child widgets\n");
    if view.children.is_empty() {
        out.push_str("  (none)\n");
    }
    for child in view.children.iter() {
        let _ = writeln!(out, "  {}", catalog.name(child));
    }
    out
}

/// Collects what the controller publishes so `main` can print it.
pub struct PlainSurface {
    catalog: Arc<Catalog>,
    pub output: Option<String>,
}

impl PlainSurface {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            output: None,
        }
    }
}

impl DisplaySurface for PlainSurface {
    fn publish(&mut self, view: &FocusView) {
        self.output = Some(render_view(&self.catalog, view));
    }

    // The controller hands the same error back to `main`, which exits with it.
    fn report(&mut self, _error: &DissectError) {
        self.output = None;
    }
}
