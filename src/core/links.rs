//! Documentation and source links for a widget class.

use super::catalog::Catalog;
use super::widget::ClassId;

pub const DOCS_BASE_URL: &str = "https://textual.textualize.io/widgets/";
pub const SOURCE_BASE_URL: &str = "https://github.com/Textualize/textual/";
const WIDGETS_PATH: &str = "src/textual/widgets/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLinks {
    pub documentation: String,
    pub source: String,
}

impl ReferenceLinks {
    pub fn for_class(catalog: &Catalog, class: ClassId) -> Self {
        let widget = catalog.get(class);
        let snake = camel_to_snake(&widget.name);
        let file = widget
            .source
            .clone()
            .unwrap_or_else(|| format!("{WIDGETS_PATH}_{snake}.py"));
        Self {
            documentation: format!("{DOCS_BASE_URL}{snake}"),
            source: format!("{SOURCE_BASE_URL}blob/v{}/{file}", catalog.version()),
        }
    }
}

/// `TabbedContent` -> `tabbed_content`.
///
/// An underscore goes only where a lowercase ASCII letter meets an uppercase
/// one, so acronyms stay glued (`HTMLView` -> `htmlview`).
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }
    out
}
