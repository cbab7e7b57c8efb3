//! Small catalogs shared by unit tests.

use super::catalog::Catalog;

/// Root <- Button <- Checkbox, with Checkbox composing a Button.
pub const SCENARIO: &str = r#"{
    "version": "1.0.0",
    "classes": [
        { "name": "Root", "default_css": "background: black;", "listed": false },
        { "name": "Button", "parent": "Root" },
        { "name": "Checkbox", "parent": "Button", "default_css": "width: 10;", "children": ["Button"] }
    ]
}"#;

/// A <- B <- A: parent links that never reach a root.
pub const CYCLIC: &str = r#"{
    "classes": [
        { "name": "Leaf", "parent": "A" },
        { "name": "A", "parent": "B" },
        { "name": "B", "parent": "A" }
    ]
}"#;

pub fn scenario() -> Catalog {
    Catalog::from_json(SCENARIO).unwrap()
}

pub fn cyclic() -> Catalog {
    Catalog::from_json(CYCLIC).unwrap()
}
