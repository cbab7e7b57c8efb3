//! Class catalog — the read-only adapter over the host framework's classes.
//!
//! A catalog is ingested once at startup from a JSON document (either the one
//! bundled into the binary or a file passed with `--catalog`) and never
//! changes afterwards.  Every question the rest of the app asks about a class
//! ("who is your parent?", "what CSS do you declare?", "what do you compose?")
//! is answered here.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use super::error::{DissectError, Result};
use super::widget::{ClassId, WidgetClass};

/// Catalog compiled into the binary: the Textual widget hierarchy.
const BUNDLED_CATALOG: &str = include_str!("../../data/textual.json");

// ───────────────────────────────────────── document ──────────

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "default_framework")]
    pub framework: String,
    #[serde(default)]
    pub version: String,
    /// Class focused at startup when the user names none.
    #[serde(default)]
    pub default: Option<String>,
    pub classes: Vec<ClassRecord>,
}

/// One class as written in the catalog file.  Relations are by name.
#[derive(Debug, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub default_css: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "listed_by_default")]
    pub listed: bool,
}

fn default_framework() -> String {
    "textual".to_string()
}

fn listed_by_default() -> bool {
    true
}

// ───────────────────────────────────────── catalog ───────────

/// Arena of every known widget class plus a name index.
#[derive(Debug)]
pub struct Catalog {
    version: String,
    default: Option<ClassId>,
    classes: Vec<WidgetClass>,
    by_name: HashMap<String, ClassId>,
}

impl Catalog {
    /// The catalog shipped inside the binary.
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("bundled catalog is malformed")
    }

    /// Read and ingest a catalog file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading catalog {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(text).context("parsing catalog JSON")?;
        Ok(Self::from_document(doc)?)
    }

    /// Resolve names into handles and freeze the result.
    ///
    /// Parents and children must be defined by the same document.  Parent
    /// cycles are accepted here; they surface when a chain is built through them.
    pub fn from_document(doc: CatalogDocument) -> Result<Self> {
        if doc.classes.is_empty() {
            return Err(DissectError::EmptyCatalog);
        }

        let mut by_name = HashMap::with_capacity(doc.classes.len());
        for (i, record) in doc.classes.iter().enumerate() {
            if by_name.insert(record.name.clone(), ClassId(i)).is_some() {
                return Err(DissectError::DuplicateClass(record.name.clone()));
            }
        }
        let resolve = |name: &str| {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| DissectError::NotFound(name.to_string()))
        };

        let mut classes = Vec::with_capacity(doc.classes.len());
        for record in doc.classes {
            let parent = record.parent.as_deref().map(resolve).transpose()?;
            let children = record
                .children
                .iter()
                .map(|c| resolve(c))
                .collect::<Result<Vec<_>>>()?;
            classes.push(WidgetClass {
                default_css: normalize_css(record.default_css.as_deref().unwrap_or_default()),
                name: record.name,
                parent,
                children,
                listed: record.listed,
                source: record.source,
            });
        }
        let default = doc.default.as_deref().map(resolve).transpose()?;

        tracing::info!(
            framework = %doc.framework,
            version = %doc.version,
            classes = classes.len(),
            "catalog loaded"
        );

        Ok(Self {
            version: doc.version,
            default,
            classes,
            by_name,
        })
    }

    // ── lookups ──────────────────────────────────────────────────

    /// Resolve a class name.
    pub fn lookup(&self, name: &str) -> Result<ClassId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| DissectError::NotFound(name.to_string()))
    }

    pub fn get(&self, id: ClassId) -> &WidgetClass {
        &self.classes[id.0]
    }

    pub fn name(&self, id: ClassId) -> &str {
        &self.get(id).name
    }

    /// Direct base class; `None` for roots.
    pub fn parent_of(&self, id: ClassId) -> Option<ClassId> {
        self.get(id).parent
    }

    /// CSS declared on exactly this class, never merged with ancestors.
    pub fn own_style_text(&self, id: ClassId) -> &str {
        &self.get(id).default_css
    }

    pub fn declared_children(&self, id: ClassId) -> &[ClassId] {
        &self.get(id).children
    }

    // ── enumeration ──────────────────────────────────────────────

    /// All classes in document order.
    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len()).map(ClassId)
    }

    /// Classes offered in the widget picker, in document order.
    pub fn listed(&self) -> Vec<ClassId> {
        self.ids().filter(|&id| self.get(id).listed).collect()
    }

    /// Startup focus: the document's default, else the first listed class,
    /// else the first class.
    pub fn default_class(&self) -> ClassId {
        self.default
            .or_else(|| self.ids().find(|&id| self.get(id).listed))
            .unwrap_or(ClassId(0))
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

// ───────────────────────────────────────── css text ──────────

/// Indentation is ASCII spaces and tabs only; other whitespace is content.
const MARGIN: [char; 2] = [' ', '\t'];

fn is_blank(line: &str) -> bool {
    line.trim_start_matches(MARGIN).is_empty()
}

/// Strip the common indentation of non-blank lines, then surrounding blank
/// space.  Lines of only spaces and tabs become empty.
pub fn normalize_css(raw: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in raw.lines().filter(|l| !is_blank(l)) {
        let indent = &line[..line.len() - line.trim_start_matches(MARGIN).len()];
        margin = Some(match margin {
            None => indent,
            Some(m) => common_prefix(m, indent),
        });
    }
    let margin = margin.unwrap_or("");

    raw.lines()
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::SCENARIO;

    #[test]
    fn answers_parent_style_and_children() {
        let catalog = Catalog::from_json(SCENARIO).unwrap();
        let root = catalog.lookup("Root").unwrap();
        let button = catalog.lookup("Button").unwrap();
        let checkbox = catalog.lookup("Checkbox").unwrap();

        assert_eq!(catalog.parent_of(checkbox), Some(button));
        assert_eq!(catalog.parent_of(root), None);
        assert_eq!(catalog.own_style_text(checkbox), "width: 10;");
        assert_eq!(catalog.own_style_text(button), "");
        assert_eq!(catalog.declared_children(checkbox), &[button]);
        assert!(catalog.declared_children(button).is_empty());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let catalog = Catalog::from_json(SCENARIO).unwrap();
        assert_eq!(
            catalog.lookup("Unknown"),
            Err(DissectError::NotFound("Unknown".into()))
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let doc: CatalogDocument = serde_json::from_str(r#"{ "classes": [] }"#).unwrap();
        assert_eq!(
            Catalog::from_document(doc).unwrap_err(),
            DissectError::EmptyCatalog
        );
    }

    #[test]
    fn dangling_parent_is_rejected() {
        let doc: CatalogDocument =
            serde_json::from_str(r#"{ "classes": [{ "name": "A", "parent": "Ghost" }] }"#)
                .unwrap();
        assert_eq!(
            Catalog::from_document(doc).unwrap_err(),
            DissectError::NotFound("Ghost".into())
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let doc: CatalogDocument =
            serde_json::from_str(r#"{ "classes": [{ "name": "A" }, { "name": "A" }] }"#).unwrap();
        assert_eq!(
            Catalog::from_document(doc).unwrap_err(),
            DissectError::DuplicateClass("A".into())
        );
    }

    #[test]
    fn default_falls_back_to_first_listed() {
        let catalog = Catalog::from_json(SCENARIO).unwrap();
        assert_eq!(catalog.name(catalog.default_class()), "Button");
        assert_eq!(catalog.listed().len(), 2);
    }

    #[test]
    fn css_is_dedented_and_trimmed() {
        let raw = "\n    Button {\n        width: auto;\n\n        &:hover { tint: red; }\n    }\n    ";
        assert_eq!(
            normalize_css(raw),
            "Button {\n    width: auto;\n\n    &:hover { tint: red; }\n}"
        );
        assert_eq!(normalize_css("   "), "");
        assert_eq!(normalize_css("\tA {}\n  B {}"), "A {}\n  B {}");
    }

    #[test]
    fn only_spaces_and_tabs_count_as_margin() {
        // An em space is content, so it pins the margin at zero.
        assert_eq!(
            normalize_css("    a\n\u{2003}\n    b"),
            "a\n\u{2003}\n    b"
        );
        assert_eq!(normalize_css("  a\n\u{2003} b"), "a\n\u{2003} b");
        assert_eq!(normalize_css("  a\n \t\n  b"), "a\n\nb");
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.ids().count() > 30);
        for name in ["Button", "Checkbox", "DataTable", "TabbedContent", "Widget", "DOMNode"] {
            assert!(catalog.lookup(name).is_ok(), "{name} missing from bundled catalog");
        }
    }
}
