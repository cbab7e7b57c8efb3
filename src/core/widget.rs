//! Immutable snapshot of one widget class.
//!
//! Classes live in an arena owned by [`Catalog`](super::catalog::Catalog) and
//! point at each other through [`ClassId`] handles, the same way a tree arena
//! links nodes by index.  Nothing outside the catalog loader ever mutates them.

// ───────────────────────────────────────── handle ────────────

/// Index into the catalog's class arena.
///
/// Only the catalog hands these out, so a `ClassId` obtained from a catalog
/// is always valid for that catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(super) usize);

// ───────────────────────────────────────── class ─────────────

/// One class in the host framework's component hierarchy.
#[derive(Debug, Clone)]
pub struct WidgetClass {
    pub name: String,
    /// Direct base class.  `None` only for the hierarchy roots.
    pub parent: Option<ClassId>,
    /// Style text declared directly on this class, already normalised.
    /// Empty means "declares no defaults".
    pub default_css: String,
    /// Child widget classes built at compose time, in declaration order.
    /// May contain repeats; [`discover`](super::children::discover) collapses them.
    pub children: Vec<ClassId>,
    /// Shown in the widget picker.
    pub listed: bool,
    /// Explicit source path relative to the framework repository root.
    pub source: Option<String>,
}
