//! Per-ancestor default CSS.
//!
//! One entry per chain position, each carrying only what that class declares
//! itself.  Text is never merged across ancestors, so the display can tell a
//! class's own rules apart from the ones it inherits.

use super::catalog::Catalog;
use super::chain::InheritanceChain;
use super::widget::ClassId;

/// Where an entry sits relative to the focused class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOrigin {
    /// Declared on the focused class.
    Own,
    /// Declared on an ancestor `depth` steps up the chain.
    Inherited { depth: usize },
}

/// Default CSS declared directly on the class at `position` in a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub position: usize,
    pub class: ClassId,
    /// Empty when the class declares no defaults.
    pub css: String,
}

impl StyleEntry {
    pub fn origin(&self) -> StyleOrigin {
        match self.position {
            0 => StyleOrigin::Own,
            depth => StyleOrigin::Inherited { depth },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }
}

/// Collect the own style text of every class in `chain`, in chain order.
///
/// Output length always equals chain length, including classes with no CSS.
pub fn aggregate(catalog: &Catalog, chain: &InheritanceChain) -> Vec<StyleEntry> {
    chain
        .iter()
        .enumerate()
        .map(|(position, class)| StyleEntry {
            position,
            class,
            css: catalog.own_style_text(class).to_string(),
        })
        .collect()
}
