//! Inheritance chain builder.
//!
//! Walks parent links from the focused class up to a hierarchy root.  Index 0
//! is always the focused class itself.

use std::collections::HashSet;

use super::catalog::Catalog;
use super::error::{DissectError, Result};
use super::widget::ClassId;

/// Focused class first, a root class last.  Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceChain {
    links: Vec<ClassId>,
}

// Never empty: the focused class is always the first link.
#[allow(clippy::len_without_is_empty)]
impl InheritanceChain {
    /// Build the chain for `focus`.
    ///
    /// Fails with [`DissectError::CycleDetected`] instead of looping when the
    /// catalog's parent links revisit a class.  The chain is never truncated.
    pub fn build(catalog: &Catalog, focus: ClassId) -> Result<Self> {
        let mut links = vec![focus];
        let mut seen = HashSet::from([focus]);
        let mut current = focus;

        while let Some(parent) = catalog.parent_of(current) {
            if !seen.insert(parent) {
                return Err(DissectError::CycleDetected {
                    class: catalog.name(parent).to_string(),
                    walked: links.iter().map(|&id| catalog.name(id).to_string()).collect(),
                });
            }
            links.push(parent);
            current = parent;
        }

        Ok(Self { links })
    }

    pub fn focus(&self) -> ClassId {
        self.links[0]
    }

    pub fn get(&self, index: usize) -> Option<ClassId> {
        self.links.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn as_slice(&self) -> &[ClassId] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.links.iter().copied()
    }
}
