//! Child widget discovery.
//!
//! Children are composition, not ancestry: the classes one widget builds
//! when it composes itself.  Discovery is scoped to exactly the focused
//! class; children declared by its ancestors are not folded in.

use std::collections::HashSet;

use super::catalog::Catalog;
use super::widget::ClassId;

/// De-duplicated children of one class, in first-declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildSet {
    members: Vec<ClassId>,
}

impl ChildSet {
    pub fn get(&self, index: usize) -> Option<ClassId> {
        self.members.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn as_slice(&self) -> &[ClassId] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.members.iter().copied()
    }
}

pub fn discover(catalog: &Catalog, class: ClassId) -> ChildSet {
    let mut seen = HashSet::new();
    let members = catalog
        .declared_children(class)
        .iter()
        .copied()
        .filter(|&child| seen.insert(child))
        .collect();
    ChildSet { members }
}
