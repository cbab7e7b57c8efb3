//! The derived view of one focused class.

use super::catalog::Catalog;
use super::chain::InheritanceChain;
use super::children::{self, ChildSet};
use super::error::Result;
use super::links::ReferenceLinks;
use super::styles::{self, StyleEntry};
use super::widget::ClassId;

/// Chain, styles, children and links, all computed from the same focus.
///
/// A view is built in full before anyone sees it, so its parts can never
/// describe different classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusView {
    pub focus: ClassId,
    pub chain: InheritanceChain,
    pub styles: Vec<StyleEntry>,
    pub children: ChildSet,
    pub links: ReferenceLinks,
}

impl FocusView {
    pub fn compute(catalog: &Catalog, focus: ClassId) -> Result<Self> {
        let chain = InheritanceChain::build(catalog, focus)?;
        let styles = styles::aggregate(catalog, &chain);
        let children = children::discover(catalog, focus);
        let links = ReferenceLinks::for_class(catalog, focus);
        Ok(Self {
            focus: chain.focus(),
            chain,
            styles,
            children,
            links,
        })
    }
}
