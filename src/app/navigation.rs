//! Navigation controller — sole owner of the focused class.
//!
//! Every selection source (widget picker, inheritance chain, child list,
//! command line) funnels through [`NavigationController`].  A transition
//! computes the complete [`FocusView`] first and hands it to the display in
//! one [`DisplaySurface::publish`] call; a failed transition publishes
//! nothing and leaves the focus where it was.

use std::sync::Arc;

use crate::core::{
    catalog::Catalog,
    error::{DissectError, Result},
    focus::FocusView,
    widget::ClassId,
};

/// Anything that can show a focus view.
pub trait DisplaySurface {
    /// Replace everything on screen with `view`.
    fn publish(&mut self, view: &FocusView);

    /// Show a failed selection.  The last published view stays current.
    fn report(&mut self, error: &DissectError);
}

/// `Idle` only exists between startup and the first successful focus.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FocusState {
    Idle,
    Focused(FocusView),
}

pub struct NavigationController {
    catalog: Arc<Catalog>,
    state: FocusState,
}

impl NavigationController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: FocusState::Idle,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn focus(&self) -> Option<ClassId> {
        self.view().map(|v| v.focus)
    }

    pub fn view(&self) -> Option<&FocusView> {
        match &self.state {
            FocusState::Idle => None,
            FocusState::Focused(view) => Some(view),
        }
    }

    // ── transitions ──────────────────────────────────────────────

    /// `Idle -> Focused(default)`.  On an already focused controller this
    /// behaves like [`select_widget`](Self::select_widget).
    pub fn initialize(&mut self, default: &str, display: &mut impl DisplaySurface) -> Result<()> {
        let target = self.resolve(default, display)?;
        self.focus_on(target, display)
    }

    /// Focus the class named `name`, even when it already is the focus.
    pub fn select_widget(&mut self, name: &str, display: &mut impl DisplaySurface) -> Result<()> {
        self.require_focus(display)?;
        let target = self.resolve(name, display)?;
        self.focus_on(target, display)
    }

    /// Focus the class at `index` in the current inheritance chain.
    pub fn select_from_chain(
        &mut self,
        index: usize,
        display: &mut impl DisplaySurface,
    ) -> Result<()> {
        let chain = &self.require_focus(display)?.chain;
        let target = match chain.get(index) {
            Some(target) => target,
            None => {
                let err = DissectError::ChainIndexOutOfRange {
                    index,
                    len: chain.len(),
                };
                return Err(self.reject(err, display));
            }
        };
        self.focus_on(target, display)
    }

    // ── internals ────────────────────────────────────────────────

    fn require_focus(&self, display: &mut impl DisplaySurface) -> Result<&FocusView> {
        match &self.state {
            FocusState::Focused(view) => Ok(view),
            FocusState::Idle => Err(self.reject(DissectError::NotInitialized, display)),
        }
    }

    fn resolve(&self, name: &str, display: &mut impl DisplaySurface) -> Result<ClassId> {
        self.catalog
            .lookup(name)
            .map_err(|err| self.reject(err, display))
    }

    /// Compute the whole view, then swap it in and publish it.
    fn focus_on(&mut self, target: ClassId, display: &mut impl DisplaySurface) -> Result<()> {
        let view = FocusView::compute(&self.catalog, target).map_err(|err| self.reject(err, display))?;
        tracing::debug!(
            focus = self.catalog.name(target),
            chain = view.chain.len(),
            children = view.children.len(),
            "publishing focus view"
        );
        display.publish(&view);
        self.state = FocusState::Focused(view);
        Ok(())
    }

    fn reject(&self, err: DissectError, display: &mut impl DisplaySurface) -> DissectError {
        tracing::warn!(error = %err, "selection rejected");
        display.report(&err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures;

    /// Records every call so tests can check what the display saw.
    #[derive(Default)]
    struct Recorder {
        published: Vec<FocusView>,
        reported: Vec<DissectError>,
    }

    impl DisplaySurface for Recorder {
        fn publish(&mut self, view: &FocusView) {
            self.published.push(view.clone());
        }

        fn report(&mut self, error: &DissectError) {
            self.reported.push(error.clone());
        }
    }

    fn names(catalog: &Catalog, ids: impl Iterator<Item = ClassId>) -> Vec<String> {
        ids.map(|id| catalog.name(id).to_string()).collect()
    }

    fn controller() -> NavigationController {
        NavigationController::new(Arc::new(fixtures::scenario()))
    }

    #[test]
    fn initialize_publishes_chain_styles_and_children() {
        let mut nav = controller();
        let mut display = Recorder::default();
        nav.initialize("Checkbox", &mut display).unwrap();

        let catalog = nav.catalog();
        let view = &display.published[0];
        assert_eq!(names(catalog, view.chain.iter()), ["Checkbox", "Button", "Root"]);
        let css: Vec<&str> = view.styles.iter().map(|s| s.css.as_str()).collect();
        assert_eq!(css, ["width: 10;", "", "background: black;"]);
        assert_eq!(names(catalog, view.children.iter()), ["Button"]);
        assert_eq!(nav.view(), Some(view));
    }

    #[test]
    fn selecting_from_chain_moves_to_ancestor() {
        let mut nav = controller();
        let mut display = Recorder::default();
        nav.initialize("Checkbox", &mut display).unwrap();
        nav.select_from_chain(1, &mut display).unwrap();

        let catalog = nav.catalog();
        let view = display.published.last().unwrap();
        assert_eq!(catalog.name(view.focus), "Button");
        assert_eq!(names(catalog, view.chain.iter()), ["Button", "Root"]);
        assert!(view.children.is_empty());
    }

    #[test]
    fn unknown_widget_leaves_focus_unchanged() {
        let mut nav = controller();
        let mut display = Recorder::default();
        nav.initialize("Checkbox", &mut display).unwrap();
        let before = nav.view().cloned();

        let err = nav.select_widget("Unknown", &mut display).unwrap_err();
        assert_eq!(err, DissectError::NotFound("Unknown".into()));
        assert_eq!(nav.view().cloned(), before);
        assert_eq!(display.published.len(), 1);
        assert_eq!(display.reported, [err]);
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let mut nav = controller();
        let mut display = Recorder::default();
        nav.initialize("Root", &mut display).unwrap();
        nav.select_widget("Checkbox", &mut display).unwrap();
        nav.select_widget("Checkbox", &mut display).unwrap();

        assert_eq!(display.published.len(), 3);
        assert_eq!(display.published[1], display.published[2]);
    }

    #[test]
    fn chain_selection_matches_direct_selection() {
        let catalog = Arc::new(fixtures::scenario());
        let mut display = Recorder::default();
        for index in 0..3 {
            let mut via_chain = NavigationController::new(Arc::clone(&catalog));
            via_chain.initialize("Checkbox", &mut display).unwrap();
            let target = via_chain.view().unwrap().chain.get(index).unwrap();
            via_chain.select_from_chain(index, &mut display).unwrap();

            let mut direct = NavigationController::new(Arc::clone(&catalog));
            direct.initialize("Checkbox", &mut display).unwrap();
            direct
                .select_widget(catalog.name(target), &mut display)
                .unwrap();

            assert_eq!(via_chain.view(), direct.view());
        }
    }

    #[test]
    fn chain_index_out_of_range_is_rejected() {
        let mut nav = controller();
        let mut display = Recorder::default();
        nav.initialize("Button", &mut display).unwrap();
        assert_eq!(
            nav.select_from_chain(2, &mut display),
            Err(DissectError::ChainIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(nav.focus(), nav.catalog().lookup("Button").ok());
    }

    #[test]
    fn selection_before_initialize_is_rejected() {
        let mut nav = controller();
        let mut display = Recorder::default();
        assert_eq!(
            nav.select_widget("Button", &mut display),
            Err(DissectError::NotInitialized)
        );
        assert_eq!(
            nav.select_from_chain(0, &mut display),
            Err(DissectError::NotInitialized)
        );
        assert_eq!(nav.view(), None);
        assert!(display.published.is_empty());
    }

    #[test]
    fn cyclic_catalog_reports_instead_of_publishing() {
        let mut nav = NavigationController::new(Arc::new(fixtures::cyclic()));
        let mut display = Recorder::default();
        let err = nav.initialize("Leaf", &mut display).unwrap_err();
        assert!(matches!(err, DissectError::CycleDetected { .. }));
        assert_eq!(nav.view(), None);
        assert!(display.published.is_empty());
        assert_eq!(display.reported.len(), 1);
    }
}
