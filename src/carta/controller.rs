//! # Catalog Controller
//!
//! Owns the [`FilterState`] for one page session and is the only thing that
//! mutates it. Every transition re-derives the visible items and hands a fresh
//! [`DisplayOutput`] to the view, which replaces its contents wholesale. A
//! render pass is a pure function of the current state, so a later pass always
//! supersedes an earlier one completely.
//!
//! A controller set up without a view is disabled: transitions still update
//! the stored state, but no render pass runs.

use crate::filter::{select, CategoryFilter, FilterState};
use crate::model::Item;
use crate::render::{DisplayOutput, Renderer};
use crate::store::CatalogStore;

/// The grid region the catalog renders into, plus the filter controls that
/// reflect the current selection.
pub trait CatalogView {
    /// Replaces the whole grid with `output`.
    fn show(&mut self, output: &DisplayOutput);

    /// Marks the category control matching `active` as selected.
    fn mark_category(&mut self, _active: &CategoryFilter) {}

    /// Marks the tag control matching `active` as selected, or none.
    fn mark_tag(&mut self, _active: Option<&str>) {}
}

pub struct CatalogController<'a, S: CatalogStore, V: CatalogView> {
    store: &'a S,
    renderer: Renderer,
    state: FilterState,
    view: Option<V>,
}

impl<'a, S: CatalogStore, V: CatalogView> CatalogController<'a, S, V> {
    /// Builds the controller and runs the initial render pass with the
    /// default category, an empty query and no tag.
    pub fn setup(
        store: &'a S,
        renderer: Renderer,
        default_category: CategoryFilter,
        view: Option<V>,
    ) -> Self {
        let mut controller = Self {
            store,
            renderer,
            state: FilterState::new(default_category),
            view,
        };
        controller.apply();
        controller
    }

    pub fn is_enabled(&self) -> bool {
        self.view.is_some()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
        if let Some(view) = self.view.as_mut() {
            view.mark_category(&self.state.category);
        }
        self.apply();
    }

    /// Category control activation. A control without a selector value means
    /// "all".
    pub fn select_category(&mut self, selector: Option<&str>) {
        let category = selector
            .unwrap_or("")
            .parse()
            .unwrap_or(CategoryFilter::All);
        self.set_category(category);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.apply();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
        if let Some(view) = self.view.as_mut() {
            view.mark_tag(self.state.active_tag.as_deref());
        }
        self.apply();
    }

    /// Items passing the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&'a Item> {
        let store = self.store;
        select(store.items(), &self.state)
    }

    fn apply(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        let items = select(self.store.items(), &self.state);
        let output = self.renderer.render(&items);
        view.show(&output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::InMemoryCatalog;

    #[derive(Default)]
    struct RecordingView {
        shown: Vec<Vec<String>>,
        empty_passes: usize,
        category: Option<CategoryFilter>,
        tag: Option<String>,
    }

    impl CatalogView for RecordingView {
        fn show(&mut self, output: &DisplayOutput) {
            if output.is_empty() {
                self.empty_passes += 1;
            }
            self.shown
                .push(output.keys().into_iter().map(String::from).collect());
        }

        fn mark_category(&mut self, active: &CategoryFilter) {
            self.category = Some(active.clone());
        }

        fn mark_tag(&mut self, active: Option<&str>) {
            self.tag = active.map(String::from);
        }
    }

    fn controller(
        store: &InMemoryCatalog,
    ) -> CatalogController<'_, InMemoryCatalog, RecordingView> {
        CatalogController::setup(
            store,
            Renderer::default(),
            Category::Reposteria.into(),
            Some(RecordingView::default()),
        )
    }

    fn last_shown<'c>(c: &'c CatalogController<'_, InMemoryCatalog, RecordingView>) -> &'c [String] {
        c.view().unwrap().shown.last().unwrap()
    }

    #[test]
    fn initial_pass_shows_default_category() {
        let store = InMemoryCatalog::reference();
        let c = controller(&store);
        let view = c.view().unwrap();
        assert_eq!(view.shown.len(), 1);
        assert_eq!(
            last_shown(&c),
            &[
                "tarta-frutos",
                "cheesecake-limon",
                "cupcakes-vainilla",
                "croissant-almendra"
            ]
        );
        assert_eq!(c.state().query, "");
        assert_eq!(c.state().active_tag, None);
    }

    #[test]
    fn every_transition_renders_once() {
        let store = InMemoryCatalog::reference();
        let mut c = controller(&store);
        c.set_category(CategoryFilter::All);
        c.set_query("s");
        c.set_query("se");
        c.toggle_tag("veg");
        assert_eq!(c.view().unwrap().shown.len(), 5);
    }

    #[test]
    fn selecting_active_category_is_idempotent() {
        let store = InMemoryCatalog::reference();
        let mut c = controller(&store);
        let before = last_shown(&c).to_vec();
        c.set_category(Category::Reposteria.into());
        c.set_category(Category::Reposteria.into());
        assert_eq!(last_shown(&c), before.as_slice());
        assert_eq!(c.view().unwrap().shown.len(), 3);
    }

    #[test]
    fn query_and_tag_narrow_all_categories() {
        let store = InMemoryCatalog::reference();
        let mut c = controller(&store);
        c.select_category(Some("todo"));
        c.set_query("cítric");
        assert_eq!(last_shown(&c), &["cheesecake-limon", "salmon-citricos"]);

        c.toggle_tag("premium");
        assert_eq!(last_shown(&c), &["salmon-citricos"]);
        assert_eq!(c.view().unwrap().tag.as_deref(), Some("premium"));

        c.toggle_tag("premium");
        assert_eq!(c.state().active_tag, None);
        assert_eq!(c.view().unwrap().tag, None);
        assert_eq!(last_shown(&c), &["cheesecake-limon", "salmon-citricos"]);
    }

    #[test]
    fn selector_without_value_means_all() {
        let store = InMemoryCatalog::reference();
        let mut c = controller(&store);
        c.select_category(None);
        assert_eq!(c.state().category, CategoryFilter::All);
        assert_eq!(c.view().unwrap().category, Some(CategoryFilter::All));
        assert_eq!(last_shown(&c).len(), 8);
    }

    #[test]
    fn no_match_renders_placeholder() {
        let store = InMemoryCatalog::reference();
        let mut c = controller(&store);
        c.set_query("pizza");
        assert!(last_shown(&c).is_empty());
        assert_eq!(c.view().unwrap().empty_passes, 1);
    }

    #[test]
    fn transition_order_does_not_change_final_state() {
        let store = InMemoryCatalog::reference();
        let mut a = controller(&store);
        a.set_category(Category::Gourmet.into());
        a.set_query("crem");
        a.toggle_tag("veg");

        let mut b = controller(&store);
        b.toggle_tag("veg");
        b.set_query("crem");
        b.set_category(Category::Gourmet.into());

        assert_eq!(a.state(), b.state());
        assert_eq!(last_shown(&a), last_shown(&b));
        assert_eq!(last_shown(&a), &["ensalada-burrata", "risotto-setas"]);
    }

    #[test]
    fn controller_without_view_still_tracks_state() {
        let store = InMemoryCatalog::reference();
        let mut c: CatalogController<'_, _, RecordingView> = CatalogController::setup(
            &store,
            Renderer::default(),
            Category::Reposteria.into(),
            None,
        );
        assert!(!c.is_enabled());
        c.set_query("burrata");
        c.set_category(CategoryFilter::All);
        assert_eq!(c.state().query, "burrata");
        let ids: Vec<_> = c.visible().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["ensalada-burrata"]);
    }
}
