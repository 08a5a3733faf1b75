use super::{CmdMessage, FilterQuery};
use crate::config::CartaConfig;
use crate::controller::{CatalogController, CatalogView};
use crate::store::CatalogStore;

/// Builds a controller and replays `query` through its transitions, the same
/// way a user clicking through the page would.
pub fn filtered_controller<'a, S: CatalogStore, V: CatalogView>(
    store: &'a S,
    config: &CartaConfig,
    query: &FilterQuery,
    view: Option<V>,
) -> CatalogController<'a, S, V> {
    let mut controller =
        CatalogController::setup(store, config.renderer(), config.default_filter(), view);

    if let Some(category) = &query.category {
        controller.select_category(Some(category.as_str()));
    }
    if let Some(search) = &query.search {
        controller.set_query(search.as_str());
    }
    if let Some(tag) = &query.tag {
        controller.toggle_tag(tag);
    }
    controller
}

/// One-line description of the applied filter.
pub fn filter_summary<S: CatalogStore, V: CatalogView>(
    controller: &CatalogController<'_, S, V>,
    shown: usize,
    total: usize,
) -> CmdMessage {
    let state = controller.state();
    let mut parts = vec![format!("category={}", state.category)];
    if !state.query.is_empty() {
        parts.push(format!("search=\"{}\"", state.query));
    }
    if let Some(tag) = &state.active_tag {
        parts.push(format!("tag={}", tag));
    }
    CmdMessage::info(format!(
        "Showing {} of {} items ({})",
        shown,
        total,
        parts.join(", ")
    ))
}
