use super::helpers::{filter_summary, filtered_controller};
use super::{CmdResult, FilterQuery};
use crate::config::CartaConfig;
use crate::error::Result;
use crate::store::CatalogStore;
use crate::surface::MarkupGrid;

pub fn run<S: CatalogStore>(
    store: &S,
    config: &CartaConfig,
    query: &FilterQuery,
) -> Result<CmdResult> {
    let controller = filtered_controller(store, config, query, Some(MarkupGrid::default()));
    let Some(grid) = controller.view() else {
        return Ok(CmdResult::default());
    };

    let shown = grid.keys().len();
    let mut result = CmdResult::default().with_markup(grid.markup().to_string());
    result.add_message(filter_summary(&controller, shown, store.items().len()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EMPTY_MESSAGE;
    use crate::store::memory::InMemoryCatalog;

    #[test]
    fn renders_cards_for_filtered_items() {
        let store = InMemoryCatalog::reference();
        let query = FilterQuery::new().category("gourmet").tag("premium");
        let result = run(&store, &CartaConfig::default(), &query).unwrap();
        let markup = result.markup.unwrap();
        assert_eq!(markup.matches("<article").count(), 2);
        assert!(markup.contains(r#"data-item-id="salmon-citricos""#));
        assert!(markup.contains(r#"data-item-id="postre-maridaje""#));
    }

    #[test]
    fn renders_placeholder_when_nothing_matches() {
        let store = InMemoryCatalog::reference();
        let query = FilterQuery::new().search("zzz");
        let result = run(&store, &CartaConfig::default(), &query).unwrap();
        let markup = result.markup.unwrap();
        assert!(markup.contains(EMPTY_MESSAGE));
        assert!(!markup.contains("<article"));
    }
}
