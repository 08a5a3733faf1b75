use super::helpers::{filter_summary, filtered_controller};
use super::{CmdResult, FilterQuery};
use crate::config::CartaConfig;
use crate::error::Result;
use crate::surface::MarkupGrid;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    store: &S,
    config: &CartaConfig,
    query: &FilterQuery,
) -> Result<CmdResult> {
    let controller = filtered_controller::<_, MarkupGrid>(store, config, query, None);
    let items: Vec<_> = controller.visible().into_iter().cloned().collect();

    let mut result = CmdResult::default();
    result.add_message(filter_summary(&controller, items.len(), store.items().len()));
    Ok(result.with_listed_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryCatalog;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn lists_default_category_without_query() {
        let store = InMemoryCatalog::reference();
        let result = run(&store, &CartaConfig::default(), &FilterQuery::new()).unwrap();
        assert_eq!(
            ids(&result),
            vec![
                "tarta-frutos",
                "cheesecake-limon",
                "cupcakes-vainilla",
                "croissant-almendra"
            ]
        );
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(
            result.messages[0].content,
            "Showing 4 of 8 items (category=reposteria)"
        );
    }

    #[test]
    fn applies_all_dimensions() {
        let store = InMemoryCatalog::reference();
        let query = FilterQuery::new().category("todo").search("CREM").tag("veg");
        let result = run(&store, &CartaConfig::default(), &query).unwrap();
        assert_eq!(ids(&result), vec!["ensalada-burrata", "risotto-setas"]);
        assert_eq!(
            result.messages[0].content,
            "Showing 2 of 8 items (category=todo, search=\"CREM\", tag=veg)"
        );
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let store = InMemoryCatalog::reference();
        let query = FilterQuery::new().search("pizza");
        let result = run(&store, &CartaConfig::default(), &query).unwrap();
        assert!(result.listed_items.is_empty());
    }
}
