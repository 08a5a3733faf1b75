use super::CmdResult;
use crate::config::CartaConfig;
use crate::error::{CartaError, Result};
use crate::overlay::detail::DetailOverlay;
use crate::store::CatalogStore;
use crate::surface::MarkupDialog;

/// Opens the detail overlay for `id` and returns the item with its detail
/// body markup.
pub fn run<S: CatalogStore>(store: &S, config: &CartaConfig, id: &str) -> Result<CmdResult> {
    let mut overlay = DetailOverlay::setup(
        store,
        config.renderer(),
        config.call_to_action(),
        Some(MarkupDialog::default()),
        true,
    );

    if !overlay.activate(id) {
        return Err(CartaError::Api(format!("Item {} not found in catalog", id)));
    }

    let item = overlay.state().payload().map(|item| (*item).clone());
    let body = overlay
        .dialog()
        .map(|dialog| dialog.body().to_string())
        .unwrap_or_default();

    Ok(CmdResult::default()
        .with_listed_items(item.into_iter().collect())
        .with_markup(body))
}
