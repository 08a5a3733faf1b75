//! # Page Session
//!
//! A page session wires the catalog controller and both overlays together
//! once, from whatever hooks the page provides. Each component checks its own
//! hooks and disables itself when one is missing; a missing lightbox never
//! affects the catalog, and so on.
//!
//! The session holds no state of its own. The binding layer forwards events to
//! the component that owns them through the accessors below.

use crate::config::CartaConfig;
use crate::controller::{CatalogController, CatalogView};
use crate::overlay::detail::{DetailDialog, DetailOverlay};
use crate::overlay::image::{ImageOverlay, Lightbox};
use crate::store::CatalogStore;

/// Handles found on the page. `None`/`false` means the element is absent.
pub struct PageHooks<V, D, L> {
    /// Grid container (`[data-menu-grid]`)
    pub grid: Option<V>,
    /// Detail dialog and its body (`[data-modal]`, `[data-modal-body]`)
    pub detail: Option<D>,
    /// Lightbox dialog and its image (`[data-lightbox-modal]`, `[data-lightbox-img]`)
    pub lightbox: Option<L>,
    /// Whether a gallery (`[data-gallery]`) exists to open the lightbox from
    pub gallery: bool,
}

impl<V, D, L> Default for PageHooks<V, D, L> {
    fn default() -> Self {
        Self {
            grid: None,
            detail: None,
            lightbox: None,
            gallery: false,
        }
    }
}

pub struct PageSession<'a, S, V, D, L>
where
    S: CatalogStore,
    V: CatalogView,
    D: DetailDialog,
    L: Lightbox,
{
    catalog: CatalogController<'a, S, V>,
    detail: DetailOverlay<'a, S, D>,
    images: ImageOverlay<L>,
}

impl<'a, S, V, D, L> PageSession<'a, S, V, D, L>
where
    S: CatalogStore,
    V: CatalogView,
    D: DetailDialog,
    L: Lightbox,
{
    /// Sets every component up and runs the catalog's initial render pass.
    pub fn setup(store: &'a S, config: &CartaConfig, hooks: PageHooks<V, D, L>) -> Self {
        let grid_attached = hooks.grid.is_some();
        let catalog = CatalogController::setup(
            store,
            config.renderer(),
            config.default_filter(),
            hooks.grid,
        );
        let detail = DetailOverlay::setup(
            store,
            config.renderer(),
            config.call_to_action(),
            hooks.detail,
            grid_attached,
        );
        let images = ImageOverlay::setup(hooks.lightbox, hooks.gallery);

        Self {
            catalog,
            detail,
            images,
        }
    }

    pub fn catalog(&self) -> &CatalogController<'a, S, V> {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogController<'a, S, V> {
        &mut self.catalog
    }

    pub fn detail(&self) -> &DetailOverlay<'a, S, D> {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailOverlay<'a, S, D> {
        &mut self.detail
    }

    pub fn images(&self) -> &ImageOverlay<L> {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageOverlay<L> {
        &mut self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryCatalog;
    use crate::surface::{MarkupDialog, MarkupGrid, MarkupLightbox};

    type Session<'a> = PageSession<'a, InMemoryCatalog, MarkupGrid, MarkupDialog, MarkupLightbox>;

    fn full_hooks() -> PageHooks<MarkupGrid, MarkupDialog, MarkupLightbox> {
        PageHooks {
            grid: Some(MarkupGrid::default()),
            detail: Some(MarkupDialog::default()),
            lightbox: Some(MarkupLightbox::default()),
            gallery: true,
        }
    }

    #[test]
    fn setup_renders_default_category() {
        let store = InMemoryCatalog::reference();
        let session: Session = PageSession::setup(&store, &CartaConfig::default(), full_hooks());
        let grid = session.catalog().view().unwrap();
        assert_eq!(grid.passes(), 1);
        assert_eq!(grid.keys().len(), 4);
        assert!(session.detail().is_enabled());
        assert!(session.images().is_enabled());
    }

    #[test]
    fn missing_grid_disables_catalog_and_detail_only() {
        let store = InMemoryCatalog::reference();
        let hooks = PageHooks {
            grid: None,
            ..full_hooks()
        };
        let mut session: Session = PageSession::setup(&store, &CartaConfig::default(), hooks);
        assert!(!session.catalog().is_enabled());
        assert!(!session.detail().is_enabled());
        assert!(session.images().is_enabled());

        session.images_mut().on_gallery_click(Some("g.jpg"));
        assert!(session.images().state().is_open());
    }

    #[test]
    fn no_hooks_is_fully_inert() {
        let store = InMemoryCatalog::reference();
        let mut session: Session =
            PageSession::setup(&store, &CartaConfig::default(), PageHooks::default());
        session.catalog_mut().set_query("torta");
        assert!(!session.detail_mut().activate("tarta-frutos"));
        assert!(!session.images_mut().activate("a.jpg"));
        assert_eq!(session.catalog().state().query, "torta");
    }

    #[test]
    fn overlays_are_independent() {
        let store = InMemoryCatalog::reference();
        let mut session: Session = PageSession::setup(&store, &CartaConfig::default(), full_hooks());
        session.detail_mut().activate("tarta-frutos");
        session.images_mut().activate("a.jpg");
        assert!(session.detail().state().is_open());
        assert!(session.images().state().is_open());

        session.images_mut().on_overlay_click();
        assert!(session.detail().state().is_open());
        assert!(!session.images().state().is_open());
    }
}
