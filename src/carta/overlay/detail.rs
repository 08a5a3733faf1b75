use super::{Dialog, OverlayState};
use crate::error::Result;
use crate::html::escape_html;
use crate::input::{Key, KeyOutcome, Point, Rect};
use crate::model::Item;
use crate::render::{CardNode, Renderer};
use crate::store::CatalogStore;
use crate::templates;
use serde::Serialize;

/// Dialog hosting the item detail. Its body is replaced on every open.
pub trait DetailDialog: Dialog {
    fn set_body(&mut self, markup: &str);

    /// Visible box of the dialog, used to tell backdrop clicks apart.
    fn bounds(&self) -> Rect;
}

/// Link from the detail view toward the order section of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub href: String,
    pub label: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            href: "#contacto".to_string(),
            label: "Quiero este".to_string(),
        }
    }
}

#[derive(Serialize)]
struct DetailData<'a> {
    item: &'a CardNode,
    cta: &'a CallToAction,
}

/// Detail body markup for one item.
pub fn detail_markup(card: &CardNode, cta: &CallToAction) -> Result<String> {
    let cta = CallToAction {
        href: escape_html(&cta.href),
        label: escape_html(&cta.label),
    };
    templates::render(templates::DETAIL, &DetailData { item: card, cta: &cta })
}

/// Detail overlay state machine.
///
/// Requires the dialog and the card grid; without either there is nothing to
/// open or nothing to open it from, and every transition is a no-op.
pub struct DetailOverlay<'a, S: CatalogStore, D: DetailDialog> {
    store: &'a S,
    renderer: Renderer,
    cta: CallToAction,
    dialog: Option<D>,
    state: OverlayState<&'a Item>,
}

impl<'a, S: CatalogStore, D: DetailDialog> DetailOverlay<'a, S, D> {
    pub fn setup(
        store: &'a S,
        renderer: Renderer,
        cta: CallToAction,
        dialog: Option<D>,
        grid_attached: bool,
    ) -> Self {
        Self {
            store,
            renderer,
            cta,
            dialog: dialog.filter(|_| grid_attached),
            state: OverlayState::Closed,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn state(&self) -> &OverlayState<&'a Item> {
        &self.state
    }

    pub fn dialog(&self) -> Option<&D> {
        self.dialog.as_ref()
    }

    /// Opens the item with `id`. Unknown ids leave the overlay untouched.
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(dialog) = self.dialog.as_mut() else {
            return false;
        };
        let store = self.store;
        let Some(item) = store.find_by_id(id) else {
            return false;
        };

        let card = self.renderer.card(item);
        let markup = templates::markup_or_comment(detail_markup(&card, &self.cta));
        dialog.set_body(&markup);
        dialog.show_modal();
        self.state = OverlayState::Open(item);
        true
    }

    /// Pointer activation inside the grid. `target` is the activation key of
    /// the card under the pointer, if any.
    pub fn on_card_click(&mut self, target: Option<&str>) {
        if let Some(id) = target {
            self.activate(id);
        }
    }

    /// Keyboard activation inside the grid; same transition as a click.
    pub fn on_card_key(&mut self, key: Key, target: Option<&str>) -> KeyOutcome {
        if !key.activates() || !self.is_enabled() {
            return KeyOutcome::Ignored;
        }
        let Some(id) = target else {
            return KeyOutcome::Ignored;
        };
        self.activate(id);
        KeyOutcome::PreventDefault
    }

    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.close();
        }
        self.state = OverlayState::Closed;
    }

    /// Key pressed while the dialog has focus. Escape cancels the dialog.
    pub fn on_dialog_key(&mut self, key: Key) {
        if key.dismisses() {
            self.close();
        }
    }

    /// Click on the dialog element. Clicks outside its visible box hit the
    /// backdrop and dismiss it.
    pub fn on_dialog_click(&mut self, at: Point) {
        let Some(dialog) = self.dialog.as_ref() else {
            return;
        };
        if !dialog.bounds().contains(at) {
            self.close();
        }
    }
}
