//! # Overlays
//!
//! Two independent modal presentations sit on top of the catalog:
//!
//! - [`detail::DetailOverlay`]: full detail for one item, opened from a card.
//! - [`image::ImageOverlay`]: one enlarged gallery photo.
//!
//! Both are small state machines over [`OverlayState`]. Opening while already
//! open swaps the payload in place; there is no intermediate closed state.
//! Only one instance of each kind exists per page session, and neither knows
//! about the other.
//!
//! The two dismiss differently. The detail overlay closes on a click that
//! lands outside its visible box, so clicks on its own content are safe. The
//! image overlay closes on any click inside the overlay at all, including the
//! image itself.

pub mod detail;
pub mod image;

/// Lifecycle of an overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState<P> {
    #[default]
    Closed,
    Open(P),
}

impl<P> OverlayState<P> {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            OverlayState::Closed => None,
            OverlayState::Open(payload) => Some(payload),
        }
    }
}

/// A native modal dialog element.
pub trait Dialog {
    fn show_modal(&mut self);
    fn close(&mut self);
}
