use super::{Dialog, OverlayState};
use crate::input::Key;

/// Accessible label for the enlarged image. Gallery photos carry no caption
/// data, so every image gets the same one.
pub const ENLARGED_IMAGE_LABEL: &str = "Imagen ampliada";

/// Dialog holding a single enlarged image.
pub trait Lightbox: Dialog {
    fn set_image(&mut self, src: &str, alt: &str);
}

/// Image overlay state machine.
///
/// Requires the lightbox dialog and the gallery it is opened from. Any click
/// inside the overlay dismisses it.
pub struct ImageOverlay<L: Lightbox> {
    lightbox: Option<L>,
    state: OverlayState<String>,
}

impl<L: Lightbox> ImageOverlay<L> {
    pub fn setup(lightbox: Option<L>, gallery_attached: bool) -> Self {
        Self {
            lightbox: lightbox.filter(|_| gallery_attached),
            state: OverlayState::Closed,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn state(&self) -> &OverlayState<String> {
        &self.state
    }

    pub fn lightbox(&self) -> Option<&L> {
        self.lightbox.as_ref()
    }

    /// Shows `image_ref` enlarged. An empty reference is a miss.
    pub fn activate(&mut self, image_ref: &str) -> bool {
        if image_ref.is_empty() {
            return false;
        }
        let Some(lightbox) = self.lightbox.as_mut() else {
            return false;
        };
        lightbox.set_image(image_ref, ENLARGED_IMAGE_LABEL);
        lightbox.show_modal();
        self.state = OverlayState::Open(image_ref.to_string());
        true
    }

    /// Click inside the gallery. `target` is the image reference of the
    /// thumbnail under the pointer, if any.
    pub fn on_gallery_click(&mut self, target: Option<&str>) {
        if let Some(image_ref) = target {
            self.activate(image_ref);
        }
    }

    /// Any click on the overlay, backdrop or image alike, closes it.
    pub fn on_overlay_click(&mut self) {
        self.close();
    }

    /// Escape cancels the lightbox like any other dismissal.
    pub fn on_overlay_key(&mut self, key: Key) {
        if key.dismisses() {
            self.close();
        }
    }

    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        if let Some(lightbox) = self.lightbox.as_mut() {
            lightbox.close();
        }
        self.state = OverlayState::Closed;
    }
}
