//! In-memory presentation surfaces.
//!
//! These implement the view and dialog traits by keeping the latest markup and
//! modal state in plain fields. The API layer renders through them, and tests
//! use them to observe what a page would display.

use crate::controller::CatalogView;
use crate::filter::CategoryFilter;
use crate::input::Rect;
use crate::overlay::detail::DetailDialog;
use crate::overlay::image::Lightbox;
use crate::overlay::Dialog;
use crate::render::DisplayOutput;
use crate::templates::markup_or_comment;

/// Grid container holding the markup of the latest render pass.
#[derive(Debug, Clone, Default)]
pub struct MarkupGrid {
    markup: String,
    keys: Vec<String>,
    empty: bool,
    passes: usize,
    active_category: Option<CategoryFilter>,
    active_tag: Option<String>,
}

impl MarkupGrid {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Activation keys of the cards currently shown.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Number of render passes received.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn active_category(&self) -> Option<&CategoryFilter> {
        self.active_category.as_ref()
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }
}

impl CatalogView for MarkupGrid {
    fn show(&mut self, output: &DisplayOutput) {
        self.markup = markup_or_comment(output.to_markup());
        self.keys = output.keys().into_iter().map(String::from).collect();
        self.empty = output.is_empty();
        self.passes += 1;
    }

    fn mark_category(&mut self, active: &CategoryFilter) {
        self.active_category = Some(active.clone());
    }

    fn mark_tag(&mut self, active: Option<&str>) {
        self.active_tag = active.map(String::from);
    }
}

/// Detail dialog with a fixed on-screen box.
#[derive(Debug, Clone, Default)]
pub struct MarkupDialog {
    body: String,
    open: bool,
    bounds: Rect,
    closes: usize,
}

impl MarkupDialog {
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close_count(&self) -> usize {
        self.closes
    }
}

impl Dialog for MarkupDialog {
    fn show_modal(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
        self.closes += 1;
    }
}

impl DetailDialog for MarkupDialog {
    fn set_body(&mut self, markup: &str) {
        self.body = markup.to_string();
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Lightbox dialog holding one image.
#[derive(Debug, Clone, Default)]
pub struct MarkupLightbox {
    src: String,
    alt: String,
    open: bool,
    closes: usize,
}

impl MarkupLightbox {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close_count(&self) -> usize {
        self.closes
    }
}

impl Dialog for MarkupLightbox {
    fn show_modal(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
        self.closes += 1;
    }
}

impl Lightbox for MarkupLightbox {
    fn set_image(&mut self, src: &str, alt: &str) {
        self.src = src.to_string();
        self.alt = alt.to_string();
    }
}
