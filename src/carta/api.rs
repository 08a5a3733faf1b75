//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients that work on whole requests rather than live
//! page events (the CLI being the one shipped here).
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Owns** the catalog store and configuration for the session
//! - **Returns structured types** (`Result<CmdResult>`), never strings for a terminal
//!
//! Business logic lives in the commands and, below them, in the controller and
//! overlay state machines. API tests only check dispatch and return shapes.

use crate::commands;
use crate::composer::OrderForm;
use crate::config::CartaConfig;
use crate::error::Result;
use crate::store::CatalogStore;

/// The main API facade, generic over the catalog store.
pub struct CartaApi<S: CatalogStore> {
    store: S,
    config: CartaConfig,
}

impl<S: CatalogStore> CartaApi<S> {
    pub fn new(store: S, config: CartaConfig) -> Self {
        Self { store, config }
    }

    pub fn list_items(&self, query: &FilterQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.config, query)
    }

    pub fn render_grid(&self, query: &FilterQuery) -> Result<CmdResult> {
        commands::grid::run(&self.store, &self.config, query)
    }

    pub fn show_item(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, &self.config, id)
    }

    pub fn list_tags(&self) -> Result<CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn compose_order(&self, form: &OrderForm) -> Result<CmdResult> {
        commands::order::run(&self.config, form)
    }

    pub fn config(&self) -> &CartaConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, FilterQuery, MessageLevel};
