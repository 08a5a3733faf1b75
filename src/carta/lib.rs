//! # Carta Architecture
//!
//! Carta is the interaction layer of a small menu page: a catalog grid that can
//! be narrowed by category, free-text search and one tag, plus two overlays
//! (item detail and enlarged photo). It is a **UI-agnostic library**. The page
//! binding and the bundled CLI are clients of it, not part of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (page binding, cli/ wired by main.rs)              │
//! │  - Translate DOM events / arguments into transitions        │
//! │  - The ONLY place that knows about the DOM or a terminal    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session & API (session.rs, api.rs, commands/)              │
//! │  - PageSession: one controller + two overlays per page      │
//! │  - CartaApi: request-style facade returning CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (controller.rs, overlay/, filter.rs, render.rs)       │
//! │  - FilterState owned by CatalogController                   │
//! │  - Detail and image overlay state machines                  │
//! │  - Pure predicate and renderer                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Store (store/)                                     │
//! │  - Immutable item list + lookup by id                       │
//! │  - InMemoryCatalog (reference data), FileCatalog (JSON)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event Model
//!
//! Everything is single-threaded and synchronous. Each transition runs to
//! completion inside one event handler: mutate the owned state, re-derive the
//! visible items, replace the grid contents. There is no partial render to race
//! against, since every pass is a pure function of the current state.
//!
//! ## Missing Hooks
//!
//! Components receive their page handles at setup as `Option`s. When one is
//! absent the component becomes a no-op instead of failing the page. The same
//! goes for the other two recoverable conditions: an activation that names an
//! unknown item does nothing, and a price that cannot be formatted falls back
//! to its raw value.
//!
//! ## Module Overview
//!
//! - [`store`]: catalog store trait and implementations
//! - [`model`]: `Item` and `Category`
//! - [`filter`]: filter state and predicate engine
//! - [`render`]: display nodes and grid markup
//! - [`controller`]: catalog controller and the view trait it renders into
//! - [`overlay`]: detail and image overlay state machines
//! - [`session`]: page-session wiring from optional hooks
//! - [`surface`]: in-memory views and dialogs
//! - [`composer`]: order message and link
//! - [`api`] / [`commands`]: request-style facade used by the CLI
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod composer;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod html;
pub mod input;
pub mod model;
pub mod overlay;
pub mod price;
pub mod render;
pub mod session;
pub mod store;
pub mod surface;
pub mod templates;
