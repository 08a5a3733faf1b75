//! # CLI Behavior
//!
//! This is **one possible client** for carta, not the application itself. The
//! CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! For the overall architecture, see the crate-level documentation in `lib.rs`.
//!
//! ## Filtering From the Shell
//!
//! `carta list` (the default command) and `carta grid` take the same three
//! filter flags as the page has controls. They are replayed through the
//! catalog controller in page order: category first, then search, then tag.
//!
//! - `carta list`: styled table of the visible items.
//! - `carta grid`: the grid markup the page would display.
//! - `carta show <id>`: detail view, or its dialog body with `--html`.
//!
//! Without `--category` the configured default category applies, exactly as on
//! page load. Use `--category todo` to search the whole catalog.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: terminal output through templates
//! - `setup`: argument parsing via clap
//! - `styles`: terminal theme
//! - `templates`: embedded output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
