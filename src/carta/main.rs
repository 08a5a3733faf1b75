//! # Carta CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! The CLI is a request-style client of the library. Each invocation builds a
//! `CartaApi` over the built-in or a JSON catalog, replays the requested filter
//! through the catalog controller, and prints the result, either as a styled
//! terminal table or as the page markup the grid would show.
//!
//! Terminal output goes through `outstanding` templates in `cli/templates/`,
//! embedded at compile time.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
