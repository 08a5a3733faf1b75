//! Page markup templates.
//!
//! Templates are minijinja files under `templates/`, embedded at compile time.
//! Small pieces (tag pills, a single card) are their own templates and are
//! pulled in with `include`, so the grid and the detail body share them.
//!
//! Auto-escaping is switched off: every value handed to these templates has
//! already gone through [`crate::html::escape_html`] in Rust. Escaping twice
//! would turn `&amp;` into `&amp;amp;`.

use crate::error::Result;
use crate::html::escape_html;
use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;

pub const GRID: &str = "grid.html";
pub const CARD: &str = "card.html";
pub const TAGS: &str = "tags.html";
pub const EMPTY: &str = "empty.html";
pub const DETAIL: &str = "detail.html";

const SOURCES: [(&str, &str); 5] = [
    (GRID, include_str!("templates/grid.html")),
    (CARD, include_str!("templates/card.html")),
    (TAGS, include_str!("templates/tags.html")),
    (EMPTY, include_str!("templates/empty.html")),
    (DETAIL, include_str!("templates/detail.html")),
];

fn environment() -> std::result::Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    for (name, source) in SOURCES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Parsed once per process; every render pass reuses it.
static ENVIRONMENT: Lazy<std::result::Result<Environment<'static>, minijinja::Error>> =
    Lazy::new(environment);

/// Renders one of the embedded templates by name.
pub fn render<T: Serialize>(name: &str, data: &T) -> Result<String> {
    let env = ENVIRONMENT
        .as_ref()
        .map_err(|e| minijinja::Error::new(e.kind(), e.to_string()))?;
    let template = env.get_template(name)?;
    Ok(template.render(data)?)
}

/// Unwraps rendered markup for a surface. Surfaces cannot report errors, so a
/// failed render becomes an HTML comment in place of the content.
pub fn markup_or_comment(result: Result<String>) -> String {
    result.unwrap_or_else(|e| format!("<!-- render error: {} -->", escape_html(&e.to_string())))
}
