//! Terminal output templates.
//!
//! Templates live as stand-alone files in `templates/` and are embedded here as
//! string constants. Line breaks in them are explicit: each loop body ends with
//! its own newline, so what a template prints is what the file shows.
//!
//! Styles are picked by name through the `style` filter; column widths and
//! truncation are computed in Rust before the data reaches a template.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
