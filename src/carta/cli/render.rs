//! # Rendering Module
//!
//! Styled terminal output through `outstanding` templates.
//!
//! Column math (id alignment, name truncation) is done here in Rust because it
//! has to be Unicode-aware: dish names carry accents and the occasional emoji.
//! Templates only pick styles and lay lines out.

use super::styles::{names, CARTA_THEME};
use super::templates::{DETAIL_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, TEXT_LIST_TEMPLATE};
use carta::api::{CmdMessage, MessageLevel};
use carta::model::Item;
use carta::price::PriceFormatter;
use carta::render::EMPTY_MESSAGE;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const NAME_WIDTH: usize = 32;
pub const NO_CATEGORY: &str = "sin categoría";

#[derive(Serialize)]
struct ItemLineData {
    id: String,
    id_pad: String,
    name: String,
    name_pad: String,
    price: String,
    tags: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<ItemLineData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct DetailData {
    id: String,
    name: String,
    category: String,
    price: String,
    description: String,
    tags: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_themed<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*CARTA_THEME), c),
        None => render(template, data, ThemeChoice::from(&*CARTA_THEME)),
    }
}

/// Renders the visible items as an aligned table, or the empty-result notice.
pub fn render_item_list(items: &[Item], prices: &PriceFormatter, use_color: Option<bool>) -> String {
    let id_width = items.iter().map(|i| i.id.width()).max().unwrap_or(0);

    let rows = items
        .iter()
        .map(|item| {
            let name = truncate_to_width(&item.name, NAME_WIDTH);
            ItemLineData {
                id_pad: " ".repeat(id_width.saturating_sub(item.id.width())),
                id: item.id.clone(),
                name_pad: " ".repeat(NAME_WIDTH.saturating_sub(name.width())),
                name,
                price: prices.format(item.price),
                tags: item.tags.join(", "),
            }
        })
        .collect::<Vec<_>>();

    let data = ListData {
        empty: rows.is_empty(),
        rows,
        empty_message: EMPTY_MESSAGE.to_string(),
    };

    render_themed(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", EMPTY_MESSAGE))
}

pub fn render_item_detail(item: &Item, prices: &PriceFormatter, use_color: Option<bool>) -> String {
    let data = DetailData {
        id: item.id.clone(),
        name: item.name.clone(),
        category: item
            .category
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_else(|| NO_CATEGORY.to_string()),
        price: prices.format(item.price),
        description: item.description.clone(),
        tags: item.tags.join(", "),
    };

    render_themed(DETAIL_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: Option<bool>) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_themed(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages. Info-level messages are only shown when `verbose`.
pub fn render_messages(messages: &[CmdMessage], verbose: bool, use_color: Option<bool>) -> String {
    let message_data: Vec<MessageData> = messages
        .iter()
        .filter(|msg| verbose || msg.level != MessageLevel::Info)
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    if message_data.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: message_data,
    };

    render_themed(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        data.messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], verbose: bool, use_color: Option<bool>) {
    let output = render_messages(messages, verbose, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use carta::model::Category;
    use carta::store::memory::InMemoryCatalog;
    use carta::store::CatalogStore;

    fn prices() -> PriceFormatter {
        carta::config::CartaConfig::default().price_formatter()
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_item_list(&[], &prices(), Some(false));
        assert!(output.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_render_list_aligns_names() {
        let store = InMemoryCatalog::reference();
        let items = store.items()[..3].to_vec();
        let output = render_item_list(&items, &prices(), Some(false));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("tarta-frutos"));
        let price_columns: Vec<usize> = lines
            .iter()
            .map(|line| line[..line.find('$').expect("price column missing")].width())
            .collect();
        assert!(price_columns.iter().all(|&c| c == price_columns[0]));
        assert!(output.contains("$\u{a0}26.000"));
        assert!(output.contains("popular"));
    }

    #[test]
    fn test_render_detail() {
        let item = Item::new(
            "bowl",
            Category::Gourmet,
            "Bowl mediterráneo",
            "Quinoa y hummus.",
            30.0,
            &["veg"],
            "bowl.jpg",
        );
        let output = render_item_detail(&item, &prices(), Some(false));
        assert!(output.contains("Bowl mediterráneo"));
        assert!(output.contains("$\u{a0}30.000"));
        assert!(output.contains("gourmet · bowl"));
        assert!(output.contains("Quinoa y hummus."));
        assert!(output.contains("veg"));
    }

    #[test]
    fn test_render_detail_without_category() {
        let mut item = Item::new("x", Category::Gourmet, "X", "", 1.0, &[], "x.jpg");
        item.category = None;
        let output = render_item_detail(&item, &prices(), Some(false));
        assert!(output.contains(NO_CATEGORY));
    }

    #[test]
    fn test_render_text_list_empty() {
        let output = render_text_list(&[], "No tags.", Some(false));
        assert!(output.contains("No tags."));
    }

    #[test]
    fn test_render_text_list_lines() {
        let lines = vec!["popular".to_string(), "veg".to_string()];
        let output = render_text_list(&lines, "", Some(false));
        assert_eq!(output.lines().collect::<Vec<_>>(), vec!["popular", "veg"]);
    }

    #[test]
    fn test_info_messages_need_verbose() {
        let messages = vec![
            CmdMessage::info("Showing 1 of 8 items"),
            CmdMessage::success("Done"),
        ];
        let quiet = render_messages(&messages, false, Some(false));
        assert!(!quiet.contains("Showing"));
        assert!(quiet.contains("Done"));

        let verbose = render_messages(&messages, true, Some(false));
        assert!(verbose.contains("Showing 1 of 8 items"));
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&[], true, Some(false)).is_empty());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Tarta", 10), "Tarta");
        assert_eq!(truncate_to_width("Cheesecake de limón", 10), "Cheesecak…");
        assert_eq!(truncate_to_width("Cheesecake de limón", 10).width(), 10);
    }
}
