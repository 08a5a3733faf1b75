//! # Renderer
//!
//! Maps a filtered item sequence to what the grid shows. The output is either a
//! single empty-state placeholder or one card per item, in input order.
//!
//! Card fields are escaped and formatted here, in Rust, so templates only
//! decide structure. The markup itself comes from the embedded templates in
//! [`crate::templates`].

use crate::error::Result;
use crate::html::escape_html;
use crate::model::Item;
use crate::price::PriceFormatter;
use crate::templates;
use serde::Serialize;

/// Placeholder text shown when no item passes the filter.
pub const EMPTY_MESSAGE: &str =
    "No hay resultados con esos filtros. Prueba otra búsqueda o etiqueta.";

/// Display data for one item. Every text field is already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardNode {
    /// Raw item id, used to look the item up again on activation.
    #[serde(skip)]
    pub key: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl CardNode {
    pub fn new(item: &Item, prices: &PriceFormatter) -> Self {
        Self {
            key: item.id.clone(),
            id: escape_html(&item.id),
            name: escape_html(&item.name),
            description: escape_html(&item.description),
            price: escape_html(&prices.format(item.price)),
            tags: item.tags.iter().map(|tag| escape_html(tag)).collect(),
            image: escape_html(&item.image),
        }
    }
}

#[derive(Serialize)]
struct GridData<'a> {
    cards: &'a [CardNode],
}

#[derive(Serialize)]
struct EmptyData<'a> {
    message: &'a str,
}

/// Result of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutput {
    Empty { message: String },
    Cards(Vec<CardNode>),
}

impl DisplayOutput {
    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayOutput::Empty { .. })
    }

    pub fn cards(&self) -> &[CardNode] {
        match self {
            DisplayOutput::Empty { .. } => &[],
            DisplayOutput::Cards(cards) => cards,
        }
    }

    /// Activation keys of the rendered cards, in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.cards().iter().map(|card| card.key.as_str()).collect()
    }

    pub fn to_markup(&self) -> Result<String> {
        match self {
            DisplayOutput::Empty { message } => templates::render(
                templates::EMPTY,
                &EmptyData {
                    message: &escape_html(message),
                },
            ),
            DisplayOutput::Cards(cards) => {
                templates::render(templates::GRID, &GridData { cards })
            }
        }
    }
}

/// Turns items into display nodes.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    prices: PriceFormatter,
}

impl Renderer {
    pub fn new(prices: PriceFormatter) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &PriceFormatter {
        &self.prices
    }

    pub fn card(&self, item: &Item) -> CardNode {
        CardNode::new(item, &self.prices)
    }

    pub fn render(&self, items: &[&Item]) -> DisplayOutput {
        if items.is_empty() {
            return DisplayOutput::Empty {
                message: EMPTY_MESSAGE.to_string(),
            };
        }
        DisplayOutput::Cards(items.iter().map(|item| self.card(item)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::price::CurrencyFormat;
    use crate::store::memory::InMemoryCatalog;
    use crate::store::CatalogStore;

    fn renderer() -> Renderer {
        Renderer::new(PriceFormatter::from(CurrencyFormat::default()))
    }

    #[test]
    fn empty_input_yields_placeholder_only() {
        let output = renderer().render(&[]);
        assert!(output.is_empty());
        assert!(output.cards().is_empty());
        assert_eq!(
            output.to_markup().unwrap(),
            format!(r#"<div class="empty">{}</div>"#, EMPTY_MESSAGE)
        );
    }

    #[test]
    fn one_card_per_item_in_input_order() {
        let catalog = InMemoryCatalog::reference();
        let items: Vec<&Item> = catalog.items().iter().rev().take(3).collect();
        let output = renderer().render(&items);
        assert_eq!(
            output.keys(),
            vec!["postre-maridaje", "risotto-setas", "salmon-citricos"]
        );

        let markup = output.to_markup().unwrap();
        assert_eq!(markup.matches("<article class=\"card\"").count(), 3);
        let postre = markup.find("data-item-id=\"postre-maridaje\"").unwrap();
        let salmon = markup.find("data-item-id=\"salmon-citricos\"").unwrap();
        assert!(postre < salmon);
    }

    #[test]
    fn card_carries_formatted_price_and_tags() {
        let catalog = InMemoryCatalog::reference();
        let item = catalog.find_by_id("ensalada-burrata").unwrap();
        let card = renderer().card(item);
        assert_eq!(card.price, "$\u{a0}26.000");
        assert_eq!(card.tags, vec!["veg", "popular"]);

        let markup = renderer().render(&[item]).to_markup().unwrap();
        assert!(markup.contains(r#"aria-label="Ver Ensalada burrata""#));
        assert!(markup.contains(r#"<img src="images/gourmet/ensalada-burrata.svg" alt="Ensalada burrata" loading="lazy" />"#));
        assert!(markup.contains("<span class=\"card__price\">$\u{a0}26.000</span>"));
        assert!(markup.contains(r#"<span class="tag">veg</span><span class="tag">popular</span>"#));
    }

    #[test]
    fn script_in_name_is_escaped() {
        let item = Item::new(
            "evil",
            Category::Gourmet,
            "<script>alert('x')</script>",
            "\"quoted\" & more",
            1.0,
            &["<b>"],
            "x.svg\" onerror=\"boom",
        );
        let markup = renderer().render(&[&item]).to_markup().unwrap();
        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(markup.contains("&quot;quoted&quot; &amp; more"));
        assert!(markup.contains("x.svg&quot; onerror=&quot;boom"));
    }

    #[test]
    fn activation_key_is_raw_id() {
        let item = Item::new("a&b", Category::Gourmet, "A", "", 1.0, &[], "a.svg");
        let output = renderer().render(&[&item]);
        assert_eq!(output.keys(), vec!["a&b"]);
        assert!(output.to_markup().unwrap().contains("data-item-id=\"a&amp;b\""));
    }

    #[test]
    fn default_renderer_formats_prices() {
        let catalog = InMemoryCatalog::reference();
        let item = catalog.find_by_id("salmon-citricos").unwrap();
        assert_eq!(Renderer::default().card(item).price, "$\u{a0}42.000");
    }

    #[test]
    fn unavailable_formatter_falls_back() {
        let catalog = InMemoryCatalog::reference();
        let item = catalog.find_by_id("croissant-almendra").unwrap();
        let card = Renderer::new(PriceFormatter::unavailable()).card(item);
        assert_eq!(card.price, "$9");
    }
}
