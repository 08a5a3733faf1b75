use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu section an item belongs to.
///
/// Only two sections are known to the page. Anything else read from a catalog
/// file is kept verbatim in [`Category::Other`] so it still round-trips and can
/// be selected explicitly, but it never matches a known section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Reposteria,
    Gourmet,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Reposteria => "reposteria",
            Category::Gourmet => "gourmet",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "reposteria" => Category::Reposteria,
            "gourmet" => Category::Gourmet,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry. Items are created once when the store is built and
/// never change afterwards.
///
/// The page's Spanish field names are accepted as aliases so its data
/// can be loaded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default, alias = "categoria")]
    pub category: Option<Category>,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(default, alias = "etiquetas")]
    pub tags: Vec<String>,
    #[serde(alias = "imagen")]
    pub image: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        tags: &[&str],
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: Some(category),
            name: name.into(),
            description: description.into(),
            price,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: image.into(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
