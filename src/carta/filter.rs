//! Filter predicate engine.
//!
//! The catalog is narrowed along three independent dimensions: category,
//! free-text query and a single tag. Each dimension is a pass/fail test and an
//! item is shown only when all three pass. Everything here is pure and total:
//! there is no input for which a predicate fails.

use crate::model::{Category, Item};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Selector value the page uses for "every category".
pub const ALL_SENTINEL: &str = "todo";

/// Category dimension of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Option<&Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// A missing or empty selector value selects everything, as does the
    /// page's own sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | ALL_SENTINEL | "all" => CategoryFilter::All,
            other => CategoryFilter::Only(Category::from(other)),
        })
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_SENTINEL),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// The combined selection across all three dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
    pub active_tag: Option<String>,
}

impl FilterState {
    pub fn new(category: CategoryFilter) -> Self {
        Self {
            category,
            query: String::new(),
            active_tag: None,
        }
    }

    /// No constraint on any dimension.
    pub fn unfiltered() -> Self {
        Self::new(CategoryFilter::All)
    }

    /// Selecting the active tag again clears it; any other tag replaces it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
    }
}

/// Case-insensitive substring test over name, description and tags.
pub fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        item.name,
        item.description,
        item.tags.join(" ")
    )
    .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

pub fn matches_tag(item: &Item, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(tag) => item.has_tag(tag),
    }
}

/// Logical AND of the category, query and tag tests.
pub fn matches(item: &Item, state: &FilterState) -> bool {
    let ok_category = state.category.matches(item.category.as_ref());
    let ok_query = matches_query(item, &state.query);
    let ok_tag = matches_tag(item, state.active_tag.as_deref());
    ok_category && ok_query && ok_tag
}

/// Items passing the filter, in catalog order.
pub fn select<'a>(items: &'a [Item], state: &FilterState) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(item, state)).collect()
}
