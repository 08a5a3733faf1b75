use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

pub mod names {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const PRICE: &str = "price";
    pub const TAGS: &str = "tags";
    pub const CATEGORY: &str = "category";
    pub const DIM: &str = "dim";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static CARTA_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    Theme::new()
        .add(names::ID, muted.clone())
        .add(names::NAME, Style::new().bold())
        .add(names::PRICE, Style::new().green())
        .add(names::TAGS, Style::new().cyan())
        .add(names::CATEGORY, Style::new().yellow())
        .add(names::DIM, muted.clone().italic())
        .add(names::INFO, muted)
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
