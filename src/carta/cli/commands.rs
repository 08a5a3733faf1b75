//! Dispatch for the CLI.
//!
//! - `run()`: parses arguments and calls the matching handler (called by `main.rs`)
//! - `init_context()`: loads configuration and the catalog into an `AppContext`
//! - `handle_*()`: call one API method and print its `CmdResult`
//!
//! Handlers never filter or render markup themselves; that is the library's job.

use super::render::{print_messages, render_item_detail, render_item_list, render_text_list};
use super::setup::{Cli, Commands, FilterArgs};
use carta::api::{CartaApi, CmdMessage, FilterQuery};
use carta::composer::OrderForm;
use carta::config::CartaConfig;
use carta::error::Result;
use carta::model::Item;
use carta::store::fs::FileCatalog;
use carta::store::memory::InMemoryCatalog;
use carta::store::CatalogStore;
use chrono::NaiveDate;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the configuration directory.
pub const HOME_ENV: &str = "CARTA_HOME";

/// Where the catalog came from: the built-in menu or a JSON file.
enum CatalogSource {
    Builtin(InMemoryCatalog),
    File(FileCatalog),
}

impl CatalogSource {
    fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin(_) => "built-in".to_string(),
            CatalogSource::File(file) => file.path().display().to_string(),
        }
    }
}

impl CatalogStore for CatalogSource {
    fn items(&self) -> &[Item] {
        match self {
            CatalogSource::Builtin(store) => store.items(),
            CatalogSource::File(store) => store.items(),
        }
    }
}

struct AppContext {
    api: CartaApi<CatalogSource>,
    verbose: bool,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&ctx, FilterArgs::default()),
        Some(Commands::List(filter)) => handle_list(&ctx, filter),
        Some(Commands::Grid(filter)) => handle_grid(&ctx, filter),
        Some(Commands::Show { id, html }) => handle_show(&ctx, &id, html),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Order {
            name,
            phone,
            email,
            kind,
            date,
            message,
        }) => {
            let form = OrderForm {
                name: name.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
                email: email.unwrap_or_default(),
                kind: kind.unwrap_or_default(),
                date: date.map(format_date).unwrap_or_default(),
                message: message.unwrap_or_default(),
            };
            handle_order(&ctx, &form)
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "carta", "carta").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir() {
        Some(dir) => CartaConfig::load(dir)?,
        None => CartaConfig::default(),
    };

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());
    let store = match catalog_path {
        Some(path) => CatalogSource::File(FileCatalog::load(path)?),
        None => CatalogSource::Builtin(InMemoryCatalog::reference()),
    };

    let ctx = AppContext {
        api: CartaApi::new(store, config),
        verbose: cli.verbose,
        use_color: if cli.no_color { Some(false) } else { None },
    };

    let source = CmdMessage::info(format!("Catalog: {}", ctx.api.store().describe()));
    print_messages(&[source], ctx.verbose, ctx.use_color);

    Ok(ctx)
}

fn filter_query(filter: FilterArgs) -> FilterQuery {
    FilterQuery {
        category: filter.category,
        search: filter.search,
        tag: filter.tag,
    }
}

fn handle_list(ctx: &AppContext, filter: FilterArgs) -> Result<()> {
    let result = ctx.api.list_items(&filter_query(filter))?;
    let prices = ctx.api.config().price_formatter();
    print!(
        "{}",
        render_item_list(&result.listed_items, &prices, ctx.use_color)
    );
    print_messages(&result.messages, ctx.verbose, ctx.use_color);
    Ok(())
}

fn handle_grid(ctx: &AppContext, filter: FilterArgs) -> Result<()> {
    let result = ctx.api.render_grid(&filter_query(filter))?;
    if let Some(markup) = &result.markup {
        println!("{}", markup);
    }
    print_messages(&result.messages, ctx.verbose, ctx.use_color);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str, html: bool) -> Result<()> {
    let result = ctx.api.show_item(id)?;
    if html {
        if let Some(markup) = &result.markup {
            println!("{}", markup);
        }
    } else {
        let prices = ctx.api.config().price_formatter();
        for item in &result.listed_items {
            println!("{}", render_item_detail(item, &prices, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.verbose, ctx.use_color);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tags()?;
    print!(
        "{}",
        render_text_list(&result.tags, "No tags in catalog.", ctx.use_color)
    );
    Ok(())
}

fn handle_order(ctx: &AppContext, form: &OrderForm) -> Result<()> {
    let result = ctx.api.compose_order(form)?;
    if let Some(order) = &result.order {
        println!("{}\n", order.text);
        println!("{}", order.url);
    }
    print_messages(&result.messages, ctx.verbose, ctx.use_color);
    Ok(())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args_map_onto_query() {
        let query = filter_query(FilterArgs {
            category: Some("todo".to_string()),
            search: Some("cítric".to_string()),
            tag: None,
        });
        assert_eq!(query, FilterQuery::new().category("todo").search("cítric"));
    }

    #[test]
    fn dates_use_iso_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "2026-03-07");
    }

    #[test]
    fn builtin_source_serves_reference_items() {
        let source = CatalogSource::Builtin(InMemoryCatalog::reference());
        assert_eq!(source.items().len(), 8);
        assert_eq!(source.describe(), "built-in");
        assert!(source.find_by_id("salmon-citricos").is_some());
    }
}
