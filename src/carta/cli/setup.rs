use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.2"
/// Format for dev builds: "v0.3.2\ndev: abc1234 2026-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "carta", bin_name = "carta", version = get_version())]
#[command(about = "Browse, filter and render the menu catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON catalog file to use instead of the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The three filter dimensions, as on the page.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category to show (`todo` for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive text to look for in name, description and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only items carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Print the grid markup for the filtered items
    Grid(FilterArgs),

    /// Show one item in detail
    #[command(alias = "v")]
    Show {
        /// Item id (e.g. salmon-citricos)
        id: String,

        /// Print the detail dialog markup instead
        #[arg(long)]
        html: bool,
    },

    /// List the tags used in the catalog
    Tags,

    /// Compose an order message and its WhatsApp link
    Order {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Kind of order (e.g. Repostería, Gourmet)
        #[arg(long)]
        kind: Option<String>,

        /// Delivery date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        message: Option<String>,
    },
}
