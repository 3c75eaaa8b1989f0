use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use url_shrinker::config::{self, Overrides};
use url_shrinker::{AppState, console};

/// Terminal client for a URL shortening service.
#[derive(Parser)]
#[command(name = "url-shrinker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base address of the service (overrides BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Page size (overrides PAGE_LIMIT)
    #[arg(long, global = true)]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, create and copy short URLs (default)
    Interactive,

    /// Print one page of short URLs
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Create a short URL and print the first page
    Shorten {
        /// URL to shorten
        url: String,

        /// Short code length (at least 4)
        #[arg(short, long)]
        length: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(Overrides {
        base_url: cli.base_url,
        page_limit: cli.limit,
    })?;
    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    let app = AppState::from_config(&config)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => console::run(app).await,
        Commands::List { page } => {
            app.list.set_page(page);
            console::list_once(&app).await
        }
        Commands::Shorten { url, length } => console::shorten_once(&app, url, length).await,
    }
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
