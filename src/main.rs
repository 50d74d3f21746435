use clap::Parser;
use jokedeck::core::config::{self, CliOverrides};
use jokedeck::jokes::{Category, Language};
use jokedeck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "jokedeck", about = "Swipe through jokes in your terminal")]
struct Args {
    /// Joke category to fetch
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Joke language
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Joke API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to jokedeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create("jokedeck.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        category: args.category,
        language: args.language,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Joke Deck starting up: category={}, language={}, base_url={}",
        resolved.category.label(),
        resolved.language.code(),
        resolved.base_url
    );

    tui::run(resolved)
}
