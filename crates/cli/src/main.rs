use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use shortform::{ShortFormError, ShortFormResolver};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "shortform",
    version = "0.1.0",
    about = "Short aliases for dot-separated identifiers"
)]
struct Cli {
    #[arg(long = "id", value_name = "IDENTIFIER", help = "Identifier to include, may be repeated")]
    ids: Vec<String>,

    #[arg(
        long,
        env = "SHORTFORM_IDS_FILE",
        help = "File with one identifier per line ('#' starts a comment)"
    )]
    ids_file: Option<PathBuf>,

    #[arg(short, long, help = "Log at debug level unless RUST_LOG is set")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let identifiers = input::load_identifiers(cli.ids, cli.ids_file.as_deref()).await?;
    let resolver = ShortFormResolver::new(&identifiers);
    info!("Loaded {} identifiers", identifiers.len());

    let out = run(&resolver, cli.command)?;
    if !out.is_empty() {
        println!("{out}");
    }

    Ok(())
}

fn run(resolver: &ShortFormResolver, command: Commands) -> Result<String, CliError> {
    match command {
        Commands::List { json } => output::render_table(resolver, json),
        Commands::Resolve { alias } => resolver
            .resolve(&alias)
            .map(str::to_string)
            .ok_or_else(|| ShortFormError::invalid_alias("alias", alias).into()),
        Commands::AliasOf { identifier } => resolver
            .short_form(&identifier)
            .map(str::to_string)
            .ok_or(CliError::UnknownIdentifier(identifier)),
        Commands::Expand {
            key,
            assignments,
            json,
        } => {
            let mut map = input::parse_assignments(&assignments)?;
            resolver.expand_short_form(&mut map, &key)?;
            output::render_map(&map, json)
        }
    }
}
