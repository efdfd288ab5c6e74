//! Groupboard CLI
//!
//! Fetches a published list of social-network groups and shows the ones
//! matching the requested color, privacy and friend filters.

mod interactive;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::{env_vars, Config};
use engine::{ColorFilter, EntryFilter, FilterCriteria, GroupBoard, PrivacyFilter};
use render::RenderOptions;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Groupboard - browse and filter social-network groups
#[derive(Parser, Debug)]
#[command(name = "groupboard", version, author, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// URL of the group list
    #[arg(long, global = true, env = env_vars::URL)]
    url: Option<String>,

    /// Read the group list from a local JSON file instead
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Delay before the request is issued, in milliseconds
    #[arg(long = "delay-ms", global = true)]
    delay_ms: Option<u64>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List groups matching the given filters
    List(ListArgs),

    /// Filter groups interactively
    #[command(alias = "i")]
    Interactive,

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Avatar color (any, blue, orange, red, yellow, white, purple, green)
    #[arg(long, default_value = "any")]
    color: ColorFilter,

    /// Privacy (all, open, closed)
    #[arg(long, default_value = "all")]
    privacy: PrivacyFilter,

    /// Friend membership (all, withFriends, withoutFriends)
    #[arg(long, default_value = "all")]
    entry: EntryFilter,

    /// Print the matching groups as JSON
    #[arg(long)]
    json: bool,

    /// Do not list friend names
    #[arg(long = "hide-friends")]
    hide_friends: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if !config.display.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Commands::List(args) => cmd_list(config, args).await,
        Commands::Interactive => cmd_interactive(config).await,
        Commands::Config => cmd_config(&config),
    }
}

/// Load the configuration file and apply command line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(url) = &cli.url {
        config.source.url = url.clone();
        config.source.file = None;
    }
    if let Some(file) = &cli.file {
        config.source.file = Some(file.clone());
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.source.delay_ms = delay_ms;
    }
    if cli.no_color {
        config.display.color = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn load_board(config: Config) -> Result<GroupBoard> {
    let source = config.source.describe();
    let mut board = GroupBoard::new(config)?;
    let count = board
        .load()
        .await
        .with_context(|| format!("Failed to load groups from {}", source))?;
    info!("{} groups available", count);
    Ok(board)
}

async fn cmd_list(config: Config, args: ListArgs) -> Result<()> {
    let mut opts = RenderOptions::from(&config.display);
    opts.show_friends &= !args.hide_friends;

    let mut board = load_board(config).await?;
    let session = board.session_mut();
    session.set_criteria(FilterCriteria::new(args.color, args.privacy, args.entry));

    let visible = session.visible();
    let mut out = std::io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &visible)?;
        writeln!(out)?;
        return Ok(());
    }

    render::render_table(&mut out, &visible, &opts)?;
    render::render_summary(
        &mut out,
        session.criteria(),
        visible.len(),
        session.groups().len(),
    )?;
    Ok(())
}

async fn cmd_interactive(config: Config) -> Result<()> {
    let opts = RenderOptions::from(&config.display);
    let mut board = load_board(config).await?;
    interactive::run(board.session_mut(), &opts)?;
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
