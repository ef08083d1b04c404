//! # openantrag
//!
//! Command-line access to the OpenAntrag proposal API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use openantrag::config::{self, API_HOST_ENV, Config};
use openantrag::render::{DEFAULT_HEADING, RenderOptions};
use openantrag::theme::Background;
use openantrag::widget::{DEFAULT_COUNT, Widget};
use openantrag::{Client, Lookup};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "openantrag: fetch parliaments, process steps and proposals from the OpenAntrag API\n\
                  and render proposal lists as embeddable HTML."
)]
struct Args {
    /// Base URL of the API (overrides config file and OPENANTRAG_API_HOST)
    #[arg(long, global = true)]
    api_host: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the display name of a parliament (falls back to the key)
    Name { parliament: String },

    /// Print the process steps of a parliament as JSON (empty on failure)
    Steps { parliament: String },

    /// Print the latest proposals of a parliament as JSON
    Proposals {
        parliament: String,

        /// Number of proposals to fetch
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: u32,
    },

    /// Render the latest proposals as an HTML fragment
    Render {
        parliament: String,

        /// Number of proposals to fetch
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: u32,

        /// Background colour of each entry (#rgb, #rrggbb or a CSS name)
        #[arg(long)]
        color: Option<Background>,

        /// Heading text placed before the parliament name
        #[arg(long, default_value = DEFAULT_HEADING)]
        heading: String,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the config file location and effective settings
    Paths,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "openantrag=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load(args.config.as_deref(), args.api_host.as_deref())
        .context("failed to load configuration")?;

    let client = || Client::from_config(&config).context("failed to create API client");

    match args.command {
        Command::Paths => print_paths(&config, args.config.as_ref()),
        Command::Name { parliament } => {
            println!("{}", client()?.display_name(&parliament));
        }
        Command::Steps { parliament } => {
            let steps = client()?.process_steps(&parliament);
            println!("{}", serde_json::to_string_pretty(&steps)?);
        }
        Command::Proposals { parliament, count } => {
            let proposals = client()?
                .top_proposals(&parliament, count)
                .with_context(|| format!("failed to fetch proposals for {parliament}"))?;
            println!("{}", serde_json::to_string_pretty(&proposals)?);
        }
        Command::Render {
            parliament,
            count,
            color,
            heading,
            output,
        } => {
            let widget = Widget::new(parliament.as_str())
                .with_count(count)
                .with_options(RenderOptions {
                    heading,
                    background: color,
                });
            let html = widget
                .render(&client()?)
                .with_context(|| format!("failed to render proposals for {parliament}"))?;
            match output {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
        }
    }

    Ok(())
}

fn print_paths(config: &Config, explicit: Option<&PathBuf>) {
    match (explicit, config::default_config_path()) {
        (Some(path), _) => println!("Config file:  {}", path.display()),
        (None, Some(path)) if path.exists() => println!("Config file:  {}", path.display()),
        (None, Some(path)) => println!("Config file:  {} (not present)", path.display()),
        (None, None) => println!("Config file:  (no config directory on this platform)"),
    }
    println!("API host:     {}", config.api_host);
    println!("Host env var: {API_HOST_ENV}");
    match config.timeout() {
        Some(timeout) => println!("Timeout:      {}s", timeout.as_secs()),
        None => println!("Timeout:      client default"),
    }
    for (lookup, name) in [
        (Lookup::DisplayName, "name"),
        (Lookup::ProcessSteps, "steps"),
        (Lookup::TopProposals, "proposals"),
    ] {
        println!("On failure:   {name:<10} {:?}", lookup.policy());
    }
}
