//! post-outline CLI
//!
//! Runs the page-ready outline pass on a stored page document or on a live page in Chrome.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use post_outline::browser::normalize_target;
use post_outline::{
    BrowserSession, ConnectionOptions, ElementNode, LaunchOptions, OutlineOptions,
    build_outline_and_notices_with, load_page,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// JSON report of what the pass did (default)
    Report,
    /// The updated page as HTML
    Html,
    /// The updated page as a JSON document
    Page,
    /// The outline as a Markdown list
    Markdown,
}

#[derive(Parser)]
#[command(name = "post-outline")]
#[command(version)]
#[command(about = "Build blog post outlines and comment fallback notices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run on a page stored as a JSON element tree
    Page {
        /// Page document
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Build the outline even when the page carries span.no-outline
        #[arg(long)]
        ignore_opt_out: bool,

        /// What to print
        #[arg(long, short = 'f', value_enum, default_value = "report")]
        format: Format,
    },
    /// Run on a live page in Chrome
    Url {
        /// URL, bare host, or local HTML file
        target: String,

        /// Build the outline even when the page carries span.no-outline
        #[arg(long)]
        ignore_opt_out: bool,

        /// Launch browser in headed mode (default: headless)
        #[arg(long, short = 'H')]
        headed: bool,

        /// Path to custom browser executable
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,

        /// WebSocket endpoint of an already running browser
        #[arg(long, value_name = "URL")]
        ws_endpoint: Option<String>,

        /// Print the updated document HTML instead of the report
        #[arg(long)]
        html: bool,
    },
    /// Print the JSON schema of page documents
    Schema,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Page {
            path,
            ignore_opt_out,
            format,
        } => run_page(path, OutlineOptions::new().ignore_opt_out(ignore_opt_out), format),
        Command::Url {
            target,
            ignore_opt_out,
            headed,
            chrome_path,
            ws_endpoint,
            html,
        } => {
            let session = match ws_endpoint {
                Some(ws) => BrowserSession::connect(ConnectionOptions::new(ws))?,
                None => {
                    let mut launch = LaunchOptions::new().headless(!headed);
                    if let Some(path) = chrome_path {
                        launch = launch.chrome_path(path);
                    }
                    BrowserSession::launch(launch)?
                }
            };

            let url = normalize_target(&target);
            let report = session
                .outline_page(&url, &OutlineOptions::new().ignore_opt_out(ignore_opt_out))
                .with_context(|| format!("Failed to process {}", url))?;

            if html {
                println!("{}", session.surface()?.document_html()?);
            } else {
                println!("{}", report.to_json()?);
            }
            session.close()?;
            Ok(())
        }
        Command::Schema => {
            let schema = schemars::schema_for!(ElementNode);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn run_page(path: PathBuf, options: OutlineOptions, format: Format) -> Result<()> {
    let mut page = load_page(&path).with_context(|| format!("Failed to load {}", path.display()))?;
    let report = build_outline_and_notices_with(&mut page, &options)?;

    match format {
        Format::Report => println!("{}", report.to_json()?),
        Format::Html => println!("{}", page.to_html()),
        Format::Page => println!("{}", page.to_json()?),
        Format::Markdown => match report.outline_markdown() {
            Some(markdown) => println!("{}", markdown),
            None => log::warn!("No outline was built for {}", path.display()),
        },
    }
    Ok(())
}
