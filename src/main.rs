use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use shellfolio::core::commands::Registry;
use shellfolio::core::config::{self, ResolvedConfig, ShellfolioConfig};
use shellfolio::core::dispatcher::Dispatcher;
use shellfolio::core::session::Session;
use shellfolio::providers::{HttpProvider, RecordingNavigator};
use shellfolio::tui;

#[derive(Parser)]
#[command(name = "shellfolio", about = "A portfolio that answers like a shell")]
struct Args {
    /// Config file to read instead of ~/.shellfolio/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a line without the TUI and print the transcript (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Print the one-shot transcript as JSON
    #[arg(long, requires = "commands")]
    json: bool,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shellfolio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shellfolio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("shellfolio starting up");

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("{e}; falling back to defaults");
        ShellfolioConfig::default()
    });
    let resolved = config::resolve(&file_config);

    if args.commands.is_empty() {
        tui::run(resolved, !args.no_banner)
    } else {
        run_once(resolved, &args.commands, args.json).await
    }
}

/// One-shot mode: every line runs in order, navigations are recorded instead of opened.
async fn run_once(config: ResolvedConfig, lines: &[String], json: bool) -> io::Result<()> {
    let navigator = Arc::new(RecordingNavigator::new());
    let dispatcher = Dispatcher::new(
        Arc::new(Registry::builtin()),
        Arc::new(config.settings),
        navigator.clone(),
        Arc::new(HttpProvider::new(config.provider)),
    );
    let prompt = dispatcher.settings().prompt();
    let mut session = Session::new(dispatcher);
    for line in lines {
        session.submit(line).await;
    }

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, session.history()).map_err(io::Error::other)?;
        writeln!(out)?;
    } else {
        for entry in session.history().entries() {
            writeln!(out, "{prompt} {}", entry.command)?;
            writeln!(out, "{}", tui::html::to_plain_text(&entry.output))?;
        }
    }
    for url in navigator.requests() {
        writeln!(out, "[open] {url}")?;
    }
    Ok(())
}
