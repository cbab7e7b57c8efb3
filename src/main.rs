//! Dissect Textual widgets: inheritance chain, default CSS per ancestor, and
//! the child widgets each class composes.
//!
//! Run the binary to browse interactively.
//! Run with `--print <WIDGET>` to dump one widget's report to stdout.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    navigation::NavigationController,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::ui::{frame, plain::PlainSurface};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Inspect Textual widget classes")]
struct Cli {
    /// Widget class to focus first (defaults to the configured or catalog default).
    widget: Option<String>,

    /// Catalog JSON file to inspect instead of the bundled Textual catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the report for WIDGET and exit instead of starting the TUI.
    #[arg(long)]
    print: bool,

    /// Write logs to this file (filtered by `RUST_LOG`).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // stdout carries the TUI / report, never logs.
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = AppConfig::load();
    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };
    let catalog = Arc::new(catalog);

    let start = cli
        .widget
        .clone()
        .or_else(|| config.default_widget.clone())
        .unwrap_or_else(|| catalog.name(catalog.default_class()).to_string());

    // ── print mode ────────────────────────────────────────────
    if cli.print {
        let mut navigation = NavigationController::new(Arc::clone(&catalog));
        let mut surface = PlainSurface::new(catalog);
        navigation
            .initialize(&start, &mut surface)
            .with_context(|| format!("inspecting `{start}`"))?;
        if let Some(report) = surface.output {
            print!("{report}");
        }
        return Ok(());
    }

    let mut state = AppState::new(catalog, config);
    state.navigation.initialize(&start, &mut state.screen)?;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        terminal.draw(|f| frame::draw(f, state))?;

        // Each event is handled to completion before the next is read.
        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            // Redrawn at the top of the loop.
            AppEvent::Resize => {}
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
