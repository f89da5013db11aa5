//! Prospect Finder: desktop search client for the HR prospects API
//!
//! Usage:
//!   prospect-finder                 - Open the search window
//!   prospect-finder search [...]    - Run one search and print the results
//!   prospect-finder help            - Show help

mod app;
mod backend;
mod commands;
mod error;
mod export;
mod native;
mod ui;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use app::ProspectFinder;
use backend::api::ProspectsClient;
use clap::Parser;
use commands::{Cli, Command, SearchArgs};
use error::{ExportError, SearchError};
use iced::{window, Size, Task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let backend = match ProspectsClient::new(&cli.api_url) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Using prospects API at {}", backend.endpoint());

    match cli.command {
        Some(Command::Search(args)) => match run_search(&backend, &args, io::stdout().lock()) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        None | Some(Command::Gui) => match start_gui(backend) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Window error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("prospect_finder=debug,info")
        } else {
            EnvFilter::new("prospect_finder=info")
        }
    });

    // try_init: a subscriber may already be installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Headless mode: one search. Results go to `--out` when given, otherwise to
/// `stdout`. Returns the number of prospects received.
fn run_search<W: Write>(
    backend: &ProspectsClient,
    args: &SearchArgs,
    mut stdout: W,
) -> Result<usize, SearchError> {
    let rt = tokio::runtime::Runtime::new().map_err(SearchError::Runtime)?;
    let prospects = rt.block_on(backend.search(&args.query()))?;
    tracing::info!("Found {} prospects", prospects.len());

    match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(ExportError::from)?;
            export::write(args.format, &prospects, BufWriter::new(file))?;
            writeln!(stdout, "Saved {} prospects to {}", prospects.len(), path.display())
                .map_err(ExportError::from)?;
        }
        None => export::write(args.format, &prospects, stdout)?,
    }
    Ok(prospects.len())
}

fn start_gui(backend: ProspectsClient) -> iced::Result {
    tracing::info!("Opening prospect finder window");

    iced::application(ProspectFinder::title, ProspectFinder::update, ProspectFinder::view)
        .theme(ProspectFinder::theme)
        .window(window::Settings {
            size: Size::new(960.0, 640.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (ProspectFinder::new(backend), Task::none()))
}
