//! Command line parsing
//!
//! `prospect-finder` opens the search window; `prospect-finder search` runs a
//! single search and prints the results.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::backend::api::DEFAULT_API_URL;
use crate::backend::types::SearchQuery;
use crate::export::Format;

#[derive(Debug, Parser)]
#[command(name = "prospect-finder", version, about = "HR Prospect Finder")]
pub struct Cli {
    /// Base URL of the prospects API
    #[arg(long, global = true, env = "PROSPECT_FINDER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the search window (default)
    Gui,
    /// Run one search and print the results
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, default_value = "")]
    pub role: String,

    /// Comma-separated skills, passed through as typed
    #[arg(long, default_value = "")]
    pub skills: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl SearchArgs {
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(&self.role, &self.skills, &self.location)
    }
}
