//! CLI definitions for the docdex command-line interface.
//!
//! Two subcommands: `search` to query an index file and `inspect` to print
//! corpus statistics. Both accept the index in any of the supported payload
//! shapes, including the generator's `search_index.js` assignment form.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docdex",
    about = "Query the search index of a static documentation site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display ranked results
    Search {
        /// Path to the index file (search_index.js or plain JSON)
        index: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Snippet width in characters
        #[arg(long, default_value = "120")]
        snippet: usize,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Inspect an index file and print corpus statistics
    Inspect {
        /// Path to the index file
        index: String,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
