use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinematch", about = "In-memory movie similarity index")]
pub struct Cli {
    /// Override the embedding dimension (defaults to the provider's native
    /// width; 384 for the offline hashing provider)
    #[arg(long, global = true)]
    pub dim: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read NDJSON requests from stdin and write one JSON response per line.
    ///
    /// The index lives only for the lifetime of the process; there is no
    /// persistence, so all adds must happen within the same session.
    Serve,
    /// Load a JSON array of movies from a file, then answer a single query
    /// and print the recommendations.
    Demo {
        /// Path to a JSON file: [{"id": ..., "title": ..., "overview": ...}, ...]
        file: String,
        /// Movie id to fetch recommendations for
        id: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}
