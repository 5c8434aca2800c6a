use clap::{Parser, Subcommand};
use std::env;
use std::process;
use vectordb_client::{render, VectorDbClient, VectorDbError};

const DEFAULT_URL: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(name = "vectordb", version, about = "Client for a remote vector-store service")]
struct Cli {
    /// Service base URL; falls back to VECTORDB_URL, then localhost:8000
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ingest a text item with optional JSON metadata
    Add {
        text: String,
        /// Metadata as a JSON object, e.g. '{"source": "notes"}'
        #[arg(long, default_value = "{}")]
        metadata: String,
    },
    /// Nearest-neighbor text search
    Search {
        query: String,
        /// Bound on the number of results
        #[arg(short, long, default_value_t = 5)]
        k: i64,
    },
    /// Check service reachability
    Status,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let base_url = cli
        .url
        .or_else(|| env::var("VECTORDB_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let client = VectorDbClient::new(&base_url);

    let outcome = match cli.command {
        Command::Add { text, metadata } => client
            .add_json(&text, &metadata)
            .map(|id| println!("{}", render::ingest_status(&id))),
        Command::Search { query, k } => client
            .search(&query, k)
            .map(|hits| print!("{}", render::search_results(&hits))),
        Command::Status => client.health().map(|()| {
            println!("Service reachable at {}", client.base_url());
        }),
    };

    if let Err(err) = outcome {
        fail(&err);
    }
}

fn fail(err: &VectorDbError) -> ! {
    eprintln!("{}", render::error_status(err));
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_k_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["vectordb", "search", "hello", "-k", "two"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn numeric_k_parses_as_integer() {
        let cli = Cli::try_parse_from(["vectordb", "search", "hello", "-k", "2"]).unwrap();
        match cli.command {
            Command::Search { k, .. } => assert_eq!(k, 2),
            _ => panic!("expected the search command"),
        }
    }
}
