//! oxide-filter CLI
//!
//! Command-line tool for inspecting and compiling filter expressions.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oxide_filter_core::parser::{ParserOptions, DEFAULT_MAX_DEPTH};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Compile filter expressions into SQL WHERE clauses.
#[derive(Parser)]
#[command(name = "oxide-filter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON object mapping allowed fields to column names.
    #[arg(short, long, env = "OXIDE_FILTER_FIELDS")]
    fields: Option<PathBuf>,

    /// Deepest allowed function nesting.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream.
    Tokens {
        /// Filter expression.
        filter: String,
    },

    /// Print the checked filter tree.
    Ast {
        /// Filter expression.
        filter: String,

        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the MySQL WHERE clause.
    Sql {
        /// Filter expression.
        filter: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = ParserOptions {
        max_depth: cli.max_depth,
    };

    let output = match &cli.command {
        Commands::Tokens { filter } => commands::tokens(filter),
        Commands::Ast { filter, json } => commands::ast(filter, options, *json)?,
        Commands::Sql { filter } => {
            let fields = cli
                .fields
                .as_deref()
                .map(config::load_field_map)
                .transpose()?;
            commands::sql(filter, options, fields)?
        }
    };
    debug!("command finished");

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
