//! Command-line interface for coat-decoder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **interpret**: Interpret a dog's trait results into plain-language statements
//! - **loci**: List the loci and genotype codes the interpreter recognizes
//! - **serve**: Start the JSON web API
//!
//! ## Usage
//!
//! ```text
//! # Interpret an exported trait profile
//! coat-decoder interpret profile.txt
//!
//! # Pipe a genotype table
//! cat genotypes.tsv | coat-decoder interpret - --input-format tsv
//!
//! # JSON output for scripting
//! coat-decoder interpret profile.txt --format json
//!
//! # Fail on unrecognized codes
//! coat-decoder interpret profile.txt --strict
//!
//! # Start the web API
//! coat-decoder serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod interpret;
pub mod loci;

#[derive(Parser)]
#[command(name = "coat-decoder")]
#[command(version)]
#[command(about = "Interpret dog coat color and trait genotypes")]
#[command(
    long_about = "coat-decoder turns the raw genotype calls of a canine trait panel into plain-language statements.\n\nIt reads an exported trait profile or a genotype table and reports, per trait group:\n- The group's quick genotype\n- What the genotypes mean for coat color, coat type, body features and performance\n- Findings that need attention, such as double merle, albinism or POMC"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret trait results from a profile export or genotype table
    Interpret(interpret::InterpretArgs),

    /// List recognized loci and genotype codes
    Loci(loci::LociArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
