//! # Bower Git CLI
//!
//! Binary entry point for the `bower-git` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the checkout pipeline over the supplied targets.
//! - Translating failures into user-friendly output and a non-zero
//!   exit code.
//!
//! The core logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
