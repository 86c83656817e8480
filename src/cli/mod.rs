//! CLI module for the Essay Rating API

pub mod serve;

use clap::{Parser, Subcommand};

/// UPSC Essay Rating API - HTTP boundary around an essay evaluation workflow
#[derive(Parser)]
#[command(name = "essay-rating-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
