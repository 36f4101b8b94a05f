use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repo-record")]
#[command(about = "Inspect a GitHub repository document field by field")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Repository JSON document; read from stdin when omitted
    #[arg(long, short, env = "REPO_RECORD_FILE")]
    pub file: Option<PathBuf>,

    /// Print values as compact JSON
    #[arg(long, env = "REPO_RECORD_RAW")]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the value stored under a field name
    Get { key: String },

    /// Print a field of the repository owner
    Owner { key: String },

    /// List the fields present on the record
    Fields,

    /// Short human-readable overview
    Summary,
}
