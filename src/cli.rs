use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "dbname",
    version,
    about = "Per-branch database names for local development"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the database name for the current git branch
    Name(NameArgs),
    /// Print the sanitized form of a branch name
    Sanitize(SanitizeArgs),
}

#[derive(Args, Debug)]
pub(crate) struct NameArgs {
    /// Database resource name
    pub(crate) resource_name: String,
    /// Name of the database server resource the database is added to
    #[arg(long, default_value = "postgres")]
    pub(crate) server: String,
    /// Base database name (default: the resource name)
    #[arg(long)]
    pub(crate) database: Option<String>,
    /// Use this branch instead of asking git (also: DBNAME_BRANCH)
    #[arg(long)]
    pub(crate) branch: Option<String>,
    /// Directory to run git in (default: current directory)
    #[arg(long)]
    pub(crate) repo: Option<PathBuf>,
    /// Print the registered server resource as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Do not warn when no branch was detected
    #[arg(long, short)]
    pub(crate) quiet: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SanitizeArgs {
    /// Branch name (can include `/`, e.g. `feature/JIRA-1234-foo`)
    pub(crate) branch_name: String,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Name(args) => commands::name::cmd_name(args),
        Commands::Sanitize(args) => commands::name::cmd_sanitize(args),
    }
}
