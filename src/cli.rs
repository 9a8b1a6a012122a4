use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seqdoctor",
    version,
    about = "Inspect BLAST databases for formatting and permission problems"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $HOME/.config/seqdoctor/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Directory holding the databases (overrides database_dir from config)"
    )]
    pub database_dir: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Directory holding blastdbcmd (overrides bin from config; default: PATH)"
    )]
    pub bin: Option<PathBuf>,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log more to stderr (-v info, -vv debug)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every consistency check and print the findings.
    Diagnose,
    /// List the databases the checks would inspect.
    Databases,
}
