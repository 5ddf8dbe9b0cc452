use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lunchy")]
#[command(about = "The friendly launchctl wrapper", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// Positionals are optional here; the dispatcher reports missing ones so
// start/stop/restart can fall back to the profile.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List installed launch agents
    #[command(alias = "ls")]
    List {
        /// Only names containing this
        pattern: Option<String>,
    },
    /// Show launchctl status of installed launch agents
    #[command(alias = "ps")]
    Status {
        /// Only labels containing this
        pattern: Option<String>,
    },
    /// Load a launch agent, or every agent in ./.lunchy
    Start { name: Option<String> },
    /// Unload a launch agent, or every agent in ./.lunchy
    Stop { name: Option<String> },
    /// Unload then load a launch agent, or every agent in ./.lunchy
    Restart { name: Option<String> },
    /// Print a launch agent's plist
    Show { name: Option<String> },
    /// Open a launch agent's plist in $EDITOR
    Edit { name: Option<String> },
    /// Copy a plist into ~/Library/LaunchAgents
    #[command(alias = "add")]
    Install { path: Option<PathBuf> },
    /// Delete a launch agent's plist
    #[command(aliases = ["rm", "uninstall"])]
    Remove { name: Option<String> },
    /// List plists under a directory ("homebrew" scans the Cellar)
    Scan { path: Option<String> },
}

/// Exit status for a failed parse. Help and version output are successes;
/// every other parse failure is a usage error with status 1 rather than
/// clap's 2.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
