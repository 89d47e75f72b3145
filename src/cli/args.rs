use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for flake-master
#[derive(Parser, Debug, Clone)]
#[command(name = "flake-master")]
#[command(about = "A CLI tool for bootstrapping and upgrading flake8 presets in Python projects")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Settings file path (defaults to ./flake_master.yaml when present)
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<String>,

    /// Base URL of the presets repository
    #[arg(
        long,
        value_name = "URL",
        env = "FLAKE_MASTER_PRESETS_REPO_URL",
        global = true
    )]
    pub presets_repo_url: Option<String>,

    /// Local directory searched for .cfg preset files
    #[arg(
        long,
        value_name = "DIR",
        env = "FLAKE_MASTER_PRESETS_DIR",
        global = true
    )]
    pub presets_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Apply a preset to a project for the first time
    Setup {
        /// Preset name, URL, or .cfg file
        preset: String,

        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Re-apply the deployed preset if a newer revision is available
    Upgrade {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print a preset without applying it
    Show {
        /// Preset name, URL, or .cfg file
        preset: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_setup_with_default_path() {
        let args = Args::parse_from(["flake-master", "setup", "base"]);
        match args.command {
            Command::Setup { preset, path } => {
                assert_eq!(preset, "base");
                assert_eq!(path, PathBuf::from("."));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from([
            "flake-master",
            "upgrade",
            "project",
            "--presets-repo-url",
            "http://repo",
            "-v",
        ]);
        assert!(args.verbose);
        assert_eq!(args.presets_repo_url.as_deref(), Some("http://repo"));
        assert!(matches!(args.command, Command::Upgrade { .. }));
    }
}
