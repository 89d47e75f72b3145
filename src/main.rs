//! # `flake-master`
//!
//! `flake-master` keeps the flake8 setup of Python projects in line with a shared preset.
//! A preset bundles flake8 plugin pins and flake8 options and lives in a presets repository,
//! at any URL, or in a local `.cfg` file.
//!
//! ## Usage
//!
//! **First deployment:**
//! ```sh
//! flake-master setup my_preset ./my-project
//! ```
//!
//! **Pick up a newer revision later:**
//! ```sh
//! flake-master upgrade ./my-project
//! ```
//!
//! See `flake-master --help` for more options and details.

use clap::Parser as _;
use flake_master::cli::Args;
use flake_master::error::FlakeMasterError;
use flake_master::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    let system = RealSystem::new();
    match flake_master::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<FlakeMasterError>()
                    .map_or(1, FlakeMasterError::exit_code),
            );
        }
    }
}
