//! spmsetup - SPM standalone toolkit installer
//!
//! A command line tool that installs the SPM standalone toolkit and its
//! MATLAB Runtime into a Conda environment: toolkit assembly from split
//! archive parts, runtime download and silent install for the host
//! operating system, and environment activation hooks.

use clap::Parser;

mod archive;
mod assemble;
mod cache;
mod cli;
mod commands;
mod download;
mod envhooks;
mod error;
mod platform;
mod process;
mod progress;
mod runtime;
mod settings;
mod sitepkgs;
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.prefix, cli.verbose, args),
        Commands::Download => commands::download::run(cli.verbose),
        Commands::Env => commands::env::run(cli.prefix),
        Commands::Status => commands::status::run(cli.prefix),
        Commands::Clean(args) => commands::clean::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
