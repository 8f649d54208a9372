//! Install command implementation
//!
//! Runs the whole installation procedure in order:
//! 1. Assemble the SPM standalone toolkit from its split archive parts
//!    and run its bundled installer
//! 2. Download the MATLAB Runtime archive for the host (cached)
//! 3. Run the platform's native silent runtime installer
//! 4. Write activation/deactivation hooks into the Conda environment
//!
//! Every step blocks on an external process; the first failure aborts the
//! run with a non-zero exit. Steps that already ran are not rolled back.

use std::path::{Path, PathBuf};

use console::Style;
use inquire::Confirm;

use crate::assemble;
use crate::cache;
use crate::cli::InstallArgs;
use crate::download::{Downloader, Fetched};
use crate::envhooks;
use crate::error::Result;
use crate::platform::HostOs;
use crate::progress::StepSpinner;
use crate::runtime;
use crate::settings::Settings;

/// Run install command
pub fn run(prefix_flag: Option<PathBuf>, verbose: bool, args: InstallArgs) -> Result<()> {
    let settings = Settings::load()?;
    let os = HostOs::detect()?;
    let prefix = envhooks::conda_prefix(prefix_flag)?;

    let header = Style::new().bold();
    println!(
        "{} {} ({})",
        header.apply_to("Installing for"),
        os,
        prefix.display()
    );

    if !args.skip_toolkit {
        install_toolkit(&settings, &args, verbose)?;
    }

    if !args.skip_runtime {
        let archive_path = download_runtime(&settings, os, verbose)?;
        if os == HostOs::MacOs && !args.yes && !confirm_privileged_install()? {
            println!("Installation cancelled. No changes were made to the runtime.");
            return Ok(());
        }
        install_runtime(&settings, os, &prefix, &archive_path)?;
    }

    if !args.skip_hooks {
        let (activate, deactivate) = envhooks::configure(&prefix, os, &settings.runtime)?;
        println!("Wrote {}", activate.display());
        println!("Wrote {}", deactivate.display());
    }

    println!(
        "{}",
        Style::new().green().apply_to("Installation complete.")
    );
    println!("Re-activate the environment to pick up the new variables.");

    Ok(())
}

/// Assemble and install the standalone toolkit, then drop its build tree
fn install_toolkit(settings: &Settings, args: &InstallArgs, verbose: bool) -> Result<()> {
    let spm_dir = args
        .spm_dir
        .clone()
        .unwrap_or_else(|| settings.toolkit.spm_dir.clone());
    assemble::check_build_dir(&spm_dir)?;

    if verbose {
        println!("Toolkit build directory: {}", spm_dir.display());
    }

    let spinner = StepSpinner::start("Assembling SPM standalone toolkit...");
    match assemble::assemble_toolkit(&spm_dir) {
        Ok(()) => spinner.finish("Toolkit archive assembled"),
        Err(e) => {
            spinner.abandon();
            return Err(e);
        }
    }

    let spinner = StepSpinner::start("Installing SPM standalone toolkit...");
    match assemble::install_toolkit(&spm_dir) {
        Ok(()) => spinner.finish("Toolkit installed"),
        Err(e) => {
            spinner.abandon();
            return Err(e);
        }
    }

    assemble::remove_build_dir(&spm_dir)?;

    Ok(())
}

/// Fetch the runtime archive into the download cache (idempotent)
fn download_runtime(settings: &Settings, os: HostOs, verbose: bool) -> Result<PathBuf> {
    let downloads = cache::downloads_dir()?;
    let archive_path = downloads.join(settings.runtime.archive_name(os));
    let url = settings.runtime.download_url(os);

    if verbose {
        println!("$ curl -s -L -o {} {}", archive_path.display(), url);
    }

    let spinner = StepSpinner::start("Downloading MATLAB Runtime...");
    match Downloader::new().fetch(&url, &archive_path) {
        Ok(Fetched::Downloaded) => spinner.finish("MATLAB Runtime downloaded"),
        Ok(Fetched::AlreadyPresent) => spinner.finish("MATLAB Runtime already downloaded"),
        Err(e) => {
            spinner.abandon();
            return Err(e);
        }
    }

    Ok(archive_path)
}

/// Run the platform's native silent installer
fn install_runtime(
    settings: &Settings,
    os: HostOs,
    prefix: &Path,
    archive_path: &Path,
) -> Result<()> {
    let spinner = StepSpinner::start("Installing MATLAB Runtime...");
    match runtime::install(
        os,
        &settings.runtime,
        prefix,
        &settings.toolkit.package,
        archive_path,
    ) {
        Ok(()) => {
            spinner.finish("MATLAB Runtime installed");
            Ok(())
        }
        Err(e) => {
            spinner.abandon();
            Err(e)
        }
    }
}

/// The macOS vendor installer writes under /Applications and runs under
/// sudo; ask before escalating.
fn confirm_privileged_install() -> Result<bool> {
    let confirmed = Confirm::new("The runtime installer will run under sudo. Proceed?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?;
    Ok(confirmed)
}
