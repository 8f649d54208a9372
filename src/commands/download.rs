//! Download command implementation
//!
//! Fetches the MATLAB Runtime archive for the host platform into the
//! download cache. The fetch is idempotent by presence-check: an archive
//! that is already cached is never transferred again.

use crate::cache;
use crate::download::{Downloader, Fetched};
use crate::error::Result;
use crate::platform::HostOs;
use crate::progress::StepSpinner;
use crate::settings::Settings;

/// Run download command
pub fn run(verbose: bool) -> Result<()> {
    let settings = Settings::load()?;
    let os = HostOs::detect()?;

    let downloads = cache::downloads_dir()?;
    let archive_path = downloads.join(settings.runtime.archive_name(os));
    let url = settings.runtime.download_url(os);

    if verbose {
        println!("$ curl -s -L -o {} {}", archive_path.display(), url);
    }

    let spinner = StepSpinner::start("Downloading MATLAB Runtime...");
    match Downloader::new().fetch(&url, &archive_path) {
        Ok(Fetched::Downloaded) => {
            spinner.finish("Download complete");
            println!("Saved to {}", archive_path.display());
        }
        Ok(Fetched::AlreadyPresent) => {
            spinner.finish("Already downloaded");
            println!("Cached at {}", archive_path.display());
        }
        Err(e) => {
            spinner.abandon();
            return Err(e);
        }
    }

    Ok(())
}
