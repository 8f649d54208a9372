//! Clean command implementation
//!
//! Removes downloaded runtime archives from the cache. The next install
//! will download them again.

use inquire::Confirm;

use crate::cache;
use crate::cli::CleanArgs;
use crate::error::Result;

/// Run clean command
pub fn run(args: CleanArgs) -> Result<()> {
    let stats = cache::cache_stats()?;

    if stats.archives == 0 {
        println!("Download cache is empty.");
        return Ok(());
    }

    println!(
        "{} cached archive(s), {} total.",
        stats.archives,
        stats.formatted_size()
    );

    if !args.yes {
        let confirmed = Confirm::new("Remove all cached downloads?")
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt()?;
        if !confirmed {
            println!("Clean cancelled. No changes were made.");
            return Ok(());
        }
    }

    cache::clear_downloads()?;
    println!("Download cache cleared.");

    Ok(())
}
