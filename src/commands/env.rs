//! Env command implementation
//!
//! (Re)writes the Conda activation and deactivation hook scripts without
//! touching the toolkit or the runtime. Useful after cloning an
//! environment or when the hooks were removed by hand.

use std::path::PathBuf;

use crate::envhooks;
use crate::error::Result;
use crate::platform::HostOs;
use crate::settings::Settings;

/// Run env command
pub fn run(prefix_flag: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let os = HostOs::detect()?;
    let prefix = envhooks::conda_prefix(prefix_flag)?;

    let (activate, deactivate) = envhooks::configure(&prefix, os, &settings.runtime)?;

    println!("Wrote {}", activate.display());
    println!("Wrote {}", deactivate.display());
    println!("Re-activate the environment to pick up the new variables.");

    Ok(())
}
