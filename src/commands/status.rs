//! Status command implementation
//!
//! Reports what is present on this machine: host platform, cached
//! downloads, and what has been installed into the Conda environment.
//! Status never fails on missing pieces; it reports them.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cache;
use crate::envhooks;
use crate::error::Result;
use crate::platform::{HostOs, RuntimeSpec};
use crate::settings::{RUNTIME_PACKAGE, Settings};
use crate::sitepkgs;

/// Run status command
pub fn run(prefix_flag: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let os = HostOs::detect().ok();
    let header = Style::new().bold();

    println!("{}", header.apply_to("Platform:"));
    match os {
        Some(os) => println!("  {} ({})", os, os.arch_tag()),
        None => println!("  unsupported ({})", std::env::consts::OS),
    }
    println!();

    print_cache_section(&settings, os)?;
    print_environment_section(&settings, os, prefix_flag);

    Ok(())
}

fn print_cache_section(settings: &Settings, os: Option<HostOs>) -> Result<()> {
    let header = Style::new().bold();
    let stats = cache::cache_stats()?;
    let cache_dir = cache::cache_dir()?;

    println!("{}", header.apply_to("Download cache:"));
    println!("  Location: {}", cache_dir.display());
    println!("  Archives: {}", stats.archives);
    println!("  Size: {}", stats.formatted_size());

    if let Some(os) = os {
        let archive = cache_dir
            .join("downloads")
            .join(settings.runtime.archive_name(os));
        println!(
            "  Runtime archive for this platform: {}",
            present(archive.exists())
        );
    }
    println!();

    Ok(())
}

fn print_environment_section(settings: &Settings, os: Option<HostOs>, prefix_flag: Option<PathBuf>) {
    let header = Style::new().bold();
    println!("{}", header.apply_to("Environment:"));

    let Ok(prefix) = envhooks::conda_prefix(prefix_flag) else {
        println!("  Prefix: not set (activate the environment or pass --prefix)");
        return;
    };
    println!("  Prefix: {}", prefix.display());

    let toolkit = sitepkgs::find_installed_package(&prefix, &settings.toolkit.package).is_ok();
    println!("  Toolkit ({}): {}", settings.toolkit.package, present(toolkit));

    if let Some(os) = os {
        println!(
            "  MATLAB Runtime: {}",
            present(runtime_installed(os, &settings.runtime, &prefix))
        );
    }

    let hooks = prefix
        .join("etc/conda/activate.d")
        .join(envhooks::HOOK_FILE)
        .exists();
    println!("  Activation hooks: {}", present(hooks));
}

fn runtime_installed(os: HostOs, spec: &RuntimeSpec, prefix: &Path) -> bool {
    match os {
        HostOs::Linux => sitepkgs::find_installed_package(prefix, RUNTIME_PACKAGE).is_ok(),
        HostOs::MacOs => spec.macos_versioned_destination().is_dir(),
    }
}

fn present(yes: bool) -> console::StyledObject<&'static str> {
    if yes {
        Style::new().green().apply_to("present")
    } else {
        Style::new().yellow().apply_to("missing")
    }
}
