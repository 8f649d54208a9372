//! Linux runtime install: unpack next to the toolkit, run the archive's
//! `install` script, clean up the extraction directory.

use std::fs;
use std::path::Path;

use crate::archive;
use crate::error::{Result, SetupError};
use crate::process;
use crate::settings::RUNTIME_PACKAGE;
use crate::sitepkgs;

use super::SILENT_ARGS;

/// Extraction directory created inside the installed toolkit package
const EXTRACT_DIR: &str = "matlab_runtime";

/// Install the runtime archive into the environment's site-packages.
///
/// The runtime lands in `<site-packages>/MATLAB_Runtime`, a sibling of the
/// installed toolkit package. The extraction directory is removed after a
/// successful install.
pub fn install(prefix: &Path, toolkit_package: &str, archive_path: &Path) -> Result<()> {
    let package_dir = sitepkgs::find_installed_package(prefix, toolkit_package)?;
    let extract_dir = package_dir.join(EXTRACT_DIR);

    archive::extract_zip(archive_path, &extract_dir)?;

    let install_script = extract_dir.join("install");
    if !install_script.exists() {
        return Err(SetupError::InstallScriptMissing {
            path: extract_dir.display().to_string(),
        });
    }

    let site_dir = package_dir
        .parent()
        .ok_or_else(|| SetupError::IoError {
            message: format!("{} has no parent directory", package_dir.display()),
        })?;
    let destination = site_dir.join(RUNTIME_PACKAGE);

    let script_arg = install_script.display().to_string();
    let destination_arg = destination.display().to_string();
    let mut args: Vec<&str> = SILENT_ARGS.to_vec();
    args.extend(["-destinationFolder", destination_arg.as_str()]);
    process::run(&script_arg, args)?;

    fs::remove_dir_all(&extract_dir)?;

    Ok(())
}
