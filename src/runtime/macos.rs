//! macOS runtime install: unzip the disk image, mount it, drive the
//! bundled installer app under sudo, and always detach the image again.

use std::path::Path;

use crate::error::{Result, SetupError};
use crate::platform::RuntimeSpec;
use crate::process;
use crate::temp;

use super::SILENT_ARGS;

/// Mountpoint used for the runtime disk image
pub const MOUNTPOINT: &str = "/Volumes/MATLAB_Runtime";

/// Installer binary inside the mounted app bundle
const INSTALLER_APP: &str = "InstallForMacOSX.app/Contents/MacOS/InstallForMacOSX";

/// Install the runtime from the downloaded `.dmg.zip` archive.
///
/// The disk image is detached whether the installer succeeds or fails; an
/// installer error wins over a detach error.
pub fn install(spec: &RuntimeSpec, archive_path: &Path) -> Result<()> {
    let staging = temp::staging_dir("dmg")?;

    let archive_arg = archive_path.display().to_string();
    let staging_arg = staging.path().display().to_string();
    process::run(
        "unzip",
        ["-q", archive_arg.as_str(), "-d", staging_arg.as_str()],
    )?;

    let dmg = staging.path().join(spec.dmg_name());
    let dmg_arg = dmg.display().to_string();
    process::run("hdiutil", ["attach", dmg_arg.as_str(), "-mountpoint", MOUNTPOINT])?;

    let result = run_mounted_installer(spec);
    let detach = process::run("hdiutil", ["detach", MOUNTPOINT]);

    result.and(detach)
}

/// Verify the mount and run the vendor installer from it
fn run_mounted_installer(spec: &RuntimeSpec) -> Result<()> {
    let mountpoint = Path::new(MOUNTPOINT);
    if !mountpoint.exists() {
        return Err(SetupError::MountFailed {
            mountpoint: MOUNTPOINT.to_string(),
        });
    }

    let installer = mountpoint.join(INSTALLER_APP);
    if !installer.exists() {
        return Err(SetupError::InstallerAppMissing {
            path: installer.display().to_string(),
        });
    }

    let installer_arg = installer.display().to_string();
    let destination_arg = spec.macos_versioned_destination().display().to_string();
    let mut args: Vec<&str> = SILENT_ARGS.to_vec();
    args.extend(["-destinationFolder", destination_arg.as_str()]);

    // The vendor installer needs root to write under /Applications.
    process::run_as_root(&installer_arg, args)
}
