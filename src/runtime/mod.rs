//! Platform-specific MATLAB Runtime installation
//!
//! The mechanism differs entirely per host: Linux unpacks the archive and
//! runs its `install` script directly; macOS unzips a disk image, mounts
//! it, and drives the bundled installer app under sudo. Both run the
//! vendor installer in silent mode and block until it exits.

pub mod linux;
pub mod macos;

use std::path::Path;

use crate::error::Result;
use crate::platform::{HostOs, RuntimeSpec};

/// Silent-mode arguments shared by both vendor installers
pub(crate) const SILENT_ARGS: [&str; 4] = ["-mode", "silent", "-agreeToLicense", "yes"];

/// Install the downloaded runtime archive for the given host
pub fn install(
    os: HostOs,
    spec: &RuntimeSpec,
    prefix: &Path,
    toolkit_package: &str,
    archive: &Path,
) -> Result<()> {
    match os {
        HostOs::Linux => linux::install(prefix, toolkit_package, archive),
        HostOs::MacOs => macos::install(spec, archive),
    }
}
