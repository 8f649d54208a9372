//! Conda activation hook scripts
//!
//! Two `env_vars.sh` scripts are written into the environment's
//! `etc/conda/activate.d` and `etc/conda/deactivate.d` directories. The
//! activation script points the dynamic linker at the installed runtime,
//! saving the previous search path; the deactivation script restores it
//! and unsets everything else.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::platform::{HostOs, RuntimeSpec};
use crate::settings::RUNTIME_PACKAGE;
use crate::sitepkgs;

/// Hook script file name in both hook directories
pub const HOOK_FILE: &str = "env_vars.sh";

/// Resolve the Conda environment prefix: explicit flag first, then the
/// `CONDA_PREFIX` environment variable.
pub fn conda_prefix(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(prefix) = flag {
        return Ok(prefix);
    }
    std::env::var("CONDA_PREFIX")
        .map(PathBuf::from)
        .map_err(|_| SetupError::CondaPrefixMissing)
}

/// Activation script for Linux, pointing at the located runtime directory
pub fn linux_activation(spec: &RuntimeSpec, runtime_dir: &Path) -> String {
    let v = &spec.version_dir;
    format!(
        "export MATLAB_RUNTIME_DIR=\"{dir}\"\n\
         export _OLD_LD_LIBRARY_PATH=\"$LD_LIBRARY_PATH\"\n\
         export LD_LIBRARY_PATH=\"${{MATLAB_RUNTIME_DIR}}/{v}/runtime/glnxa64:\
         ${{MATLAB_RUNTIME_DIR}}/{v}/bin/glnxa64:\
         ${{MATLAB_RUNTIME_DIR}}/{v}/sys/os/glnxa64:\
         $LD_LIBRARY_PATH\"\n\
         export XAPPLRESDIR=\"${{MATLAB_RUNTIME_DIR}}/{v}/X11/app-defaults\"\n",
        dir = runtime_dir.display(),
    )
}

/// Deactivation script for Linux
pub fn linux_deactivation() -> String {
    "unset MATLAB_RUNTIME_DIR\n\
     export LD_LIBRARY_PATH=\"$_OLD_LD_LIBRARY_PATH\"\n\
     unset _OLD_LD_LIBRARY_PATH\n\
     unset XAPPLRESDIR\n"
        .to_string()
}

/// Activation script for macOS, pointing at the fixed vendor destination
pub fn macos_activation(spec: &RuntimeSpec) -> String {
    let base = spec.macos_versioned_destination();
    let base = base.display();
    format!(
        "export _OLD_DYLD_LIBRARY_PATH=\"$DYLD_LIBRARY_PATH\"\n\
         export DYLD_LIBRARY_PATH=\"{base}/runtime/maci64:\
         {base}/sys/os/maci64:\
         {base}/bin/maci64:\
         {base}/extern/bin/maci64:\
         $DYLD_LIBRARY_PATH\"\n",
    )
}

/// Deactivation script for macOS
pub fn macos_deactivation() -> String {
    "export DYLD_LIBRARY_PATH=\"$_OLD_DYLD_LIBRARY_PATH\"\n\
     unset _OLD_DYLD_LIBRARY_PATH\n"
        .to_string()
}

/// Write activation and deactivation hook scripts under the prefix.
///
/// Returns the two script paths (activate, deactivate).
pub fn write_hooks(
    prefix: &Path,
    activation: &str,
    deactivation: &str,
) -> Result<(PathBuf, PathBuf)> {
    let activate_dir = prefix.join("etc/conda/activate.d");
    let deactivate_dir = prefix.join("etc/conda/deactivate.d");

    let activate_path = activate_dir.join(HOOK_FILE);
    let deactivate_path = deactivate_dir.join(HOOK_FILE);

    write_hook(&activate_dir, &activate_path, activation)?;
    write_hook(&deactivate_dir, &deactivate_path, deactivation)?;

    Ok((activate_path, deactivate_path))
}

fn write_hook(dir: &Path, path: &Path, content: &str) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| SetupError::HookWriteFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;
    fs::write(path, content).map_err(|e| SetupError::HookWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Generate and write the hook scripts for the given host.
///
/// On Linux the runtime directory is located in the environment's
/// site-packages first; on macOS the vendor destination is fixed.
pub fn configure(prefix: &Path, os: HostOs, spec: &RuntimeSpec) -> Result<(PathBuf, PathBuf)> {
    match os {
        HostOs::Linux => {
            let runtime_dir = sitepkgs::find_installed_package(prefix, RUNTIME_PACKAGE)?;
            write_hooks(
                prefix,
                &linux_activation(spec, &runtime_dir),
                &linux_deactivation(),
            )
        }
        HostOs::MacOs => write_hooks(prefix, &macos_activation(spec), &macos_deactivation()),
    }
}
