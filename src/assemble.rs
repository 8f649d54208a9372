//! SPM standalone toolkit assembly and installation
//!
//! The toolkit ships as a compiled archive split into numbered part files
//! next to a bundled installer script. Assembly joins the parts back into
//! the `.ctf` archive with the external assembly tool, removes the parts,
//! and runs the bundled installer. The build directory is deleted once the
//! install succeeds.

use std::fs;
use std::path::Path;

use crate::error::{Result, SetupError};
use crate::process;

/// External archive-assembly tool
const ASSEMBLY_TOOL: &str = "bysp";

/// Compiled toolkit archive produced by assembly
const ARCHIVE_MARKER: &str = "spm_standalone.ctf";

/// Subdirectory of the build directory holding the archive parts
const STANDALONE_DIR: &str = "spm_standalone";

/// Interpreter used for the bundled installer script
const INSTALLER_INTERPRETER: &str = "python";

/// Assemble the compiled toolkit archive if it is not already present.
///
/// Part files are only removed after the assembly tool exits successfully.
pub fn assemble_toolkit(spm_dir: &Path) -> Result<()> {
    let standalone = spm_dir.join(STANDALONE_DIR);
    if standalone.join(ARCHIVE_MARKER).exists() {
        return Ok(());
    }

    process::run_in(&standalone, ASSEMBLY_TOOL, ["c", ARCHIVE_MARKER])?;
    remove_part_files(&standalone)?;

    Ok(())
}

/// Delete the numbered `.part` files left over after assembly
fn remove_part_files(standalone: &Path) -> Result<()> {
    let part_prefix = format!("{}.", ARCHIVE_MARKER);
    for entry in fs::read_dir(standalone)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with(&part_prefix) && name.ends_with(".part") {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Run the toolkit's bundled installer script
pub fn install_toolkit(spm_dir: &Path) -> Result<()> {
    process::run_in(spm_dir, INSTALLER_INTERPRETER, ["setup.py", "install"])
}

/// Verify the build directory exists before any step runs
pub fn check_build_dir(spm_dir: &Path) -> Result<()> {
    if spm_dir.is_dir() {
        Ok(())
    } else {
        Err(SetupError::ToolkitDirMissing {
            path: spm_dir.display().to_string(),
        })
    }
}

/// Remove the build directory after a successful install
pub fn remove_build_dir(spm_dir: &Path) -> Result<()> {
    fs::remove_dir_all(spm_dir)?;
    Ok(())
}
