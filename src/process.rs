//! External process invocation
//!
//! Every installation step shells out to a vendor tool (archive assembler,
//! transfer tool, native installer, disk-image tools). Invocations block
//! until the child exits; a non-zero exit is fatal and carries the child's
//! captured stderr in the diagnostic.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, SetupError};

/// Run a program with arguments, failing on non-zero exit
pub fn run<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    run_command(cmd, program)
}

/// Run a program with arguments in the given working directory
pub fn run_in<I, S>(dir: &Path, program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(dir);
    run_command(cmd, program)
}

/// Run a program under sudo, failing on non-zero exit
///
/// stdin stays attached so sudo can prompt for a password.
pub fn run_as_root<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new("sudo");
    cmd.arg(program).args(args);
    run_command(cmd, program)
}

fn run_command(mut cmd: Command, program: &str) -> Result<()> {
    let output = cmd.output().map_err(|e| SetupError::CommandSpawnFailed {
        program: program.to_string(),
        reason: e.to_string(),
    })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(SetupError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
