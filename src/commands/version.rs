//! Version command implementation

use crate::error::Result;
use crate::platform::{DEFAULT_RELEASE, DEFAULT_UPDATE};

/// Run version command
pub fn run() -> Result<()> {
    println!("spmsetup {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!(
        "  Default runtime: MATLAB Runtime {} Update {}",
        DEFAULT_RELEASE, DEFAULT_UPDATE
    );

    Ok(())
}

fn rustc_version() -> &'static str {
    // This will be the version of rustc used to compile
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
