//! Common test utilities for spmsetup integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated environment for integration tests: a fake Conda prefix and
/// a private download cache, both under a temp directory.
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Fake Conda environment prefix
    pub prefix: PathBuf,
    /// Private download cache directory
    pub cache: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let prefix = temp.path().join("env");
        let cache = temp.path().join("cache");
        std::fs::create_dir_all(&prefix).expect("Failed to create prefix directory");
        std::fs::create_dir_all(&cache).expect("Failed to create cache directory");
        Self {
            temp,
            prefix,
            cache,
        }
    }

    /// Create a site-packages layout under the prefix and return its path
    pub fn create_site_packages(&self) -> PathBuf {
        let site = self.prefix.join("lib/python3.10/site-packages");
        std::fs::create_dir_all(&site).expect("Failed to create site-packages");
        site
    }

    /// Create an installed package directory in site-packages
    pub fn create_installed_package(&self, name: &str) -> PathBuf {
        let pkg = self.create_site_packages().join(name);
        std::fs::create_dir_all(&pkg).expect("Failed to create package directory");
        pkg
    }

    /// Place a file in the download cache's downloads directory
    pub fn place_download(&self, name: &str, content: &[u8]) -> PathBuf {
        let downloads = self.cache.join("downloads");
        std::fs::create_dir_all(&downloads).expect("Failed to create downloads directory");
        let path = downloads.join(name);
        std::fs::write(&path, content).expect("Failed to write download");
        path
    }

    /// Read a file under the prefix
    pub fn read_prefix_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.prefix.join(path)).expect("Failed to read file")
    }

    /// Check whether a file exists under the prefix
    pub fn prefix_file_exists(&self, path: &str) -> bool {
        self.prefix.join(path).exists()
    }
}

/// Build a command for the real spmsetup binary with the environment
/// isolated to this test's cache and prefix.
#[allow(dead_code)]
#[allow(deprecated)]
pub fn spmsetup_cmd(env: &TestEnv) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("spmsetup").unwrap();
    cmd.env("SPMSETUP_CACHE_DIR", &env.cache)
        .env("CONDA_PREFIX", &env.prefix);
    cmd
}
