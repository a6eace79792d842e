//! [`TestConfig`] fixture for config-file scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use registry_ini::{DEFAULT_SECTION, IniFile};
use tempfile::TempDir;

/// A temporary directory with a config file path inside it.
///
/// The config file is not created until [`write`](Self::write) is called.
///
/// # Example
///
/// ```rust
/// use registry_test_utils::TestConfig;
///
/// let config = TestConfig::with_content("[profile dev]\nregion = us-east-1\n");
/// assert_eq!(config.section_names(), vec!["profile dev"]);
/// ```
pub struct TestConfig {
    temp_dir: TempDir,
    path: PathBuf,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfig {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestConfig: failed to create temp dir");
        let path = temp_dir.path().join("config");
        Self { temp_dir, path }
    }

    pub fn with_content(content: &str) -> Self {
        let config = Self::new();
        config.write(content);
        config
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, content: &str) {
        fs::write(&self.path, content).expect("TestConfig: failed to write config");
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("TestConfig: failed to read config")
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a registry source document next to the config, returning its path.
    pub fn write_source(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(file_name);
        fs::write(&path, content).expect("TestConfig: failed to write source document");
        path
    }

    /// Parse the config file.
    pub fn parse(&self) -> IniFile {
        IniFile::parse(&self.read()).expect("TestConfig: config is not valid INI")
    }

    /// Section names in file order, without the default section.
    pub fn section_names(&self) -> Vec<String> {
        self.parse()
            .section_names()
            .into_iter()
            .filter(|name| *name != DEFAULT_SECTION)
            .map(str::to_string)
            .collect()
    }
}
