// Project-level settings for instrumenting a directory of sources

use crate::marker::MarkerSyntax;

/// Extension of instrumentable sources
pub const DEFAULT_EXTENSION: &str = "js";

/// Name of the test subdirectory next to the sources
pub const DEFAULT_TESTS_DIR: &str = "tests";

/// Base name of the file that must be processed first in each directory
pub const INIT_STEM: &str = "init";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source extension, without the leading dot
    pub extension: String,
    /// Test subdirectory name, relative to the project directory
    pub tests_dir: String,
    pub syntax: MarkerSyntax,
}

impl Config {
    /// File name of the init file for this extension, e.g. `init.js`.
    pub fn init_file_name(&self) -> String {
        format!("{}.{}", INIT_STEM, self.extension)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            tests_dir: DEFAULT_TESTS_DIR.to_string(),
            syntax: MarkerSyntax::default(),
        }
    }
}
