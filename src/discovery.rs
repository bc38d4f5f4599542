//! Source file discovery
//!
//! Lists the sources of a project directory and of its test subdirectory. In
//! both lists the init file (`init.<ext>`) comes first, so its definitions are
//! instrumented and loaded before anything that depends on them.

use crate::config::Config;
use crate::error::DiscoveryError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sources and tests of one project directory, each in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    pub sources: Vec<PathBuf>,
    pub tests: Vec<PathBuf>,
}

impl SourceSet {
    pub fn len(&self) -> usize {
        self.sources.len() + self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// List the sources of `dir` and of its test subdirectory.
///
/// A missing test subdirectory yields an empty test list.
pub fn list_sources(dir: &Path, config: &Config) -> Result<SourceSet, DiscoveryError> {
    let sources = list_dir(dir, config)?;

    let tests_dir = dir.join(&config.tests_dir);
    let tests = if dir_exists(&tests_dir)? {
        list_dir(&tests_dir, config)?
    } else {
        debug!(dir = %tests_dir.display(), "no test directory");
        Vec::new()
    };

    Ok(SourceSet { sources, tests })
}

/// Files matching `<dir>/*.<ext>` in lexical order, init file first.
pub fn list_dir(dir: &Path, config: &Config) -> Result<Vec<PathBuf>, DiscoveryError> {
    // Only the file-name part is a pattern; the directory is matched literally.
    let literal_dir = PathBuf::from(glob::Pattern::escape(&dir.to_string_lossy()));
    let pattern_path = literal_dir.join(format!("*.{}", config.extension));
    let pattern = pattern_path.to_string_lossy().into_owned();

    let entries = glob::glob(&pattern).map_err(|source| DiscoveryError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    init_first(&mut files, &config.init_file_name());
    debug!(dir = %dir.display(), count = files.len(), "listed sources");
    Ok(files)
}

/// Move the file named `init_name` to the front, keeping the others in order.
fn init_first(files: &mut [PathBuf], init_name: &str) {
    let init = files
        .iter()
        .position(|path| path.file_name().is_some_and(|name| name == init_name));
    if let Some(index) = init {
        files[..=index].rotate_right(1);
    }
}

fn dir_exists(dir: &Path) -> Result<bool, DiscoveryError> {
    match fs::metadata(dir) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(DiscoveryError::Stat {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
