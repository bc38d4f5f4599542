//! Instrumenting a whole project directory
//!
//! Drives the scanner over every file [`discovery`](crate::discovery) finds.
//! Each file is scanned into memory and written out only if the scan
//! succeeded. A failing file is reported and the run moves on.

use crate::config::Config;
use crate::discovery::{self, SourceSet};
use crate::error::InstrumentError;
use crate::scanner::{self, Instrumented};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Where instrumented sources go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Mirror the project layout under this root
    Dir(PathBuf),
    /// Concatenate everything on standard output
    Stdout,
}

/// Outcome of instrumenting a project
#[derive(Debug, Default)]
pub struct Report {
    pub files: usize,
    pub markers: usize,
    pub failures: Vec<InstrumentError>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Instrument every source and test file of `dir`.
///
/// Only discovery failures abort the run; per-file failures are collected in
/// the returned [`Report`].
pub fn instrument_project(
    dir: &Path,
    config: &Config,
    destination: &Destination,
) -> Result<Report, InstrumentError> {
    let SourceSet { sources, tests } = discovery::list_sources(dir, config)?;
    let mut report = Report::default();

    for path in sources.iter().chain(tests.iter()) {
        let label = label_for(dir, path);
        match instrument_file(path, &label, config).and_then(|instrumented| {
            emit(destination, &label, &instrumented.text)?;
            Ok(instrumented)
        }) {
            Ok(instrumented) => {
                info!(file = %label, markers = instrumented.markers.len(), "instrumented");
                report.files += 1;
                report.markers += instrumented.markers.len();
            }
            Err(e) => {
                error!(file = %label, error = %e, "instrumentation failed");
                report.failures.push(e);
            }
        }
    }

    Ok(report)
}

/// Read and scan one file. Nothing is written.
pub fn instrument_file(path: &Path, label: &str, config: &Config) -> Result<Instrumented, InstrumentError> {
    let file = fs::File::open(path).map_err(|source| InstrumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = Vec::new();
    let markers = scanner::scan_with(label, file, &mut text, &config.syntax).map_err(|source| {
        InstrumentError::Scan {
            file: path.to_path_buf(),
            source,
        }
    })?;

    // The scanner only ever writes decoded characters and `str` text.
    let text = String::from_utf8_lossy(&text).into_owned();
    Ok(Instrumented { text, markers })
}

/// Marker label for `path`: its location relative to the project directory,
/// with `/` separators.
pub fn label_for(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn emit(destination: &Destination, label: &str, text: &str) -> Result<(), InstrumentError> {
    match destination {
        Destination::Dir(root) => {
            let target = root.join(label);
            let write = |target: &Path| -> std::io::Result<()> {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(target, text)
            };
            write(&target).map_err(|source| InstrumentError::Write {
                path: target.clone(),
                source,
            })
        }
        Destination::Stdout => write_text(std::io::stdout().lock(), text).map_err(|source| {
            InstrumentError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }
        }),
    }
}

/// Write the instrumented text exactly as scanned; files are concatenated.
fn write_text<W: Write>(mut out: W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
