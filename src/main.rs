// covermark: block-coverage instrumentation for C-family script sources

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use covermark::config::{Config, DEFAULT_EXTENSION, DEFAULT_TESTS_DIR};
use covermark::marker::{MarkerSyntax, DEFAULT_INCREMENT_CALL, DEFAULT_REGISTER_CALL};
use covermark::project::{self, Destination};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Insert block-coverage markers into a directory of script sources"
)]
struct Args {
    /// Project directory holding the sources
    dir: PathBuf,

    /// Output root; sources keep their relative paths under it
    #[arg(short, long, default_value = "instrumented")]
    out: PathBuf,

    /// Write instrumented sources to stdout instead of files
    #[arg(long)]
    stdout: bool,

    /// Source file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    ext: String,

    /// Test subdirectory name
    #[arg(long, default_value = DEFAULT_TESTS_DIR)]
    tests_dir: String,

    /// Call inserted at each block entry
    #[arg(long, default_value = DEFAULT_INCREMENT_CALL)]
    increment_call: String,

    /// Call appended once with every marker
    #[arg(long, default_value = DEFAULT_REGISTER_CALL)]
    register_call: String,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            extension: self.ext.trim_start_matches('.').to_string(),
            tests_dir: self.tests_dir.clone(),
            syntax: MarkerSyntax::new(&self.increment_call, &self.register_call),
        }
    }

    fn destination(&self) -> Destination {
        if self.stdout {
            Destination::Stdout
        } else {
            Destination::Dir(self.out.clone())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "covermark=info",
        1 => "covermark=debug",
        _ => "covermark=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if !args.dir.is_dir() {
        bail!("'{}' is not a directory", args.dir.display());
    }

    let config = args.config();
    let report = project::instrument_project(&args.dir, &config, &args.destination())
        .with_context(|| format!("cannot list sources in '{}'", args.dir.display()))?;

    tracing::info!(
        files = report.files,
        markers = report.markers,
        failed = report.failures.len(),
        "done"
    );

    if !report.is_success() {
        bail!("{} file(s) could not be instrumented", report.failures.len());
    }

    Ok(())
}
