use clap::Parser;
use std::path::PathBuf;

// Package version plus the self-stamped build number from build.rs.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (build ",
    env!("BUILD_NUMBER"),
    ")"
);

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pbstamp",
    version,
    long_version = LONG_VERSION,
    about = "Monotonic build-number stamper for C/C++ version headers"
)]
pub struct Args {
    /// Project root (default: the grandparent directory of the executable)
    #[arg(long = "root")]
    pub root: Option<PathBuf>,

    /// Header file to patch, relative to the project root
    #[arg(long = "header", default_value = "src/Pinball.h")]
    pub header: PathBuf,

    /// Build counter file, relative to the project root
    #[arg(long = "counter", default_value = "build_counter.txt")]
    pub counter: PathBuf,

    /// Print path resolution details to stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the success status line
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
