#![forbid(unsafe_code)]
mod cli;
mod counter;
mod header;
mod version;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("pbstamp: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    let root = resolve_root(args.root.clone()).context("failed to resolve project root")?;
    let header_path = root.join(&args.header);
    let counter_path = root.join(&args.counter);

    if args.verbose > 0 {
        eprintln!("pbstamp: project root {}", root.display());
        eprintln!("pbstamp: header      {}", header_path.display());
        eprintln!("pbstamp: counter     {}", counter_path.display());
    }

    // The header's existence gates everything, counter included.
    anyhow::ensure!(
        header_path.exists(),
        "{}: header file not found",
        header_path.display()
    );

    // The counter advances and persists before the defines are validated, so
    // a malformed header still consumes a build number. Numbers are unique
    // across attempts, not dense across successes.
    let build = counter::next_build(&counter_path).with_context(|| {
        format!(
            "{}: failed to update build counter",
            counter_path.display()
        )
    })?;

    let version = header::patch_file(&header_path, build)
        .with_context(|| format!("{}: failed to patch header", header_path.display()))?;

    if !args.quiet {
        println!("pbstamp: build number updated to {build} ({version})");
    }
    Ok(())
}

/// Resolve the project root: an explicit `--root` wins; otherwise the
/// grandparent of the running executable. The tool is expected to be
/// installed in a direct subdirectory of the project it stamps, so two
/// levels up from the binary is the project root.
fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        anyhow::ensure!(root.is_dir(), "{}: not a directory", root.display());
        return Ok(root);
    }
    let exe = std::env::current_exe().context("failed to locate own executable")?;
    grandparent(&exe)
        .map(Path::to_path_buf)
        .with_context(|| format!("{}: executable has no grandparent directory", exe.display()))
}

/// Two levels up from `path`: the parent of the directory containing it.
fn grandparent(path: &Path) -> Option<&Path> {
    path.parent().and_then(Path::parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grandparent_of_nested_path() {
        let path = PathBuf::from("/opt/pinball/tools/pbstamp");
        assert_eq!(grandparent(&path), Some(Path::new("/opt/pinball")));
    }

    #[test]
    fn grandparent_of_shallow_path_is_none() {
        assert_eq!(grandparent(Path::new("/pbstamp")), None);
    }

    #[test]
    fn explicit_root_must_be_a_directory() {
        let err = resolve_root(Some(PathBuf::from("/this/path/does/not/exist"))).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
