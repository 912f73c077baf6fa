//! Header patching: locate the version defines and rewrite the build number.
//!
//! The substitution core operates on in-memory strings so it can be tested
//! without touching disk; `patch_file` is the thin I/O boundary around it.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::Version;

// Major and minor are read-only; only the build define is rewritten.
const MAJOR_PATTERN: &str = r"#define PB_VERSION_MAJOR\s+(\d+)";
const MINOR_PATTERN: &str = r"#define PB_VERSION_MINOR\s+(\d+)";
const BUILD_PATTERN: &str = r"#define PB_VERSION_BUILD\s+\d+";

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("{}: header file not found", .0.display())]
    HeaderNotFound(PathBuf),
    #[error("version defines not found in the expected format")]
    FieldsMissing,
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Outcome of a successful in-memory patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    /// Full header text with the build define rewritten.
    pub content: String,
    /// Version triple assembled from the header fields and the new build.
    pub version: Version,
}

/// Rewrite the build define inside `content`, leaving every other byte
/// intact. Major and minor must both be present in the expected format;
/// when either is absent the operation fails and nothing is rewritten.
pub fn patch_content(content: &str, build: u64) -> Result<Patched, PatchError> {
    let major = capture_number(&Regex::new(MAJOR_PATTERN)?, content)
        .ok_or(PatchError::FieldsMissing)?;
    let minor = capture_number(&Regex::new(MINOR_PATTERN)?, content)
        .ok_or(PatchError::FieldsMissing)?;

    let replacement = format!("#define PB_VERSION_BUILD {build}");
    let content = Regex::new(BUILD_PATTERN)?
        .replace_all(content, replacement.as_str())
        .into_owned();

    Ok(Patched {
        content,
        version: Version {
            major,
            minor,
            build,
        },
    })
}

/// Extract the first captured group of `re` as a number.
fn capture_number(re: &Regex, content: &str) -> Option<u64> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Patch the header at `path` in place and report the resulting version.
/// The content is rewritten in memory first and written back in a single
/// truncating write; on any failure the file is left untouched.
pub fn patch_file(path: &Path, build: u64) -> Result<Version, PatchError> {
    if !path.exists() {
        return Err(PatchError::HeaderNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let patched = patch_content(&content, build)?;
    fs::write(path, &patched.content)?;
    Ok(patched.version)
}
