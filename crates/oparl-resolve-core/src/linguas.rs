//! Read the list of available translations from `po/LINGUAS`.
//!
//! Follows the gettext convention: whitespace-separated language codes, any
//! number per line, `#` starts a comment line.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Location of the LINGUAS file relative to a project root.
pub fn linguas_path(root: &Path) -> PathBuf {
    root.join("po").join("LINGUAS")
}

/// Parse LINGUAS contents into language codes, preserving file order.
pub fn parse_linguas(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(String::from)
        .collect()
}

/// Read `<root>/po/LINGUAS`.
pub fn read_linguas(root: &Path) -> Result<Vec<String>> {
    let path = linguas_path(root);
    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let langs = parse_linguas(&contents);
    tracing::debug!("{} languages listed in {}", langs.len(), path.display());
    Ok(langs)
}
