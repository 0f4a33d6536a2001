//! Locating and reading content documents.
//!
//! Paths given on the command line may be files or directories. Files are always taken; directories
//! are walked recursively and filtered by extension.

use crate::error::{Error, Result};
use crate::parser::parse_sections;
use crate::section::Section;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands paths into a sorted, de-duplicated list of content files.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for a path that does not exist, or an I/O error if a directory
/// cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_file() {
            documents.push(path);
        } else if path.is_dir() {
            walk_dir(&path, extensions, &mut documents)?;
        } else {
            return Err(Error::not_found(path.display().to_string()));
        }
    }

    documents.sort();
    documents.dedup();
    debug!(count = documents.len(), "discovered content documents");
    Ok(documents)
}

fn walk_dir(dir: &Path, extensions: &[String], documents: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, extensions, documents)?;
        } else if has_extension(&path, extensions) {
            documents.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Reads a document and parses it into sections.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_sections(path: &Path) -> Result<Vec<Section>> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded content document");
    Ok(parse_sections(&text))
}

/// Reads content from a file, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(Error::not_found(path.display().to_string()));
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
