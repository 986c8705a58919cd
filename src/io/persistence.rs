//! Plain-text pattern file format
//!
//! A `.ptn` file holds a dimension header line `"<height> <width>"`, one
//! newline, then the flat row-major contents string with no trailing
//! newline. Loading a saved pattern reconstructs it exactly, and any path
//! without the `.ptn` extension is rejected before touching the filesystem.

use std::fs;
use std::path::Path;

use crate::io::configuration::PATTERN_EXTENSION;
use crate::io::error::{PatternError, Result};
use crate::spatial::board::Board;
use crate::spatial::pattern::Pattern;

/// Save a pattern to a `.ptn` file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The path does not carry the `.ptn` extension
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn save_pattern(pattern: &Pattern, path: &Path) -> Result<()> {
    check_extension(path)?;

    let mut payload = format!("{} {}\n", pattern.height(), pattern.width());
    payload.push_str(&pattern.get_contents());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, payload).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "write pattern file",
        source: e,
    })
}

/// Load a pattern from a `.ptn` file
///
/// # Errors
///
/// Returns an error if:
/// - The path does not carry the `.ptn` extension
/// - The file cannot be read
/// - The dimension header is missing or does not parse as two integers
/// - The contents do not hold exactly `height * width` symbols
pub fn load_pattern(path: &Path) -> Result<Pattern> {
    check_extension(path)?;

    let raw = fs::read_to_string(path).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "read pattern file",
        source: e,
    })?;

    let (header, contents) = raw.split_once('\n').ok_or_else(|| {
        PatternError::MalformedHeader {
            path: path.to_path_buf(),
            reason: "missing newline after the dimension line".to_string(),
        }
    })?;

    let mut fields = header.split_whitespace();
    let height = parse_dimension(path, "height", fields.next())?;
    let width = parse_dimension(path, "width", fields.next())?;
    if let Some(extra) = fields.next() {
        return Err(PatternError::MalformedHeader {
            path: path.to_path_buf(),
            reason: format!("unexpected trailing field '{extra}'"),
        });
    }

    Pattern::from_contents(height, width, contents)
}

/// Load a `.ptn` file and wrap it as a 9x9 board
///
/// # Errors
///
/// Returns an error under the same conditions as [`load_pattern`], and
/// additionally when the stored pattern is not 9x9.
pub fn load_board(path: &Path) -> Result<Board> {
    Board::from_pattern(load_pattern(path)?)
}

fn check_extension(path: &Path) -> Result<()> {
    if path.extension().and_then(|s| s.to_str()) == Some(PATTERN_EXTENSION) {
        Ok(())
    } else {
        Err(PatternError::UnsupportedExtension {
            path: path.to_path_buf(),
        })
    }
}

fn parse_dimension(path: &Path, name: &'static str, field: Option<&str>) -> Result<usize> {
    let field = field.ok_or_else(|| PatternError::MalformedHeader {
        path: path.to_path_buf(),
        reason: format!("missing {name} field"),
    })?;
    field.parse().map_err(|error| PatternError::MalformedHeader {
        path: path.to_path_buf(),
        reason: format!("invalid {name} '{field}': {error}"),
    })
}
