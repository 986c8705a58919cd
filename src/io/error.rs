//! Error types for pattern operations and adapter failures
//!
//! Every failure in this crate is a precondition violation or a wrapped
//! filesystem/image error. Operations are deterministic pure computations,
//! so there is no retryable internal failure mode: errors are raised at the
//! point of the violated precondition with the actual and expected values,
//! and nothing is clamped or coerced.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern and adapter operations
#[derive(Debug)]
pub enum PatternError {
    /// A pattern dimension was not a positive integer
    InvalidDimension {
        /// Name of the offending dimension
        dimension: &'static str,
        /// Provided value that failed validation
        value: usize,
    },

    /// A flat contents string did not match the grid size
    ContentsLength {
        /// Required symbol count (`height * width`)
        expected: usize,
        /// Symbol count actually provided
        actual: usize,
    },

    /// A read region's upper bound fell below its lower bound
    EmptyRegion {
        /// Axis the region runs along (`row` or `column`)
        axis: &'static str,
        /// Inclusive lower bound of the region
        min: usize,
        /// Inclusive upper bound of the region
        max: usize,
    },

    /// A read region reached past the pattern edge
    RegionOutOfBounds {
        /// Axis the region runs along (`row` or `column`)
        axis: &'static str,
        /// Inclusive upper bound of the region
        max: usize,
        /// Pattern extent along the axis (exclusive bound)
        limit: usize,
    },

    /// An overlaid pattern shifted by its offset reached past the receiver
    OverlayOutOfBounds {
        /// Dimension that overflowed (`height` or `width`)
        axis: &'static str,
        /// Extent of the overlaid pattern along the axis
        patch: usize,
        /// Extent of the receiving pattern along the axis
        base: usize,
        /// Offset the overlay was placed at
        offset: usize,
    },

    /// A containment search needle exceeds the searched pattern
    SubPatternTooLarge {
        /// Dimension that overflowed (`height` or `width`)
        axis: &'static str,
        /// Extent of the searched-for pattern along the axis
        sub: usize,
        /// Extent of the searched pattern along the axis
        base: usize,
    },

    /// A pattern with non-board dimensions was used as a board
    BoardDimensions {
        /// Height of the rejected pattern
        height: usize,
        /// Width of the rejected pattern
        width: usize,
    },

    /// A pattern file path did not carry the `.ptn` extension
    UnsupportedExtension {
        /// The rejected path
        path: PathBuf,
    },

    /// A pattern file's dimension header could not be parsed
    MalformedHeader {
        /// Path to the pattern file
        path: PathBuf,
        /// Description of what is wrong with the header
        reason: String,
    },

    /// A rendered cell's symbol has no image in the atlas
    MissingAsset {
        /// The symbol without an asset
        symbol: char,
    },

    /// Failed to load a tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dimension, value } => {
                write!(f, "pattern {dimension} must be positive (got {value})")
            }
            Self::ContentsLength { expected, actual } => {
                write!(
                    f,
                    "contents string holds {actual} symbols but the grid needs exactly {expected}"
                )
            }
            Self::EmptyRegion { axis, min, max } => {
                write!(
                    f,
                    "{axis} region is empty: upper bound {max} is below lower bound {min}"
                )
            }
            Self::RegionOutOfBounds { axis, max, limit } => {
                write!(
                    f,
                    "{axis} region upper bound {max} must be below the pattern extent {limit}"
                )
            }
            Self::OverlayOutOfBounds {
                axis,
                patch,
                base,
                offset,
            } => {
                write!(
                    f,
                    "cannot place a pattern of {axis} {patch} onto a pattern of {axis} {base} at offset {offset}"
                )
            }
            Self::SubPatternTooLarge { axis, sub, base } => {
                write!(
                    f,
                    "searched-for pattern {axis} {sub} exceeds the searched pattern {axis} {base}"
                )
            }
            Self::BoardDimensions { height, width } => {
                write!(f, "a board requires a 9x9 pattern (got {height}x{width})")
            }
            Self::UnsupportedExtension { path } => {
                write!(
                    f,
                    "pattern files use the .ptn extension: '{}'",
                    path.display()
                )
            }
            Self::MalformedHeader { path, reason } => {
                write!(
                    f,
                    "malformed dimension header in '{}': {reason}",
                    path.display()
                )
            }
            Self::MissingAsset { symbol } => {
                write!(f, "no tile asset registered for symbol '{symbol}'")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;
