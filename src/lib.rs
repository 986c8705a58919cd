//! Symbolic grid patterns with wildcard-aware overlay, comparison and containment search
//!
//! A [`Pattern`] is a fixed-size rectangular grid of single-character
//! symbols where `-` marks an unconstrained cell. The crate provides
//! sub-region extraction, overlay writing, masked similarity scoring and a
//! brute-force sliding-window containment search, alongside a plain-text
//! storage format, a raster mosaic renderer and a terminal grid editor for
//! 9x9 boards.

#![forbid(unsafe_code)]

/// Interactive grid editor producing 9x9 boards
pub mod editor;
/// Input/output adapters and error handling
pub mod io;
/// Pattern and board data structures with geometric operations
pub mod spatial;

pub use io::error::{PatternError, Result};
pub use spatial::board::Board;
pub use spatial::pattern::{Pattern, WILDCARD};
