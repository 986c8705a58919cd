//! Input/output adapters and error handling
//!
//! This module contains everything that touches the world outside the
//! pattern core:
//! - Error types shared across the crate
//! - Plain-text pattern file persistence
//! - Raster mosaic rendering and PNG export
//! - The command-line batch processor and its progress display

/// Command-line interface and batch file processing
pub mod cli;
/// Rendering constants and runtime configuration defaults
pub mod configuration;
/// Error types for pattern operations and adapter failures
pub mod error;
/// Raster mosaic rendering of patterns
pub mod image;
/// Plain-text pattern file persistence
pub mod persistence;
/// Batch progress display
pub mod progress;
