//! Rendering constants and runtime configuration defaults

// File format settings
/// File extension for stored pattern files
pub const PATTERN_EXTENSION: &str = "ptn";
/// Suffix added to rendered output filenames
pub const OUTPUT_SUFFIX: &str = "_render";

// Rendering settings
/// Default pixel size of a rendered cell
pub const DEFAULT_CELL_SIZE: u32 = 32;
/// Length in pixels of one dash segment on minor grid lines
pub const DASH_LENGTH: u32 = 4;
/// Default canvas background color (RGBA)
pub const DEFAULT_BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// Default grid line color (RGBA)
pub const GRID_LINE_COLOR: [u8; 4] = [40, 40, 40, 255];

/// Default color swatches for the built-in symbol alphabet
///
/// The wildcard renders as a near-background grey; the remaining symbols are
/// the editor's palette. The alphabet itself is opaque — these colors carry
/// no meaning beyond telling the symbols apart.
pub const DEFAULT_SYMBOL_COLORS: [(char, [u8; 4]); 6] = [
    ('-', [235, 235, 235, 255]),
    ('f', [76, 175, 80, 255]),
    ('w', [33, 150, 243, 255]),
    ('e', [255, 193, 7, 255]),
    ('a', [156, 39, 176, 255]),
    ('s', [244, 67, 54, 255]),
];

// Progress bar display settings
/// Minimum file count before a batch progress bar is shown
pub const PROGRESS_BAR_THRESHOLD: usize = 2;
