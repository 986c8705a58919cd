//! Raster mosaic rendering of patterns with house-aware grid lines
//!
//! Each cell is painted from a per-symbol tile image, then interior row and
//! column boundaries are overlaid as dashed lines. Boundaries aligned to a
//! configured interval are drawn solid instead, which reproduces the 3x3
//! house structure when rendering boards; plain patterns leave the interval
//! unset and get uniform dashed lines.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage, imageops};

use crate::io::configuration::{
    DASH_LENGTH, DEFAULT_BACKGROUND, DEFAULT_CELL_SIZE, GRID_LINE_COLOR,
};
use crate::io::error::{PatternError, Result};
use crate::spatial::board::HOUSE_SIZE;
use crate::spatial::pattern::Pattern;

/// Visual parameters for pattern rendering
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Pixel size of one rendered cell
    pub cell_size: u32,
    /// Canvas background color (RGBA)
    pub background: [u8; 4],
    /// Grid line color (RGBA)
    pub grid_color: [u8; 4],
    /// Length in pixels of one dash segment on minor boundaries
    pub dash_length: u32,
    /// Every Nth interior boundary is drawn solid; `None` draws all dashed
    pub major_interval: Option<usize>,
}

impl RenderStyle {
    /// Style for generic patterns: every interior boundary dashed
    pub const fn plain() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            background: DEFAULT_BACKGROUND,
            grid_color: GRID_LINE_COLOR,
            dash_length: DASH_LENGTH,
            major_interval: None,
        }
    }

    /// Style for boards: solid lines on every third boundary
    pub const fn board() -> Self {
        Self {
            major_interval: Some(HOUSE_SIZE),
            ..Self::plain()
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::plain()
    }
}

/// Symbol-to-tile-image mapping at a fixed cell size
///
/// Tiles are stored at the atlas cell size; inserted images with other
/// dimensions are resized on the way in so rendering never rescales.
#[derive(Debug, Clone)]
pub struct SymbolAtlas {
    cell_size: u32,
    tiles: HashMap<char, RgbaImage>,
}

impl SymbolAtlas {
    /// Create an empty atlas for the given cell size
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size,
            tiles: HashMap::new(),
        }
    }

    /// Pixel size of the atlas tiles
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Register a tile image for a symbol, resizing it to the cell size
    pub fn insert(&mut self, symbol: char, tile: RgbaImage) {
        let tile = if tile.dimensions() == (self.cell_size, self.cell_size) {
            tile
        } else {
            imageops::resize(
                &tile,
                self.cell_size,
                self.cell_size,
                imageops::FilterType::Nearest,
            )
        };
        self.tiles.insert(symbol, tile);
    }

    /// Build an atlas of solid color swatches
    pub fn from_colors(swatches: &[(char, [u8; 4])], cell_size: u32) -> Self {
        let mut atlas = Self::new(cell_size);
        for &(symbol, color) in swatches {
            atlas.insert(symbol, RgbaImage::from_pixel(cell_size, cell_size, Rgba(color)));
        }
        atlas
    }

    /// Build an atlas from a directory of `<symbol>.png` files
    ///
    /// Only PNG files whose stem is a single character are loaded; other
    /// entries are ignored. Symbols that end up without an entry surface as
    /// [`PatternError::MissingAsset`] at render time.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a matching tile
    /// image fails to load.
    pub fn from_directory(dir: &Path, cell_size: u32) -> Result<Self> {
        let mut atlas = Self::new(cell_size);
        let entries = fs::read_dir(dir).map_err(|e| PatternError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read asset directory",
            source: e,
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| PatternError::FileSystem {
                    path: dir.to_path_buf(),
                    operation: "read asset directory",
                    source: e,
                })?
                .path();
            if path.extension().and_then(|s| s.to_str()) != Some("png") {
                continue;
            }
            let Some(symbol) = single_char_stem(&path) else {
                continue;
            };
            let tile = image::open(&path)
                .map_err(|e| PatternError::ImageLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgba8();
            atlas.insert(symbol, tile);
        }

        Ok(atlas)
    }

    /// Whether a symbol has a registered tile
    pub fn contains_symbol(&self, symbol: char) -> bool {
        self.tiles.contains_key(&symbol)
    }

    fn tile(&self, symbol: char) -> Option<&RgbaImage> {
        self.tiles.get(&symbol)
    }
}

/// Render a pattern as a mosaic of per-cell tile images with grid lines
///
/// # Errors
///
/// Returns an error if:
/// - The style's cell size is zero
/// - A cell's symbol has no tile in the atlas
pub fn render_pattern(
    pattern: &Pattern,
    atlas: &SymbolAtlas,
    style: &RenderStyle,
) -> Result<RgbaImage> {
    if style.cell_size == 0 {
        return Err(PatternError::InvalidDimension {
            dimension: "cell size",
            value: 0,
        });
    }

    let cell = style.cell_size;
    let mut canvas = RgbaImage::from_pixel(
        pattern.width() as u32 * cell,
        pattern.height() as u32 * cell,
        Rgba(style.background),
    );

    for row in 0..pattern.height() {
        for col in 0..pattern.width() {
            if let Some(symbol) = pattern.get(row, col) {
                let tile = atlas
                    .tile(symbol)
                    .ok_or(PatternError::MissingAsset { symbol })?;
                imageops::overlay(
                    &mut canvas,
                    tile,
                    i64::from(col as u32 * cell),
                    i64::from(row as u32 * cell),
                );
            }
        }
    }

    draw_grid_lines(&mut canvas, pattern.height(), pattern.width(), style);
    Ok(canvas)
}

/// Render a pattern and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (zero cell size or a symbol without an atlas tile)
/// - The parent directory cannot be created
/// - The image cannot be saved to the given path
pub fn export_pattern_as_png(
    pattern: &Pattern,
    atlas: &SymbolAtlas,
    style: &RenderStyle,
    output_path: &Path,
) -> Result<()> {
    let canvas = render_pattern(pattern, atlas, style)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

fn draw_grid_lines(canvas: &mut RgbaImage, rows: usize, cols: usize, style: &RenderStyle) {
    let color = Rgba(style.grid_color);
    let dash = style.dash_length.max(1);

    for boundary in 1..cols {
        let x = boundary as u32 * style.cell_size;
        let solid = is_major(boundary, style.major_interval);
        for y in 0..canvas.height() {
            if solid || (y / dash) % 2 == 0 {
                canvas.put_pixel(x, y, color);
            }
        }
    }

    for boundary in 1..rows {
        let y = boundary as u32 * style.cell_size;
        let solid = is_major(boundary, style.major_interval);
        for x in 0..canvas.width() {
            if solid || (x / dash) % 2 == 0 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

const fn is_major(boundary: usize, major_interval: Option<usize>) -> bool {
    match major_interval {
        Some(interval) => interval > 0 && boundary % interval == 0,
        None => false,
    }
}

fn single_char_stem(path: &Path) -> Option<char> {
    let stem = path.file_stem()?.to_str()?;
    let mut chars = stem.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}
