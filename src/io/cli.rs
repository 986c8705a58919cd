//! Command-line interface for rendering, searching and editing pattern files

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::editor::terminal::edit_board_interactive;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_SYMBOL_COLORS, OUTPUT_SUFFIX, PATTERN_EXTENSION,
};
use crate::io::error::{PatternError, Result};
use crate::io::image::{RenderStyle, SymbolAtlas, export_pattern_as_png};
use crate::io::persistence::{load_pattern, save_pattern};
use crate::io::progress::ProgressManager;
use crate::spatial::pattern::Pattern;

#[derive(Parser)]
#[command(name = "sigilgrid")]
#[command(
    author,
    version,
    about = "Render and search symbolic grid pattern files"
)]
/// Command-line arguments for the pattern tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input .ptn file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pixel size of each rendered cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Directory of per-symbol tile images named <symbol>.png
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Draw every interior boundary dashed instead of solid house lines
    #[arg(short, long)]
    pub plain: bool,

    /// Search each target pattern for this sub-pattern instead of rendering
    #[arg(short, long)]
    pub find: Option<PathBuf>,

    /// Open the interactive editor and save its board to TARGET first
    #[arg(short, long)]
    pub edit: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of pattern files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, editing, loading, rendering
    /// or searching fails.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.edit {
            self.run_editor()?;
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            log::warn!("nothing to process under '{}'", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        if let Some(needle_path) = self.cli.find.clone() {
            let needle = load_pattern(&needle_path)?;
            self.process_all(&files, |file| Self::search_file(file, &needle))
        } else {
            let atlas = self.build_atlas()?;
            let style = self.build_style();
            self.process_all(&files, |file| self.render_file(file, &atlas, &style))
        }
    }

    fn process_all<F>(&self, files: &[PathBuf], action: F) -> Result<()>
    where
        F: Fn(&Path) -> Result<()>,
    {
        for file in files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }
            action(file)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(())
    }

    fn run_editor(&self) -> Result<()> {
        match edit_board_interactive()? {
            Some(board) => {
                save_pattern(board.pattern(), &self.cli.target)?;
                log::info!("saved edited board to '{}'", self.cli.target.display());
            }
            None => {
                log::warn!(
                    "editor aborted; '{}' left unchanged",
                    self.cli.target.display()
                );
            }
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(PATTERN_EXTENSION) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(PatternError::UnsupportedExtension {
                    path: self.cli.target.clone(),
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PATTERN_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(PatternError::FileSystem {
                path: self.cli.target.clone(),
                operation: "locate target",
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn render_file(&self, input_path: &Path, atlas: &SymbolAtlas, style: &RenderStyle) -> Result<()> {
        let output_path = output_path_for(input_path);
        if self.cli.skip_existing() && output_path.exists() {
            log::info!("skipping '{}': output exists", input_path.display());
            return Ok(());
        }

        let pattern = load_pattern(input_path)?;
        export_pattern_as_png(&pattern, atlas, style, &output_path)?;
        log::info!(
            "rendered '{}' -> '{}'",
            input_path.display(),
            output_path.display()
        );
        Ok(())
    }

    // Allow print for the search report itself
    #[allow(clippy::print_stdout)]
    fn search_file(input_path: &Path, needle: &Pattern) -> Result<()> {
        let haystack = load_pattern(input_path)?;
        let found = haystack.contains(needle)?;
        let verdict = if found { "contains the pattern" } else { "no match" };
        println!("{}: {verdict}", input_path.display());
        Ok(())
    }

    fn build_atlas(&self) -> Result<SymbolAtlas> {
        self.cli.assets.as_ref().map_or_else(
            || {
                Ok(SymbolAtlas::from_colors(
                    &DEFAULT_SYMBOL_COLORS,
                    self.cli.cell_size,
                ))
            },
            |dir| SymbolAtlas::from_directory(dir, self.cli.cell_size),
        )
    }

    fn build_style(&self) -> RenderStyle {
        let mut style = if self.cli.plain {
            RenderStyle::plain()
        } else {
            RenderStyle::board()
        };
        style.cell_size = self.cli.cell_size;
        style
    }
}

fn output_path_for(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}
