//! CLI entry point for the pattern rendering and search tool

use clap::Parser;
use sigilgrid::io::cli::{Cli, FileProcessor};

fn main() -> sigilgrid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.should_show_progress());
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

// Registration fails only when a logger is already installed
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {message}", record.level()));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
}
