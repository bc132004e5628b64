//! CLI entry point for the dot-grid collage renderer

use clap::Parser;
use risoscatter::io::cli::{Cli, SketchRunner};

fn main() -> risoscatter::Result<()> {
    let cli = Cli::parse();
    let mut runner = SketchRunner::new(cli);
    runner.run()
}
