//! CLI entry point for the tetromino tiling solver

use clap::Parser;
use tetrotile::io::cli::{Cli, SolveRunner};

fn main() -> tetrotile::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
