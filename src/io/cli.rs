//! Command-line interface and solve orchestration
//!
//! The binary is presentation only: it builds a puzzle from the
//! arguments, runs the chosen engine on a background thread while the
//! progress spinner polls the iteration counter, then renders the
//! outcome as text and optionally as a PNG.

use crate::algorithm::{ParallelSolver, SearchConfig, SequentialSolver, Solver};
use crate::io::configuration::PROGRESS_REFRESH_MS;
use crate::io::error::{Result, SolverError};
use crate::io::image::export_board_as_png;
use crate::io::progress::SolveProgress;
use crate::io::render::render_board;
use crate::spatial::puzzle::{PieceCounts, Puzzle};
use clap::Parser;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "tetrotile")]
#[command(
    author,
    version,
    about = "Decide whether tetromino pieces can exactly tile a board"
)]
/// Command-line arguments for the tiling solver
pub struct Cli {
    /// Board height in rows
    #[arg(value_name = "HEIGHT")]
    pub height: usize,

    /// Board width in columns
    #[arg(value_name = "WIDTH")]
    pub width: usize,

    /// Number of I pieces
    #[arg(short = 'I', long = "i-pieces", default_value_t = 0, value_name = "N")]
    pub i_pieces: usize,

    /// Number of O pieces
    #[arg(short = 'O', long = "o-pieces", default_value_t = 0, value_name = "N")]
    pub o_pieces: usize,

    /// Number of T pieces
    #[arg(short = 'T', long = "t-pieces", default_value_t = 0, value_name = "N")]
    pub t_pieces: usize,

    /// Number of J pieces
    #[arg(short = 'J', long = "j-pieces", default_value_t = 0, value_name = "N")]
    pub j_pieces: usize,

    /// Number of L pieces
    #[arg(short = 'L', long = "l-pieces", default_value_t = 0, value_name = "N")]
    pub l_pieces: usize,

    /// Number of S pieces
    #[arg(short = 'S', long = "s-pieces", default_value_t = 0, value_name = "N")]
    pub s_pieces: usize,

    /// Number of Z pieces
    #[arg(short = 'Z', long = "z-pieces", default_value_t = 0, value_name = "N")]
    pub z_pieces: usize,

    /// Race worker threads over a shared frontier instead of searching
    /// on one thread
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker thread count for --parallel (defaults to hardware parallelism)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Seed for the parallel solver's sequence shuffle
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the solved board as a PNG to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The requested piece multiset
    pub const fn counts(&self) -> PieceCounts {
        PieceCounts {
            i: self.i_pieces,
            o: self.o_pieces,
            t: self.t_pieces,
            j: self.j_pieces,
            l: self.l_pieces,
            s: self.s_pieces,
            z: self.z_pieces,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one solve according to CLI arguments
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the puzzle, run the solver, and report the outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle definition is invalid or the PNG
    /// export fails.
    pub fn run(&self) -> Result<()> {
        let puzzle = Puzzle::new(self.cli.height, self.cli.width, self.cli.counts())?;
        let solver: Box<dyn Solver> = if self.cli.parallel {
            Box::new(ParallelSolver::with_config(
                puzzle,
                SearchConfig {
                    threads: self.cli.threads,
                    shuffle_seed: self.cli.seed,
                },
            ))
        } else {
            Box::new(SequentialSolver::new(puzzle))
        };

        let progress = self.cli.should_show_progress().then(SolveProgress::new);
        let started = Instant::now();

        let solvable = thread::scope(|scope| {
            let handle = scope.spawn(|| solver.solve());
            while !handle.is_finished() {
                if let Some(spinner) = progress.as_ref() {
                    spinner.update(solver.iterations());
                }
                thread::sleep(Duration::from_millis(PROGRESS_REFRESH_MS));
            }
            match handle.join() {
                Ok(solvable) => solvable,
                Err(payload) => std::panic::resume_unwind(payload),
            }
        });

        if let Some(spinner) = progress.as_ref() {
            spinner.finish(solver.iterations(), started.elapsed());
        }
        self.report(solver.as_ref(), solvable)
    }

    // Allow print for the user-facing result output
    #[allow(clippy::print_stdout)]
    fn report(&self, solver: &dyn Solver, solvable: bool) -> Result<()> {
        if solvable {
            println!("Solvable:");
            let board = solver.board().ok_or(SolverError::NoBoardAvailable)?;
            print!("{}", render_board(&board, solver.pieces()));
            if let Some(path) = &self.cli.output {
                export_board_as_png(&board, solver.pieces().len(), path)?;
                println!("Wrote {}", path.display());
            }
        } else if solver.is_canceled() {
            println!("Canceled before a verdict was reached");
        } else {
            println!("Not solvable");
        }
        Ok(())
    }
}
