//! Word-puzzle toolkit CLI.
//!
//! One subcommand per puzzle: `wordament` scores words against a letter
//! grid, `wordle` filters candidates by feedback constraints, `bee`
//! solves letter-subset puzzles.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use puzzle_tools::{commands, logging};

#[derive(Parser)]
#[command(
    name = "puzzle_tools",
    about = "Word-puzzle toolkit: grid scoring, Wordle filtering, Spelling Bee search",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score candidate words against a 4x4 letter grid
    Wordament {
        /// Board specification, e.g. "pmrepea[en]rihbbslt" or "ta/ebcdefghijklmnop"
        board: String,

        /// Word list: `word` or `<count> <word>` per line
        #[arg(short, long)]
        words: PathBuf,

        /// Minimum frequency count for counted entries
        #[arg(short = 'm', long, default_value_t = 1000)]
        min_count: u64,

        /// Print the parsed grid and scores first
        #[arg(long)]
        show_board: bool,
    },

    /// Filter Wordle candidates using green/yellow/gray feedback
    Wordle {
        /// Positional pattern of confirmed letters, e.g. "g...n"
        #[arg(long)]
        green: String,

        /// Five per-position sets of misplaced letters ("." = no info)
        #[arg(long, num_args = 5)]
        yellow: Vec<String>,

        /// Letters known to be absent
        #[arg(long, default_value = "")]
        gray: String,

        /// Word list, one word per line
        #[arg(short, long)]
        words: PathBuf,

        /// Also suggest an informative next guess
        #[arg(long)]
        suggest: bool,
    },

    /// Solve a Spelling-Bee-style puzzle (first letter is mandatory)
    Bee {
        /// Puzzle letters, mandatory letter first
        letters: String,

        /// Word list: `word` or `<count> <word>` per line
        #[arg(short, long)]
        words: PathBuf,

        /// Hide non-pangrams at or below this count
        #[arg(short = 'm', long, default_value_t = 0)]
        min_count: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Wordament {
            board,
            words,
            min_count,
            show_board,
        } => commands::wordament::run(&board, &words, min_count, show_board),
        Commands::Wordle {
            green,
            yellow,
            gray,
            words,
            suggest,
        } => commands::wordle::run(&green, &yellow, &gray, &words, suggest),
        Commands::Bee {
            letters,
            words,
            min_count,
        } => commands::bee::run(&letters, &words, min_count),
    }
}
