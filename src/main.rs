//! Bitbreaker - CLI
//!
//! Solver for the binary code-breaking puzzle: deduce a hidden bit vector
//! from aggregate match-count feedback using entropy-maximizing guesses.

use anyhow::{Context, Result, bail};
use bitbreaker::{
    commands::{
        SolveConfig, analyze_guess, benchmark::random_answers, run_benchmark, run_simple,
        run_test_all, solve_answer,
    },
    core::BitVec,
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result,
        print_test_all_statistics,
    },
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bitbreaker",
    about = "Binary code-breaker solver using information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bit-vector length for the session
    #[arg(short, long, global = true, default_value = "6")]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default) - you think of a vector, the solver guesses it
    Simple,

    /// Solve a specific known answer
    Solve {
        /// The answer as a bit string, e.g. 101101
        answer: String,

        /// Show verbose output with candidate counts and entropy
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Guess to analyze, as a bit string
        guess: String,
    },

    /// Benchmark solver performance on random answers
    Benchmark {
        /// Number of random answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the solver on every possible answer
    TestAll,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.length == 0 {
        bail!("length must be at least 1");
    }
    if cli.length > 24 {
        bail!("length {} is impractical (space of 2^{} vectors)", cli.length, cli.length);
    }

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(cli.length),
        Commands::Solve { answer, verbose } => {
            let answer = parse_vector(&answer, cli.length)?;
            let result = solve_answer(&SolveConfig::new(answer));
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let guess = parse_vector(&guess, cli.length)?;
            let result = analyze_guess(&guess);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            if count == 0 {
                bail!("benchmark needs at least one answer");
            }
            let answers = random_answers(cli.length, count);
            let result = run_benchmark(&answers, true);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll => {
            let stats = run_test_all(cli.length, true);
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

/// Parse a bit string and check it against the session length
fn parse_vector(text: &str, length: usize) -> Result<BitVec> {
    let vector: BitVec = text
        .parse()
        .with_context(|| format!("invalid bit vector {text:?}"))?;

    if vector.len() != length {
        bail!(
            "expected a {length}-bit vector, got {} bits (use --length {})",
            vector.len(),
            vector.len()
        );
    }

    Ok(vector)
}
