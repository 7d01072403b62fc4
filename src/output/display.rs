//! Display functions for command results

use super::formatters::{bit_cells, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, TestAllStatistics};
use colored::Colorize;

/// Print the result of solving a known answer
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}   {}  ({} matched)",
            turn,
            step.guess,
            bit_cells(&step.guess),
            step.matches
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.possible_before, step.possible_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");

                if step.possible_after > 0 {
                    let actual_reduction =
                        (step.possible_before as f64 / step.possible_after as f64).log2();
                    println!("  Info gained: {actual_reduction:.3} bits");
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let length = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, length, 30);
    println!("\n  Entropy:      {} {:.3} bits", bar.green(), result.entropy);
    println!("  Expected remaining: {:.1} candidates", result.expected_remaining);
    println!("  Worst case:         {} candidates", result.max_partition);

    println!("\n  Feedback distribution over the full space:");
    let max_count = result.distribution.iter().copied().max().unwrap_or(1);
    for (feedback, &count) in result.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 24);
        println!("    {feedback:>2} matches  {bar} {count}");
    }
    println!();
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Answers solved:  {}", result.total_answers);
    println!(
        "  Average guesses: {}",
        format!("{:.3}", result.average_guesses).bright_yellow().bold()
    );
    println!("  Min / Max:       {} / {}", result.min_guesses, result.max_guesses);
    println!(
        "  Throughput:      {:.0} answers/sec ({:.2?} total)",
        result.answers_per_second, result.duration
    );

    print_distribution(result);
    println!();
}

/// Print exhaustive-run statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} length {} ({} answers) ",
        "EXHAUSTIVE RUN:".bright_cyan().bold(),
        stats.length,
        stats.result.total_answers
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Average guesses: {}",
        format!("{:.3}", stats.result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Min / Max:       {} / {}",
        stats.result.min_guesses, stats.result.max_guesses
    );

    print_distribution(&stats.result);
    println!();
}

fn print_distribution(result: &BenchmarkResult) {
    println!("\n  Guess distribution:");

    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guesses, count) in counts {
        let bar = create_progress_bar(count as f64, max_count as f64, 24);
        let share = 100.0 * count as f64 / result.total_answers as f64;
        println!("    {guesses:>2} guesses  {} {count} ({share:.1}%)", bar.green());
    }
}
