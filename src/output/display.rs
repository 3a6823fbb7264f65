//! Display functions for session and benchmark results

use super::formatters::{create_progress_bar, guesses_noun, pruned_percent};
use crate::commands::BenchmarkResult;
use crate::session::{RoundStep, SessionReport, SessionState};
use colored::Colorize;
use std::error::Error;

/// Print a banner naming the session about to start
pub fn print_session_header(target: &str, candidates: usize, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guessing against {} with {} candidates ({strategy})",
        target.bright_yellow().bold(),
        candidates.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print one completed round
pub fn print_round(step: &RoundStep) {
    println!(
        "\nGuess {} - sending prediction: {}",
        step.round.to_string().bright_black(),
        step.guess.bright_white().bold()
    );
    println!(
        "  Received answer from server: {} correct digits",
        step.score.to_string().bright_yellow()
    );
    if step.candidates_after == step.candidates_before {
        println!("  Possible passwords remaining: {}", step.candidates_after);
    } else {
        println!(
            "  Possible passwords remaining: {} → {} ({:.1}% pruned)",
            step.candidates_before,
            step.candidates_after.to_string().green(),
            pruned_percent(step.candidates_before, step.candidates_after)
        );
    }
}

/// Print how a session ended
pub fn print_session_report(report: &SessionReport) {
    println!();
    let guesses = report.guesses();

    match &report.outcome {
        SessionState::Solved => {
            let solution = report.solution.as_deref().unwrap_or_default();
            println!(
                "{}",
                format!(
                    "✅ Success: password found: {solution} ({guesses} {})",
                    guesses_noun(guesses)
                )
                .green()
                .bold()
            );
        }
        SessionState::Exhausted => {
            println!(
                "{}",
                "❌ No possible passwords remaining. Exiting.".red().bold()
            );
        }
        SessionState::BudgetExceeded => {
            println!(
                "{}",
                format!("❌ Failed to find the password within {guesses} guesses")
                    .red()
                    .bold()
            );
            if report.remaining.len() <= 10 {
                for candidate in &report.remaining {
                    println!("  • {candidate}");
                }
            } else {
                println!("  {} candidates were still possible", report.remaining.len());
            }
        }
        SessionState::Failed(error) => {
            println!("{} {error}", "⚠ Session aborted:".yellow().bold());
            let mut source = error.source();
            while let Some(cause) = source {
                println!("  caused by: {cause}");
                source = cause.source();
            }
            if guesses > 0 {
                println!("  after {guesses} {}", guesses_noun(guesses));
            }
        }
        SessionState::Running => {
            println!("Session stopped after {guesses} {}", guesses_noun(guesses));
        }
    }
}

/// Print a warning line
pub fn print_warning(message: &str) {
    println!("{} {message}", "⚠".yellow().bold());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total);
    println!("   Solved:           {}", result.solved.to_string().green());
    println!("   Exhausted:        {}", result.exhausted.to_string().red());
    println!(
        "   Budget exceeded:  {}",
        result.budget_exceeded.to_string().yellow()
    );
    if result.false_matches > 0 {
        println!(
            "   False matches:    {}",
            result.false_matches.to_string().yellow()
        );
    }
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }

    println!("\n📈 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Worst solved:     {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if !result.distribution.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = count as f64 / result.total as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n🐢 {}", "Hardest secrets:".bright_cyan().bold());
        for (secret, guesses) in &result.hardest {
            println!("   {secret} ({guesses} {})", guesses_noun(*guesses));
        }
    }
}
