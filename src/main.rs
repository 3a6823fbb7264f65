//! Letter Oracle - CLI
//!
//! Guesses an oracle's secret password from a dictionary using match-count
//! feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_oracle::{
    commands::{
        BenchmarkConfig, run_assist, run_benchmark, run_remote, run_simulate, sample_secrets,
    },
    config::{DEFAULT_DICTIONARY, DEFAULT_ORACLE_ADDR, SessionConfig},
    core::Word,
    dictionary::load_from_file,
    output::{
        print_benchmark_result, print_round, print_session_header, print_session_report,
        print_warning,
    },
    session::RoundStep,
    solver::StrategyType,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letter_oracle",
    about = "Guess an oracle's password by narrowing a dictionary with letter-match scores",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited candidate passwords
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Strategy: frequency (default), first, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Give up after this many guesses (default: 15)
    #[arg(short = 'm', long, global = true)]
    max_guesses: Option<usize>,

    /// Score meaning an exact match (default: 20, or the secret's length when simulating)
    #[arg(short = 'f', long, global = true)]
    full_match: Option<usize>,

    /// Only print the outcome, not every round
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess against a running oracle server (default)
    Guess {
        /// Oracle address
        #[arg(short, long, default_value = DEFAULT_ORACLE_ADDR)]
        addr: String,
    },

    /// Play against a known secret without a server
    Simulate {
        /// The secret the simulated oracle holds
        secret: String,
    },

    /// Suggest guesses and read each score from the keyboard
    Assist,

    /// Simulate a session for every dictionary entry
    Benchmark {
        /// Test a random sample of this many secrets
        #[arg(short = 'n', long)]
        sample: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dictionary)?;
    let strategy = StrategyType::from_name(&cli.strategy);

    let command = cli.command.unwrap_or_else(|| Commands::Guess {
        addr: DEFAULT_ORACLE_ADDR.to_string(),
    });

    match command {
        Commands::Guess { addr } => {
            let config = SessionConfig::default().with_overrides(cli.max_guesses, cli.full_match);
            print_session_header(&addr, dictionary.len(), strategy.name());
            let report = run_remote(
                addr.as_str(),
                strategy,
                dictionary,
                config,
                round_printer(cli.quiet),
            );
            print_session_report(&report);
        }
        Commands::Simulate { secret } => {
            if !dictionary.iter().any(|w| w.text() == secret) {
                print_warning(&format!("\"{secret}\" is not in the dictionary"));
            }
            let config =
                SessionConfig::for_secret(&secret).with_overrides(cli.max_guesses, cli.full_match);
            print_session_header("a simulated oracle", dictionary.len(), strategy.name());
            let report = run_simulate(
                &secret,
                strategy,
                dictionary,
                config,
                round_printer(cli.quiet),
            );
            print_session_report(&report);
            if report.is_false_match(&secret) {
                print_warning(&format!(
                    "the full-match score came from a guess other than \"{secret}\"; \
                     its letters all occur in the secret"
                ));
            }
        }
        Commands::Assist => {
            let config = SessionConfig::default().with_overrides(cli.max_guesses, cli.full_match);
            print_session_header("you", dictionary.len(), strategy.name());
            println!(
                "Type the score for each suggestion; {} means an exact match.",
                config.full_match
            );
            let report = run_assist(strategy, dictionary, config, round_printer(cli.quiet));
            print_session_report(&report);
        }
        Commands::Benchmark { sample } => {
            let secrets = sample_secrets(&dictionary, sample);
            println!(
                "Benchmarking {} secrets against {} candidates ({})...",
                secrets.len(),
                dictionary.len(),
                strategy.name()
            );
            let config = BenchmarkConfig {
                max_guesses: cli.max_guesses,
                full_match: cli.full_match,
                show_progress: !cli.quiet,
            };
            let result = run_benchmark(&strategy, &dictionary, &secrets, config);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

fn load_dictionary(path: &Path) -> Result<Vec<Word>> {
    let dictionary = load_from_file(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;

    if dictionary.is_empty() {
        print_warning(&format!("{} contains no candidates", path.display()));
    }

    Ok(dictionary)
}

fn round_printer(quiet: bool) -> impl FnMut(&RoundStep) {
    move |step| {
        if !quiet {
            print_round(step);
        }
    }
}
