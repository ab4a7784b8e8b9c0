use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use arspell::{AddOutcome, CheckReport, CheckerConfig, SpellChecker, SpellError, Stats};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Spell checker for word lists, with suggestions for unknown words.
#[derive(Debug, Parser)]
#[command(name = "arspell", version)]
struct Cli {
    /// JSON file with any of the settings below.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Reference word list, one word per line.
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,
    /// Writable word list that `add` appends to.
    #[arg(long, global = true)]
    user_dictionary: Option<PathBuf>,
    /// Log of every checked input.
    #[arg(long, global = true)]
    history: Option<PathBuf>,
    /// Minimum similarity (0..=1) for a suggestion.
    #[arg(long, global = true)]
    cutoff: Option<f64>,
    /// Suggestions per misspelled word.
    #[arg(long, global = true)]
    limit: Option<usize>,
    /// Most words accepted in one check.
    #[arg(long, global = true)]
    max_tokens: Option<usize>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the given text once and exit.
    Check {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Add a word to the user dictionary.
    Add { word: String },
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("ARSPELL_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

fn load_config(cli: &Cli) -> Result<CheckerConfig, SpellError> {
    let mut config = match &cli.config {
        Some(path) => CheckerConfig::from_file(path)?,
        None => CheckerConfig::default(),
    };
    if let Some(path) = &cli.dictionary {
        config.dictionary = path.clone();
    }
    if let Some(path) = &cli.user_dictionary {
        config.user_dictionary = path.clone();
    }
    if let Some(path) = &cli.history {
        config.history = path.clone();
    }
    if let Some(cutoff) = cli.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.max_tokens = max_tokens;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let checker = match load_config(&cli).and_then(|config| SpellChecker::from_config(&config)) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Command::Check { json, text }) => run_check(&checker, &text.join(" "), json),
        Some(Command::Add { word }) => run_add(&checker, &word),
        None => run_menu(&checker).map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a CheckReport,
    stats: Stats,
}

fn run_check(checker: &SpellChecker, text: &str, json: bool) -> Result<(), String> {
    let mut stats = Stats::new();
    let report = checker
        .check(text, &mut stats)
        .map_err(|e| e.to_string())?;
    if json {
        let output = JsonOutput {
            report: &report,
            stats,
        };
        let rendered = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{rendered}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_add(checker: &SpellChecker, word: &str) -> Result<(), String> {
    let outcome = checker.add_word(word).map_err(|e| e.to_string())?;
    print_add_outcome(word, outcome);
    Ok(())
}

fn print_add_outcome(word: &str, outcome: AddOutcome) {
    match outcome {
        AddOutcome::Added => println!("Word '{}' added to user dictionary", word.trim()),
        AddOutcome::AlreadyKnown => println!("Word '{}' is already in the dictionary", word.trim()),
    }
}

fn print_report(report: &CheckReport) {
    if let Some(e) = &report.history_failure {
        println!("Warning: {e}");
    }
    if report.all_correct() {
        println!("\n✓ All words are correct");
        return;
    }

    let words: Vec<&str> = report.incorrect.iter().map(|m| m.word.as_str()).collect();
    println!("\n✗ Incorrect words: {}", words.join(", "));

    let lines: Vec<String> = report
        .incorrect
        .iter()
        .filter(|m| !m.suggestions.is_empty())
        .map(|m| {
            let suggestions: Vec<&str> = m.suggestions.iter().map(|s| s.word.as_str()).collect();
            format!("{}: {}", m.word, suggestions.join(" or "))
        })
        .collect();
    if lines.is_empty() {
        println!("\nNo suggestions available");
    } else {
        println!("\n✎ Suggestions:");
        println!("{}", lines.join("\n"));
    }
}

fn print_stats(stats: &Stats) {
    println!("\nStatistics:");
    println!("{stats}");
    println!("{}", "-".repeat(40));
}

fn print_menu() {
    let rule = "=".repeat(30);
    println!("\n{rule}");
    println!("Spell Checker");
    println!("{rule}");
    println!("1. Check word");
    println!("2. Add word to dictionary");
    println!("3. Show statistics");
    println!("4. Exit");
    println!("{rule}");
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn run_menu(checker: &SpellChecker) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stats = Stats::new();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Choose an option (1-4): ")? else {
            break; // EOF
        };
        match choice.trim() {
            "1" => {
                let Some(text) = prompt(&mut lines, "Enter word: ")? else {
                    break;
                };
                match checker.check(&text, &mut stats) {
                    Ok(report) => {
                        print_report(&report);
                        print_stats(&stats);
                    }
                    Err(e) => println!("{e}"),
                }
            }
            "2" => {
                let Some(word) = prompt(&mut lines, "Enter new word to add to dictionary: ")?
                else {
                    break;
                };
                match checker.add_word(&word) {
                    Ok(outcome) => print_add_outcome(&word, outcome),
                    Err(e) => println!("Failed to add word: {e}"),
                }
            }
            "3" => print_stats(&stats),
            "4" => {
                println!("Thank you for using the spell checker. Goodbye!");
                break;
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }
    Ok(())
}
