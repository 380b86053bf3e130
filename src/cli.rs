use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::puzzle::{self, PuzzleRequest};
use crate::solver::CountdownSolver;
use crate::wire::{ErrorResponse, SolveResponse, NO_SOLUTIONS_MESSAGE};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - exhaustively solve the numbers round
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every arithmetic expression that hits a Countdown numbers target")]
#[command(version)]
pub struct CliArgs {
    /// Target to reach (101-999); drawn at random when omitted
    #[arg(short, long)]
    pub target: Option<i64>,

    /// The six numbers, comma separated (e.g. 100,75,8,8,4,1)
    #[arg(short, long, value_delimiter = ',')]
    pub numbers: Option<Vec<i64>>,

    /// How many big numbers to draw (0-4, with --little)
    #[arg(short, long)]
    pub big: Option<u32>,

    /// How many little numbers to draw (with --big)
    #[arg(short, long)]
    pub little: Option<u32>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (default: warn)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let request = PuzzleRequest {
        target: args.target,
        numbers: args.numbers.clone(),
        big: args.big,
        little: args.little,
    };
    let mut rng = rand::thread_rng();
    let puzzle = match puzzle::resolve(&request, &mut rng) {
        Ok(puzzle) => puzzle,
        Err(violations) => {
            if args.json {
                println!("{}", serde_json::to_string(&ErrorResponse::new(&violations))?);
            } else {
                for violation in &violations {
                    eprintln!("{violation}");
                }
            }
            bail!("puzzle rejected");
        }
    };

    info!(
        "solving target {} with numbers {:?}",
        puzzle.target, puzzle.numbers
    );
    let solutions = CountdownSolver::new(&puzzle).solve();

    if args.json {
        println!(
            "{}",
            serde_json::to_string(&SolveResponse::new(&puzzle, solutions))?
        );
    } else {
        println!("target: {}", puzzle.target);
        println!("numbers: {}", puzzle.numbers.map(|n| n.to_string()).join(", "));
        if solutions.is_empty() {
            println!("{NO_SOLUTIONS_MESSAGE}");
        } else {
            for solution in &solutions {
                println!("{solution}");
            }
            println!("{} solutions", solutions.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_explicit_puzzle() {
        let args =
            CliArgs::try_parse_from(["countdown", "-t", "499", "-n", "100,75,8,8,4,1"]).unwrap();
        assert_eq!(args.target, Some(499));
        assert_eq!(args.numbers, Some(vec![100, 75, 8, 8, 4, 1]));
        assert!(!args.json);
    }

    #[test]
    fn parses_draw_counts() {
        let args = CliArgs::try_parse_from(["countdown", "-b", "3", "-l", "3", "--json"]).unwrap();
        assert_eq!(args.big, Some(3));
        assert_eq!(args.little, Some(3));
        assert!(args.json);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
    }
}
