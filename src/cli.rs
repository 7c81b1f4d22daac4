use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use yearsum::search::config::{
    DEFAULT_EPSILON, DEFAULT_MAX_FACTORIALS, DEFAULT_MAX_SQUARE_ROOTS, DEFAULT_OPERANDS,
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_TARGET,
};
use yearsum::{CandidateSearch, EvaluationOutcome, SearchConfig};

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

/// Candidate outcomes that can be printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShownOutcome {
    Correct,
    DivisionInvalid,
    FactorialArgTooLarge,
    FactorialNonInteger,
    FactorialResultTooLarge,
    SquareRootInvalid,
    Incorrect,
    All,
}

impl ShownOutcome {
    pub fn to_outcomes(self) -> &'static [EvaluationOutcome] {
        match self {
            ShownOutcome::Correct => &[EvaluationOutcome::Correct],
            ShownOutcome::DivisionInvalid => &[EvaluationOutcome::DivisionInvalid],
            ShownOutcome::FactorialArgTooLarge => &[EvaluationOutcome::FactorialArgTooLarge],
            ShownOutcome::FactorialNonInteger => &[EvaluationOutcome::FactorialNonInteger],
            ShownOutcome::FactorialResultTooLarge => {
                &[EvaluationOutcome::FactorialResultTooLarge]
            }
            ShownOutcome::SquareRootInvalid => &[EvaluationOutcome::SquareRootInvalid],
            ShownOutcome::Incorrect => &[EvaluationOutcome::Incorrect],
            ShownOutcome::All => &EvaluationOutcome::ALL,
        }
    }
}

/// Yearsum - Find arithmetic expressions over 1..N that equal a target
#[derive(Parser, Debug)]
#[command(name = "yearsum")]
#[command(
    about = "Exhaustively search expressions over the operands 1..N for ones that evaluate to a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value to match
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Number of operands, combined in order as 1, 2, ..., N
    #[arg(short = 'n', long, default_value_t = DEFAULT_OPERANDS)]
    pub operands: usize,

    /// Most factorials applied to one operand or intermediate result
    #[arg(long, default_value_t = DEFAULT_MAX_FACTORIALS)]
    pub max_factorials: u8,

    /// Most square roots applied to one operand or intermediate result
    #[arg(long, default_value_t = DEFAULT_MAX_SQUARE_ROOTS)]
    pub max_square_roots: u8,

    /// Tolerance for matching the target and for factorial arguments
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Stop at the first solution instead of trying every candidate
    #[arg(long)]
    pub first: bool,

    /// Candidate outcomes to print, comma separated
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "correct"
    )]
    pub show: Vec<ShownOutcome>,

    /// Candidates between progress lines when trying every candidate
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub search: SearchConfig,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a validated configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let search = SearchConfig {
        operands: args.operands,
        max_factorials: args.max_factorials,
        max_square_roots: args.max_square_roots,
        target: args.target,
        epsilon: args.epsilon,
        try_all: !args.first,
        verbosity: args
            .show
            .iter()
            .flat_map(|shown| shown.to_outcomes())
            .copied()
            .collect(),
        progress_interval: args.progress_interval,
    };
    search.validate().context("Invalid search configuration")?;

    Ok(CliConfig {
        search,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
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
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let search = CandidateSearch::new(config.search).context("Failed to set up the search")?;

    info!(
        "Searching expressions over 1..={} that equal {}",
        search.config().operands,
        search.config().target
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = search.run(&mut out).context("Search aborted")?;

    if report.solutions == 0 {
        warn!("No matching expression found");
    } else {
        info!(
            "Found {} solutions in {} candidates",
            report.solutions, report.evaluated
        );
    }

    writeln!(out, "Done").context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")?;
    Ok(())
}
