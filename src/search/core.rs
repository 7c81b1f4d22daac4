use std::io::Write;

use log::{debug, info, trace};

use crate::candidate::Candidate;
use crate::expression::Expression;
use crate::search::config::SearchConfig;
use crate::search::errors::SearchError;

/// Summary of a finished search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Size of the whole search space
    pub total: u128,
    pub evaluated: u128,
    /// Candidate lines written to the output
    pub printed: u64,
    pub solutions: u64,
    pub first_solution: Option<Expression>,
    /// Whether every candidate was visited
    pub exhausted: bool,
}

/// Exhaustive search over every candidate of a configuration
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    config: SearchConfig,
    start: Candidate,
}

impl CandidateSearch {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let start = Candidate::new(
            config.operands,
            config.max_factorials,
            config.max_square_roots,
        )?;
        debug!(
            "Configured search: {} operands, {} factorials, {} square roots, target {} ± {}",
            config.operands,
            config.max_factorials,
            config.max_square_roots,
            config.target,
            config.epsilon
        );
        Ok(Self { config, start })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn total_candidates(&self) -> u128 {
        self.start.total_candidates()
    }

    /// Enumerate candidates from the all-zero state, writing the candidate
    /// count, every candidate whose outcome is selected by the verbosity
    /// mask and, when trying all candidates, periodic progress lines
    ///
    /// Stops at the first solution unless `try_all` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SearchReport, SearchError> {
        let SearchConfig {
            target,
            epsilon,
            try_all,
            verbosity,
            progress_interval,
            ..
        } = self.config;
        let progress_interval = u128::from(progress_interval);

        let mut candidate = self.start.clone();
        let total = candidate.total_candidates();
        writeln!(out, "{} candidates", total)?;
        info!("Searching {} candidates for {}", total, target);

        let mut report = SearchReport {
            total,
            evaluated: 0,
            printed: 0,
            solutions: 0,
            first_solution: None,
            exhausted: false,
        };
        let mut remaining = total;

        loop {
            let outcome = candidate.evaluate(target, epsilon);
            report.evaluated += 1;

            if outcome.is_correct() {
                report.solutions += 1;
                if report.first_solution.is_none() {
                    let expression = candidate.to_expression();
                    info!(
                        "First solution after {} candidates: {}",
                        report.evaluated, expression
                    );
                    report.first_solution = Some(expression);
                }
            }

            if verbosity.contains(outcome) {
                let rendered = candidate.render();
                trace!("{:?}: {}", outcome, rendered);
                writeln!(out, "{}: {}", outcome, rendered)?;
                report.printed += 1;
            }

            remaining = remaining.saturating_sub(1);
            if try_all && remaining % progress_interval == 0 {
                writeln!(out, "{} remaining candidates", remaining)?;
                out.flush()?;
            }

            if !try_all && outcome.is_correct() {
                break;
            }
            if !candidate.advance() {
                report.exhausted = true;
                break;
            }
        }

        out.flush()?;
        debug!(
            "Search finished: {} evaluated, {} solutions, exhausted: {}",
            report.evaluated, report.solutions, report.exhausted
        );
        Ok(report)
    }
}
