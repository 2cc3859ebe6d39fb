//! Solving many drafts at once.
//!
//! Each solve is independent and allocates only its own state, so a batch
//! is a plain parallel map over the drafts on a rayon pool. Results come
//! back in input order and are identical to solving sequentially.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use crate::catalog::TokenType;
use crate::report::{format_tokens, SolutionReport};
use crate::search::solve;

/// Configuration for batch solving.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of worker threads. 0 or 1 solves on the calling thread.
    pub threads: usize,
    /// Suppress per-draft progress logging.
    pub quiet: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            threads: 4,
            quiet: false,
        }
    }
}

/// Solves every draft, returning one report per draft in input order.
pub fn solve_batch(
    drafts: &[Vec<TokenType>],
    config: &BatchConfig,
) -> Result<Vec<SolutionReport>, rayon::ThreadPoolBuildError> {
    let start = Instant::now();
    let completed = AtomicUsize::new(0);
    let total = drafts.len();

    let solve_one = |draft: &Vec<TokenType>| {
        let solve_start = Instant::now();
        let report = SolutionReport::new(draft, &solve(draft));
        if !config.quiet {
            let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::info!(
                "Draft {}/{}: {} [{}] ({:.1}ms)",
                n,
                total,
                if report.is_solved() { "solved" } else { "unsolvable" },
                format_tokens(draft),
                solve_start.elapsed().as_secs_f64() * 1000.0,
            );
        }
        report
    };

    let reports: Vec<SolutionReport> = if config.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        pool.install(|| drafts.par_iter().map(solve_one).collect::<Vec<_>>())
    } else {
        drafts.iter().map(solve_one).collect()
    };

    let solved = reports.iter().filter(|r| r.is_solved()).count();
    tracing::info!(
        solved,
        unsolvable = total - solved,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(reports)
}
