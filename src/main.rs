//! Par Odin! solver command line.
//!
//! Usage:
//!   par-odin [OPTIONS] [TOKEN ...]
//!
//! Positional token names form one draft. Results go to stdout; logs go to
//! stderr and are filtered by `RUST_LOG`.

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use par_odin::batch::{solve_batch, BatchConfig};
use par_odin::catalog::{TokenType, ALL_TOKENS};
use par_odin::challenges::{challenge, CHALLENGES, CHALLENGE_COUNT};
use par_odin::draft::{load_drafts, parse_draft, random_draft, random_draft_len};
use par_odin::report::{format_solution, format_tokens, write_jsonl, SolutionReport};

/// Exit status when at least one draft has no balanced split.
const EXIT_UNSOLVABLE: i32 = 2;

/// Options gathered from the command line.
struct CliConfig {
    drafts: Vec<Vec<TokenType>>,
    random_lens: Vec<Option<usize>>,
    seed: u64,
    batch: BatchConfig,
    json: bool,
    values: bool,
    verbose: bool,
    rules: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            drafts: Vec::new(),
            random_lens: Vec::new(),
            seed: 0,
            batch: BatchConfig::default(),
            json: false,
            values: true,
            verbose: false,
            rules: false,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            process::exit(1);
        }
    };

    init_logging(config.verbose);

    if config.rules {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        if let Err(e) = write_rules(&mut out) {
            eprintln!("failed to write output: {}", e);
            process::exit(1);
        }
        return;
    }

    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };
    for len in &config.random_lens {
        let len = len.unwrap_or_else(|| random_draft_len(&mut rng));
        config.drafts.push(random_draft(&mut rng, len));
    }

    if config.drafts.is_empty() {
        eprintln!("No draft given");
        print_usage();
        process::exit(1);
    }

    let reports = match solve_batch(&config.drafts, &config.batch) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("failed to build thread pool: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if config.json {
        write_jsonl(&reports, &mut out)
    } else {
        write_text(&reports, config.values, &mut out)
    };
    if let Err(e) = written {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }

    if reports.iter().any(|r| !r.is_solved()) {
        process::exit(EXIT_UNSOLVABLE);
    }
}

/// Parses arguments. Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliConfig>, String> {
    let mut config = CliConfig::default();
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--draft" => {
                let value = flag_value(args, &mut i, "--draft")?;
                config.drafts.push(parse_draft(value).map_err(|e| e.to_string())?);
            }
            "--challenge" => {
                let n: usize = flag_value(args, &mut i, "--challenge")?
                    .parse()
                    .map_err(|_| "invalid --challenge value".to_string())?;
                let draft = challenge(n).ok_or_else(|| {
                    format!("challenge must be between 1 and {}", CHALLENGE_COUNT)
                })?;
                config.drafts.push(draft.to_vec());
            }
            "--all-challenges" => {
                config.drafts.extend(CHALLENGES.iter().map(|d| d.to_vec()));
            }
            "--file" => {
                let path = flag_value(args, &mut i, "--file")?;
                config
                    .drafts
                    .extend(load_drafts(Path::new(path)).map_err(|e| e.to_string())?);
            }
            "--random" => {
                // LEN is optional; a following non-number is left for the next pass.
                let len = args.get(i + 1).and_then(|v| v.parse::<usize>().ok());
                if len.is_some() {
                    i += 1;
                }
                config.random_lens.push(len);
            }
            "--seed" => {
                config.seed = flag_value(args, &mut i, "--seed")?
                    .parse()
                    .map_err(|_| "invalid --seed value".to_string())?;
            }
            "--threads" => {
                config.batch.threads = flag_value(args, &mut i, "--threads")?
                    .parse()
                    .map_err(|_| "invalid --threads value".to_string())?;
            }
            "--json" => config.json = true,
            "--no-values" => config.values = false,
            "--verbose" | "-v" => config.verbose = true,
            "--quiet" | "-q" => config.batch.quiet = true,
            "--rules" => config.rules = true,
            "--help" | "-h" => return Ok(None),
            other if other.starts_with("--") => {
                return Err(format!("Unknown argument: {}", other));
            }
            token => positional.push(token),
        }
        i += 1;
    }

    if !positional.is_empty() {
        let draft = parse_draft(&positional.join(" ")).map_err(|e| e.to_string())?;
        config.drafts.insert(0, draft);
    }
    Ok(Some(config))
}

/// Advances past a flag and returns its value.
fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("missing value for {}", flag))
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "par_odin=debug" } else { "par_odin=warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

/// Writes human-readable results, one draft per block.
fn write_text<W: Write>(reports: &[SolutionReport], values: bool, out: &mut W) -> io::Result<()> {
    for report in reports {
        writeln!(out, "Draft: {}", format_tokens(&report.draft))?;
        match (&report.armies, &report.error) {
            (Some([a, b]), _) => {
                let a: Vec<TokenType> = a.tokens.iter().map(|t| t.token).collect();
                let b: Vec<TokenType> = b.tokens.iter().map(|t| t.token).collect();
                writeln!(out, "Solution: {}", format_solution(&a, &b, values))?;
            }
            (None, Some(error)) => writeln!(out, "Error: {}", error)?,
            (None, None) => {}
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Writes every token type with its color and value rule.
fn write_rules<W: Write>(out: &mut W) -> io::Result<()> {
    for token in ALL_TOKENS {
        let color = if token.is_white() { "WHITE" } else { "BLACK" };
        writeln!(out, "{:<8} {:<6} {}", token.name(), color, token.description())?;
    }
    out.flush()
}

fn print_usage() {
    eprintln!("Usage: par-odin [OPTIONS] [TOKEN ...]");
    eprintln!();
    eprintln!(
        "Tokens: HERO CAPTAIN SOLDIER CURSED MAGE TRAITOR WOLF SNAKE HORSE DRAGON BOAR EAGLE"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --draft LIST       Solve a comma-separated draft (repeatable)");
    eprintln!(
        "  --challenge N      Solve built-in challenge N, 1-{} (repeatable)",
        CHALLENGE_COUNT
    );
    eprintln!("  --all-challenges   Solve every built-in challenge");
    eprintln!("  --file PATH        Solve drafts from a JSON file ([[\"HERO\", ...], ...])");
    eprintln!("  --random [LEN]     Solve a random draft of LEN tokens, 7-9 by default");
    eprintln!("  --seed N           Random seed, 0 for entropy (default: 0)");
    eprintln!("  --threads N        Number of parallel threads (default: 4)");
    eprintln!("  --json             Write one JSON object per draft");
    eprintln!("  --no-values        Omit per-token values from text output");
    eprintln!("  --verbose, -v      Log search details to stderr");
    eprintln!("  --quiet, -q        Suppress per-draft progress logging");
    eprintln!("  --rules            Print every token type with its value rule and exit");
    eprintln!("  --help             Show this help");
}
