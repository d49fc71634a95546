use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use matchscope::config::CliOverrides;
use matchscope::request::{read_requests, write_bundles};
use matchscope::{ComparisonService, MatchConfig};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod render;
mod response;

use response::MatchResponse;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file layered over the default locations
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); MATCHSCOPE_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HashArgs {
    /// Radix of the Rabin-Karp rolling hash
    #[arg(long)]
    base: Option<u32>,

    /// Modulus of the Rabin-Karp rolling hash
    #[arg(long)]
    modulus: Option<u32>,
}

#[derive(Args)]
struct CompareArgs {
    /// Text to search in (default: empty)
    #[arg(short, long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read the text from a file; one trailing newline is dropped
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Pattern to search for (default: empty)
    #[arg(short, long, conflicts_with = "pattern_file")]
    pattern: Option<String>,

    /// Read the pattern from a file; one trailing newline is dropped
    #[arg(long)]
    pattern_file: Option<PathBuf>,

    /// Print the full JSON response, traces included
    #[arg(long)]
    json: bool,

    /// Print one line per window for each algorithm
    #[arg(short, long, conflicts_with = "json")]
    explain: bool,

    #[command(flatten)]
    hash: HashArgs,
}

#[derive(Args)]
struct BatchArgs {
    /// File with one JSON request ({"text": ..., "pattern": ...}) per line
    #[arg(short, long)]
    input: PathBuf,

    /// Write responses here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    #[command(flatten)]
    hash: HashArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare naive and Rabin-Karp matching on one text and pattern
    Compare(CompareArgs),

    /// Compare many requests in parallel, writing JSON lines
    Batch(BatchArgs),

    /// Print the effective configuration as YAML
    Config(HashArgs),
}

fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_env("MATCHSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (hash, threads) = match &cli.command {
        Commands::Compare(args) => (&args.hash, None),
        Commands::Batch(args) => (&args.hash, args.threads),
        Commands::Config(args) => (args, None),
    };
    let config = MatchConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .merge_with_cli(CliOverrides {
            base: hash.base,
            modulus: hash.modulus,
            thread_count: threads,
            log_level: cli.log_level.clone(),
        });

    init_logging(&config.log_level);
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Compare(args) => {
            let service = ComparisonService::from_config(&config)?;
            run_compare(&service, &args)
        }
        Commands::Batch(args) => {
            let service = ComparisonService::from_config(&config)?;
            run_batch(&service, &args, config.thread_count)
        }
        Commands::Config(_) => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

fn run_compare(service: &ComparisonService, args: &CompareArgs) -> Result<()> {
    let text = read_input(args.text.as_deref(), args.text_file.as_deref())?;
    let pattern = read_input(args.pattern.as_deref(), args.pattern_file.as_deref())?;

    let response = MatchResponse::timed(service, &text, &pattern);

    if args.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &response)?;
        println!();
    } else if args.explain {
        render::print_explain(&response);
    } else {
        render::print_summary(&response, service.hash_params());
    }
    Ok(())
}

fn run_batch(service: &ComparisonService, args: &BatchArgs, threads: NonZeroUsize) -> Result<()> {
    let requests = read_requests(&args.input)?;
    let bundles = service.compare_batch(&requests, threads);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    write_bundles(BufWriter::new(writer), &bundles)?;

    info!("Wrote {} responses", bundles.len());
    Ok(())
}

/// Resolves an inline value or file contents, defaulting to an empty string
fn read_input(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(value), _) => Ok(value.to_string()),
        (None, Some(path)) => {
            let mut contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if contents.ends_with('\n') {
                contents.pop();
                if contents.ends_with('\r') {
                    contents.pop();
                }
            }
            Ok(contents)
        }
        (None, None) => Ok(String::new()),
    }
}
