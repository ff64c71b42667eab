//! Search Bench CLI

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use search_bench::{Config, OperationKind, OutputFormat, Spacing};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "search-bench", version, about = "Time search operations across input sizes")]
struct Cli {
    /// JSON config file (defaults to $SEARCH_BENCH_CONFIG, then config/bench.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input sizes to sweep, comma separated
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Timed repetitions per case
    #[arg(long)]
    iterations: Option<u32>,

    /// Untimed repetitions before measurement
    #[arg(long)]
    warmup: Option<u32>,

    /// linear-search, binary-search or linked-list-search
    #[arg(long)]
    operation: Option<OperationKind>,

    /// sequential (value = i) or even (value = 2i)
    #[arg(long)]
    spacing: Option<Spacing>,

    /// Run cases on a worker pool instead of the main thread
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel
    #[arg(long)]
    workers: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Skip the known-answer fixtures
    #[arg(long)]
    skip_self_check: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::from_env()?,
        };

        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(warmup) = self.warmup {
            config.warmup = warmup;
        }
        if let Some(operation) = self.operation {
            config.operation = operation;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if self.parallel {
            config.parallel.enabled = true;
        }
        if let Some(workers) = self.workers {
            config.parallel.workers = workers;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        if self.skip_self_check {
            config.self_check = false;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }

        Ok(config)
    }
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.logging.json_output {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let config = Cli::parse().into_config()?;
    init_logging(&config)?;

    info!("Configuration loaded");
    let report = search_bench::run(&config)?;

    match config.output {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if report.has_failures() {
        error!("Benchmark finished with failures");
        return Ok(ExitCode::FAILURE);
    }

    info!("Benchmark complete");
    Ok(ExitCode::SUCCESS)
}
