use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};

use modsparse::logging::{init_logger, level_for_verbosity};
use modsparse::suite::DEFAULT_DIMENSIONS;
use modsparse::{
    bench, load_workload, plan_pairs, run_benchmarks, run_workload, write_fixture, write_suites,
    Backend, BenchConfig, FixtureGenerator, SuiteConfig,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Sparse matrices over Z/1000000 - run workloads, generate fixtures and benchmark backends")]
struct Cli {
    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a workload file
    Run {
        /// Workload file: two matrix blocks and an operation stream
        file: PathBuf,

        /// Storage backend
        #[arg(long, value_enum, default_value_t = Backend::Hash)]
        backend: Backend,

        /// Print each query result on its own line
        #[arg(long)]
        echo: bool,
    },
    /// Print a random N x N fixture with k nonzero entries
    Generate {
        n: usize,
        k: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write benchmark workload files under a directory
    Suite {
        dir: PathBuf,

        /// JSON suite configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Time every backend on the workload files under a directory
    Bench {
        dir: PathBuf,

        /// JSON benchmark configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Dimensions whose pairs are benchmarked
        #[arg(long, value_delimiter = ',')]
        dimensions: Option<Vec<usize>>,

        /// Write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the report as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(level_for_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Run {
            file,
            backend,
            echo,
        } => {
            let workload = match load_workload(&file) {
                Ok(workload) => workload,
                Err(e) if e.is_input_error() => {
                    error!("{} is not a valid workload", file.display());
                    return Err(e.into());
                }
                Err(e) => return Err(e.into()),
            };
            let summary = run_workload(backend, &workload)?;

            if echo {
                let mut out = BufWriter::new(io::stdout().lock());
                for value in &summary.values {
                    writeln!(out, "{value}")?;
                }
                out.flush()?;
            }
            info!(
                "{} operations on {backend} in {:.2?}",
                summary.total(),
                summary.elapsed
            );
        }
        Commands::Generate { n, k, seed } => {
            let mut generator = match seed {
                Some(seed) => FixtureGenerator::new(seed),
                None => FixtureGenerator::from_entropy(),
            };
            let block = generator.generate(n, k);

            let mut out = BufWriter::new(io::stdout().lock());
            write_fixture(&mut out, &block)?;
            out.flush()?;
        }
        Commands::Suite { dir, config } => {
            let config = match config {
                Some(path) => SuiteConfig::from_json_file(path)?,
                None => SuiteConfig::default(),
            };
            let pairs = write_suites(&dir, &config)?;
            info!("suite for {} pairs ready in {}", pairs.len(), dir.display());
        }
        Commands::Bench {
            dir,
            config,
            dimensions,
            json,
            csv,
        } => {
            let config = match config {
                Some(path) => BenchConfig::from_json_file(path)?,
                None => BenchConfig::default(),
            };
            let dimensions = dimensions.unwrap_or_else(|| DEFAULT_DIMENSIONS.to_vec());
            let pairs = plan_pairs(&dimensions);

            let records = run_benchmarks(&dir, &pairs, &config)?;
            for record in &records {
                println!(
                    "N={:<8} k={:<8} {:<10} {:<8} {:.6}s",
                    record.n, record.k, record.kind, record.backend, record.mean_seconds
                );
            }

            if let Some(path) = json {
                bench::write_report_json(&path, &records)?;
                info!("JSON report written to {}", path.display());
            }
            if let Some(path) = csv {
                bench::write_report_csv(&path, &records)?;
                info!("CSV report written to {}", path.display());
            }
        }
    }

    Ok(())
}
