//! Timing harness over suite files
//!
//! Every workload of a pair is executed `runs` times on each selected
//! backend and the mean wall time is recorded. Pairs run in parallel on a
//! rayon pool; a single workload always runs on one thread.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::backend::Backend;
use crate::error::Result;
use crate::io::load_workload;
use crate::session::run_workload;
use crate::suite::{pair_dir, SuiteKind};

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BenchConfig {
    /// Repetitions per workload and backend
    pub runs: usize,
    /// Largest dimension the linear baseline is run at
    pub linear_max_dimension: usize,
    pub backends: Vec<Backend>,
    pub kinds: Vec<SuiteKind>,
    /// Worker threads, 0 for the rayon default
    pub threads: usize,
}

impl BenchConfig {
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs.max(1);
        self
    }

    pub fn with_linear_max_dimension(mut self, dimension: usize) -> Self {
        self.linear_max_dimension = dimension;
        self
    }

    pub fn with_backends(mut self, backends: Vec<Backend>) -> Self {
        self.backends = backends;
        self
    }

    pub fn with_kinds(mut self, kinds: Vec<SuiteKind>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Whether `backend` is measured at dimension `n`
    pub fn runs_backend(&self, backend: Backend, n: usize) -> bool {
        self.backends.contains(&backend)
            && (backend != Backend::Linear || n <= self.linear_max_dimension)
    }

    /// Load from a JSON file; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 6,
            linear_max_dimension: 100,
            backends: Backend::ALL.to_vec(),
            kinds: SuiteKind::ALL.to_vec(),
            threads: 0,
        }
    }
}

/// Mean timing of one workload on one backend
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchRecord {
    pub n: usize,
    pub k: usize,
    /// `k / N²`
    pub sparsity: f64,
    pub kind: SuiteKind,
    pub backend: Backend,
    pub runs: usize,
    pub mean_seconds: f64,
}

/// Time one workload file on every configured backend
fn bench_file(
    path: &Path,
    n: usize,
    k: usize,
    kind: SuiteKind,
    config: &BenchConfig,
) -> Result<Vec<BenchRecord>> {
    let workload = load_workload(path)?;
    let sparsity = workload.a.density();
    let runs = config.runs.max(1);

    let mut records = Vec::new();
    for &backend in config.backends.iter() {
        if !config.runs_backend(backend, n) {
            continue;
        }

        let mut total = 0.0;
        for _ in 0..runs {
            let start = Instant::now();
            run_workload(backend, &workload)?;
            total += start.elapsed().as_secs_f64();
        }

        let mean_seconds = total / runs as f64;
        debug!("N={n} k={k} {kind} on {backend}: {mean_seconds:.6}s");
        records.push(BenchRecord {
            n,
            k,
            sparsity,
            kind,
            backend,
            runs,
            mean_seconds,
        });
    }

    Ok(records)
}

fn bench_pair(root: &Path, n: usize, k: usize, config: &BenchConfig) -> Result<Vec<BenchRecord>> {
    let dir = pair_dir(root, n, k);
    let mut records = Vec::new();

    for &kind in config.kinds.iter() {
        let path = dir.join(kind.file_name());
        if !path.exists() {
            debug!("skipping missing {}", path.display());
            continue;
        }
        records.extend(bench_file(&path, n, k, kind, config)?);
    }

    Ok(records)
}

/// Benchmark every pair under `root`
///
/// Missing workload files are skipped. Records are ordered by pair, then
/// kind, then backend.
pub fn run_benchmarks(
    root: &Path,
    pairs: &[(usize, usize)],
    config: &BenchConfig,
) -> Result<Vec<BenchRecord>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    info!(
        "benchmarking {} pairs on {} threads, {} runs each",
        pairs.len(),
        pool.current_num_threads(),
        config.runs
    );

    let per_pair: Vec<Vec<BenchRecord>> = pool.install(|| {
        pairs
            .par_iter()
            .map(|&(n, k)| bench_pair(root, n, k, config))
            .collect::<Result<_>>()
    })?;

    let mut records: Vec<BenchRecord> = per_pair.into_iter().flatten().collect();
    records.sort_by_key(|r| (r.n, r.k, r.kind, r.backend));
    Ok(records)
}

/// Write records as a pretty-printed JSON array
#[cfg(feature = "serde")]
pub fn write_report_json<P: AsRef<Path>>(path: P, records: &[BenchRecord]) -> Result<()> {
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}

/// Write records as CSV with a header row
#[cfg(feature = "serde")]
pub fn write_report_csv<P: AsRef<Path>>(path: P, records: &[BenchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
