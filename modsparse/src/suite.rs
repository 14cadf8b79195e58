//! Benchmark suite files
//!
//! For every `(N, k)` pair a directory `N_{N}_K_{k}` holds one workload per
//! [`SuiteKind`]. All files of a pair share the same A and B so timings
//! differ only by the operation stream.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use modsparse_core::{Operation, Target, Workload};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::fixture::FixtureGenerator;
use crate::io::save_workload;

/// Dimensions swept by default
pub const DEFAULT_DIMENSIONS: [usize; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];

/// Values drawn for set and scale operands, inclusive
const OPERAND_VALUES: std::ops::RangeInclusive<i64> = 0..=100;

/// Below this dimension `k` is a percentage of `N²`
const DENSITY_SWEEP_LIMIT: usize = 10_000;

/// Densities in percent used below [`DENSITY_SWEEP_LIMIT`]
const DENSITY_PERCENTS: [usize; 4] = [1, 5, 10, 20];

/// Plan the `(N, k)` pairs for a set of dimensions
///
/// Small matrices sweep 1%, 5%, 10% and 20% density. From 10⁴ upwards
/// `k` is `10^(e-4)`, `10^(e-3)` and `10^(e-2)` where `e = floor(log10 N)`.
/// Pairs with `k = 0` are skipped.
pub fn plan_pairs(dimensions: &[usize]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for &n in dimensions {
        if n < DENSITY_SWEEP_LIMIT {
            let square = n * n;
            pairs.extend(
                DENSITY_PERCENTS
                    .iter()
                    .map(|percent| square * percent / 100)
                    .filter(|&k| k > 0)
                    .map(|k| (n, k)),
            );
        } else {
            let e = n.ilog10();
            pairs.extend((e - 4..=e - 2).map(|exp| (n, 10usize.pow(exp))));
        }
    }

    pairs
}

/// One workload file per kind of operation stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SuiteKind {
    /// No operations; measures loading A and B
    Insertion,
    Query,
    Set,
    Transpose,
    Add,
    Scale,
    Multiply,
}

impl SuiteKind {
    pub const ALL: [SuiteKind; 7] = [
        SuiteKind::Insertion,
        SuiteKind::Query,
        SuiteKind::Set,
        SuiteKind::Transpose,
        SuiteKind::Add,
        SuiteKind::Scale,
        SuiteKind::Multiply,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SuiteKind::Insertion => "insertion",
            SuiteKind::Query => "query",
            SuiteKind::Set => "set",
            SuiteKind::Transpose => "transpose",
            SuiteKind::Add => "add",
            SuiteKind::Scale => "scale",
            SuiteKind::Multiply => "multiply",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.txt", self.name())
    }

    /// Operations per file unless configured otherwise
    pub const fn default_count(self) -> usize {
        match self {
            SuiteKind::Insertion => 0,
            SuiteKind::Query | SuiteKind::Set => 10_000,
            SuiteKind::Transpose | SuiteKind::Add | SuiteKind::Scale => 20,
            SuiteKind::Multiply => 5,
        }
    }

    /// Random operation stream of this kind for an `n x n` pair
    ///
    /// Query and set streams are empty when `n` is 0.
    pub fn generate<R: Rng>(self, rng: &mut R, n: usize, count: usize) -> Vec<Operation> {
        if n == 0 && matches!(self, SuiteKind::Query | SuiteKind::Set) {
            return Vec::new();
        }

        let target = |rng: &mut R| if rng.gen() { Target::A } else { Target::B };

        (0..count)
            .filter_map(|_| match self {
                SuiteKind::Insertion => None,
                SuiteKind::Query => Some(Operation::Query {
                    target: target(rng),
                    row: rng.gen_range(0..n),
                    col: rng.gen_range(0..n),
                }),
                SuiteKind::Set => Some(Operation::Set {
                    target: target(rng),
                    row: rng.gen_range(0..n),
                    col: rng.gen_range(0..n),
                    value: rng.gen_range(OPERAND_VALUES),
                }),
                SuiteKind::Transpose => Some(Operation::Transpose {
                    target: target(rng),
                }),
                SuiteKind::Add => Some(Operation::Add),
                SuiteKind::Scale => Some(Operation::Scale {
                    target: target(rng),
                    alpha: rng.gen_range(OPERAND_VALUES),
                }),
                SuiteKind::Multiply => Some(Operation::Multiply),
            })
            .collect()
    }
}

impl std::fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Configuration for suite generation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SuiteConfig {
    /// Dimensions to plan pairs for
    pub dimensions: Vec<usize>,
    /// Base seed; `None` derives every pair's seed from `(N, k)` alone
    pub seed: Option<u64>,
    pub query_count: usize,
    pub set_count: usize,
    pub transpose_count: usize,
    pub add_count: usize,
    pub scale_count: usize,
    pub multiply_count: usize,
}

impl SuiteConfig {
    /// Set the dimensions to sweep
    pub fn with_dimensions(mut self, dimensions: Vec<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the operation count for one kind
    pub fn with_count(mut self, kind: SuiteKind, count: usize) -> Self {
        match kind {
            SuiteKind::Insertion => {}
            SuiteKind::Query => self.query_count = count,
            SuiteKind::Set => self.set_count = count,
            SuiteKind::Transpose => self.transpose_count = count,
            SuiteKind::Add => self.add_count = count,
            SuiteKind::Scale => self.scale_count = count,
            SuiteKind::Multiply => self.multiply_count = count,
        }
        self
    }

    /// Operations written for `kind`
    pub fn count(&self, kind: SuiteKind) -> usize {
        match kind {
            SuiteKind::Insertion => 0,
            SuiteKind::Query => self.query_count,
            SuiteKind::Set => self.set_count,
            SuiteKind::Transpose => self.transpose_count,
            SuiteKind::Add => self.add_count,
            SuiteKind::Scale => self.scale_count,
            SuiteKind::Multiply => self.multiply_count,
        }
    }

    /// Seed for one pair, stable across runs
    pub fn pair_seed(&self, n: usize, k: usize) -> u64 {
        let mixed = (n as u64)
            .wrapping_mul(0x9e37_79b9_7f4a_7c15)
            .rotate_left(31)
            ^ (k as u64).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        mixed ^ self.seed.unwrap_or(0)
    }

    /// Load from a JSON file; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS.to_vec(),
            seed: None,
            query_count: SuiteKind::Query.default_count(),
            set_count: SuiteKind::Set.default_count(),
            transpose_count: SuiteKind::Transpose.default_count(),
            add_count: SuiteKind::Add.default_count(),
            scale_count: SuiteKind::Scale.default_count(),
            multiply_count: SuiteKind::Multiply.default_count(),
        }
    }
}

/// Directory holding the files of one pair
pub fn pair_dir(root: &Path, n: usize, k: usize) -> PathBuf {
    root.join(format!("N_{n}_K_{k}"))
}

/// Write the workloads of one pair, keeping files that already exist
///
/// Returns the paths written by this call.
pub fn write_suite(root: &Path, n: usize, k: usize, config: &SuiteConfig) -> Result<Vec<PathBuf>> {
    let dir = pair_dir(root, n, k);
    let missing: Vec<SuiteKind> = SuiteKind::ALL
        .into_iter()
        .filter(|kind| !dir.join(kind.file_name()).exists())
        .collect();

    if missing.is_empty() {
        debug!("{} is complete", dir.display());
        return Ok(Vec::new());
    }
    fs::create_dir_all(&dir)?;

    let seed = config.pair_seed(n, k);
    let mut generator = FixtureGenerator::new(seed);
    let mut workload = Workload {
        a: generator.generate(n, k),
        b: generator.generate(n, k),
        operations: Vec::new(),
    };

    let mut written = Vec::with_capacity(missing.len());
    for kind in missing {
        // Per-kind stream so a file's content does not depend on which others exist
        let mut rng = StdRng::seed_from_u64(seed ^ (kind as u64 + 1));
        workload.operations = kind.generate(&mut rng, n, config.count(kind));

        let path = dir.join(kind.file_name());
        save_workload(&path, &workload)?;
        debug!(
            "wrote {} ({} operations)",
            path.display(),
            workload.operations.len()
        );
        written.push(path);
    }

    Ok(written)
}

/// Write the suites of every planned pair under `root`
pub fn write_suites(root: &Path, config: &SuiteConfig) -> Result<Vec<(usize, usize)>> {
    let pairs = plan_pairs(&config.dimensions);
    info!("{} (N, k) pairs planned under {}", pairs.len(), root.display());

    for (done, &(n, k)) in pairs.iter().enumerate() {
        write_suite(root, n, k, config)?;
        if (done + 1) % 5 == 0 {
            info!("processed {}/{} pairs", done + 1, pairs.len());
        }
    }

    Ok(pairs)
}
