//! Random sparse fixtures
//!
//! A fixture is `k` distinct positions drawn uniformly from `[0, N)²`, each
//! holding a value in `1..=100`.

use std::io::Write;

use log::warn;
use modsparse_core::format::constants::FIXTURE_VALUES;
use modsparse_core::validation::validate_dimension_fits;
use modsparse_core::MatrixBlock;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Seeded generator for fixture matrices
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    rng: StdRng,
}

impl FixtureGenerator {
    /// Deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw an `n x n` block with `k` distinct nonzero positions
    ///
    /// `k` larger than `n²` is clamped to `n²`.
    pub fn generate(&mut self, n: usize, k: usize) -> MatrixBlock {
        let (capacity, k) = match validate_dimension_fits(n, k) {
            Ok(capacity) => (capacity, k),
            Err(capacity) => {
                warn!("requested {k} entries but a {n}x{n} matrix holds {capacity}; clamping");
                (capacity, capacity)
            }
        };

        if k == 0 {
            return MatrixBlock::new(n, Vec::new());
        }

        // Distinct linear positions without rejection loops, even when dense
        let triplets = index::sample(&mut self.rng, capacity, k)
            .into_iter()
            .map(|position| {
                let value = self.rng.gen_range(FIXTURE_VALUES);
                (position / n, position % n, value)
            })
            .collect();

        MatrixBlock::new(n, triplets)
    }
}

/// Write a fixture as `N k` followed by one `row col value` line per entry
pub fn write_fixture<W: Write>(writer: &mut W, block: &MatrixBlock) -> std::io::Result<()> {
    writeln!(writer, "{} {}", block.dimension, block.len())?;
    for (row, col, value) in &block.triplets {
        writeln!(writer, "{row} {col} {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_distinct_positions() {
        let block = FixtureGenerator::new(1).generate(50, 400);

        assert_eq!(block.dimension, 50);
        assert_eq!(block.len(), 400);

        let positions: HashSet<_> = block.triplets.iter().map(|&(i, j, _)| (i, j)).collect();
        assert_eq!(positions.len(), 400);
        for &(i, j, v) in &block.triplets {
            assert!(i < 50 && j < 50);
            assert!(FIXTURE_VALUES.contains(&v));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = FixtureGenerator::new(99).generate(20, 30);
        let second = FixtureGenerator::new(99).generate(20, 30);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_clamps_to_full_matrix() {
        let block = FixtureGenerator::new(3).generate(4, 100);
        assert_eq!(block.len(), 16);

        let positions: HashSet<_> = block.triplets.iter().map(|&(i, j, _)| (i, j)).collect();
        assert_eq!(positions.len(), 16);
    }

    #[test]
    fn test_generate_empty() {
        assert!(FixtureGenerator::new(0).generate(10, 0).is_empty());
        assert!(FixtureGenerator::new(0).generate(0, 5).is_empty());
    }

    #[test]
    fn test_write_fixture_header() {
        let block = MatrixBlock::new(3, vec![(0, 2, 9), (1, 1, 4)]);
        let mut out = Vec::new();
        write_fixture(&mut out, &block).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3 2\n0 2 9\n1 1 4\n");
    }
}
