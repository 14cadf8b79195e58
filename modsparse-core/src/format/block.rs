//! Matrix blocks: a header line `k N` followed by `k` triplets

use alloc::vec::Vec;

use crate::entry::Triplet;
use crate::validation::{validate_index, Tokens};
use crate::MatrixError;

/// Initial contents of one square matrix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatrixBlock {
    /// Matrix is `dimension x dimension`
    pub dimension: usize,
    /// Raw triplets in input order; values are not yet reduced
    pub triplets: Vec<Triplet>,
}

impl MatrixBlock {
    pub fn new(dimension: usize, triplets: Vec<Triplet>) -> Self {
        Self {
            dimension,
            triplets,
        }
    }

    /// Decode one block, rejecting coordinates outside `[0, N)`
    pub fn parse(tokens: &mut Tokens<'_>) -> Result<Self, MatrixError> {
        let count = tokens.next_usize()?;
        let dimension = tokens.next_usize()?;

        // The header is untrusted; do not let it drive a huge allocation
        let mut triplets = Vec::with_capacity(count.min(1 << 20));
        for _ in 0..count {
            let row = tokens.next_usize()?;
            let col = tokens.next_usize()?;
            let value = tokens.next_i64()?;
            validate_index(row, col, dimension)?;
            triplets.push((row, col, value));
        }

        Ok(Self {
            dimension,
            triplets,
        })
    }

    /// Check every triplet lies inside `[0, N)²`
    ///
    /// Blocks built by [`MatrixBlock::parse`] always pass; blocks assembled
    /// in code are checked here before they reach a backend.
    pub fn validate(&self) -> Result<(), MatrixError> {
        self.triplets
            .iter()
            .try_for_each(|&(row, col, _)| validate_index(row, col, self.dimension))
    }

    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    /// Fraction of the `N x N` positions listed in the block
    pub fn density(&self) -> f64 {
        if self.dimension == 0 {
            return 0.0;
        }
        self.triplets.len() as f64 / (self.dimension as f64 * self.dimension as f64)
    }
}

impl core::fmt::Display for MatrixBlock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{} {}", self.triplets.len(), self.dimension)?;
        for (row, col, value) in &self.triplets {
            writeln!(f, "{row} {col} {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_parse_block() {
        let mut tokens = Tokens::new("2 3\n0 1 5\n2 2 -4\n");
        let block = MatrixBlock::parse(&mut tokens).unwrap();

        assert_eq!(block.dimension, 3);
        assert_eq!(block.triplets, vec![(0, 1, 5), (2, 2, -4)]);
        assert!(tokens.is_exhausted());
    }

    #[test]
    fn test_parse_block_errors() {
        let mut tokens = Tokens::new("2 3\n0 1 5\n");
        assert_eq!(
            MatrixBlock::parse(&mut tokens),
            Err(MatrixError::MalformedInput)
        );

        let mut tokens = Tokens::new("1 3\n3 0 5\n");
        assert_eq!(
            MatrixBlock::parse(&mut tokens),
            Err(MatrixError::IndexOutOfBounds {
                row: 3,
                col: 0,
                dimension: 3
            })
        );

        let mut tokens = Tokens::new("1 3\n0 x 5\n");
        assert_eq!(
            MatrixBlock::parse(&mut tokens),
            Err(MatrixError::InvalidNumber)
        );
    }

    #[test]
    fn test_render_block() {
        let block = MatrixBlock::new(4, vec![(1, 2, 3), (0, 0, 9)]);
        assert_eq!(block.to_string(), "2 4\n1 2 3\n0 0 9\n");

        let reparsed = MatrixBlock::parse(&mut Tokens::new(&block.to_string())).unwrap();
        assert_eq!(reparsed, block);
    }

    #[test]
    fn test_validate_block() {
        assert_eq!(MatrixBlock::new(3, vec![(0, 2, 1), (2, 0, -7)]).validate(), Ok(()));
        assert_eq!(MatrixBlock::default().validate(), Ok(()));
        assert_eq!(
            MatrixBlock::new(2, vec![(0, 0, 1), (1, 2, 4)]).validate(),
            Err(MatrixError::IndexOutOfBounds {
                row: 1,
                col: 2,
                dimension: 2
            })
        );
    }

    #[test]
    fn test_density() {
        let block = MatrixBlock::new(10, vec![(0, 0, 1); 5]);
        let delta = block.density() - 0.05;
        assert!(delta < 1e-12 && delta > -1e-12);
        assert_eq!(MatrixBlock::default().density(), 0.0);
    }
}
