//! Complete workloads: matrices A and B plus an operation stream

use alloc::vec::Vec;

use super::block::MatrixBlock;
use super::operation::{Opcode, Operation};
use crate::validation::Tokens;
use crate::MatrixError;

/// Two matrix blocks followed by the operations to run against them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Workload {
    pub a: MatrixBlock,
    pub b: MatrixBlock,
    pub operations: Vec<Operation>,
}

impl Workload {
    /// Decode a full workload
    ///
    /// A missing operation count means an empty stream. Once a count is
    /// present, every announced operation must be complete.
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let mut tokens = Tokens::new(text);

        let a = MatrixBlock::parse(&mut tokens)?;
        let b = MatrixBlock::parse(&mut tokens)?;

        let count = tokens.try_next_usize()?.unwrap_or(0);
        let mut operations = Vec::with_capacity(count.min(1 << 20));
        for _ in 0..count {
            operations.push(Operation::parse(&mut tokens)?);
        }

        Ok(Self { a, b, operations })
    }

    /// Number of operations with the given opcode
    pub fn count(&self, opcode: Opcode) -> usize {
        self.operations
            .iter()
            .filter(|op| op.opcode() == opcode)
            .count()
    }
}

impl core::fmt::Display for Workload {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.a, self.b)?;
        writeln!(f, "{}", self.operations.len())?;
        for operation in &self.operations {
            writeln!(f, "{operation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Target;
    use alloc::string::ToString;
    use alloc::vec;

    const SAMPLE: &str = "2 2\n0 0 5\n0 1 3\n2 2\n0 0 1\n1 1 1\n3\n1 1 0 1\n6\n5 2 3\n";

    #[test]
    fn test_parse_workload() {
        let workload = Workload::parse(SAMPLE).unwrap();

        assert_eq!(workload.a.dimension, 2);
        assert_eq!(workload.a.triplets, vec![(0, 0, 5), (0, 1, 3)]);
        assert_eq!(workload.b.triplets, vec![(0, 0, 1), (1, 1, 1)]);
        assert_eq!(
            workload.operations,
            vec![
                Operation::Query {
                    target: Target::A,
                    row: 0,
                    col: 1
                },
                Operation::Multiply,
                Operation::Scale {
                    target: Target::B,
                    alpha: 3
                },
            ]
        );
        assert_eq!(workload.count(Opcode::Multiply), 1);
        assert_eq!(workload.count(Opcode::Add), 0);
    }

    #[test]
    fn test_missing_operation_count_is_empty_stream() {
        let workload = Workload::parse("1 2\n0 0 1\n0 2\n").unwrap();
        assert!(workload.operations.is_empty());
        assert!(workload.b.is_empty());
    }

    #[test]
    fn test_truncated_stream_is_malformed() {
        assert_eq!(
            Workload::parse("0 2\n0 2\n2\n4\n"),
            Err(MatrixError::MalformedInput)
        );
    }

    #[test]
    fn test_render_round_trip() {
        let workload = Workload::parse(SAMPLE).unwrap();
        let text = workload.to_string();
        assert_eq!(text, SAMPLE);
    }
}
