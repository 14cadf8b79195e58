//! Execute an operation stream against matrices A and B

use std::time::{Duration, Instant};

use log::{debug, trace};
use modsparse_core::{check_dimensions, Opcode, Operation, Target, Workload};

use crate::backend::{Backend, DynamicMatrix};
use crate::error::Result;

/// Result of applying a single operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Value read by a query
    Value(i64),
    /// A or B was modified in place
    Updated,
    /// A derived matrix was computed and dropped
    Computed { nnz: usize },
}

/// Totals for one executed stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    counts: [usize; Opcode::ALL.len()],
    /// Query results in stream order
    pub values: Vec<i64>,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Number of executed operations with the given opcode
    pub fn count(&self, opcode: Opcode) -> usize {
        self.counts[opcode.code() as usize - 1]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Matrices A and B held by one backend
#[derive(Debug, Clone)]
pub struct Session {
    a: DynamicMatrix,
    b: DynamicMatrix,
}

impl Session {
    /// Load both blocks of `workload` into `backend`
    ///
    /// Fails with `DimensionMismatch` when A and B differ in size and with
    /// `IndexOutOfBounds` when a block lists a position outside its matrix.
    pub fn new(backend: Backend, workload: &Workload) -> Result<Self> {
        check_dimensions(workload.a.dimension, workload.b.dimension)?;
        workload.a.validate()?;
        workload.b.validate()?;

        let a = DynamicMatrix::from_block(backend, &workload.a);
        let b = DynamicMatrix::from_block(backend, &workload.b);
        debug!(
            "{backend} session: N={}, nnz(A)={}, nnz(B)={}",
            a.dimension(),
            a.nnz(),
            b.nnz()
        );

        Ok(Self { a, b })
    }

    pub fn a(&self) -> &DynamicMatrix {
        &self.a
    }

    pub fn b(&self) -> &DynamicMatrix {
        &self.b
    }

    pub fn backend(&self) -> Backend {
        self.a.backend()
    }

    fn target(&self, target: Target) -> &DynamicMatrix {
        match target {
            Target::A => &self.a,
            Target::B => &self.b,
        }
    }

    fn target_mut(&mut self, target: Target) -> &mut DynamicMatrix {
        match target {
            Target::A => &mut self.a,
            Target::B => &mut self.b,
        }
    }

    /// Apply one operation
    ///
    /// Query and set coordinates are bounds-checked against the addressed
    /// matrix and fail with `IndexOutOfBounds`.
    pub fn apply(&mut self, operation: &Operation) -> Result<Outcome> {
        let outcome = match *operation {
            Operation::Query { target, row, col } => {
                Outcome::Value(self.target(target).try_get(row, col)?)
            }
            Operation::Set {
                target,
                row,
                col,
                value,
            } => {
                self.target_mut(target).try_set(row, col, value)?;
                Outcome::Updated
            }
            Operation::Transpose { target } => {
                self.target_mut(target).toggle_transpose();
                Outcome::Updated
            }
            Operation::Add => Outcome::Computed {
                nnz: self.a.add(&self.b)?.nnz(),
            },
            Operation::Scale { target, alpha } => Outcome::Computed {
                nnz: self.target(target).scale(alpha).nnz(),
            },
            Operation::Multiply => Outcome::Computed {
                nnz: self.a.multiply(&self.b)?.nnz(),
            },
        };

        trace!("{operation} -> {outcome:?}");
        Ok(outcome)
    }

    /// Apply every operation in order, stopping at the first failure
    pub fn run(&mut self, operations: &[Operation]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let start = Instant::now();

        for operation in operations {
            if let Outcome::Value(value) = self.apply(operation)? {
                summary.values.push(value);
            }
            summary.counts[operation.opcode().code() as usize - 1] += 1;
        }

        summary.elapsed = start.elapsed();
        debug!(
            "{} session ran {} operations in {:?}",
            self.backend(),
            summary.total(),
            summary.elapsed
        );
        Ok(summary)
    }
}

/// Load `workload` into `backend` and run its full operation stream
pub fn run_workload(backend: Backend, workload: &Workload) -> Result<RunSummary> {
    Session::new(backend, workload)?.run(&workload.operations)
}
