//! Operation stream records

use super::constants::{opcode, target};
use crate::validation::Tokens;
use crate::MatrixError;

/// Operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `1 m i j` - read one value
    Query = opcode::QUERY,
    /// `2 m i j v` - write one value
    Set = opcode::SET,
    /// `3 m` - toggle the transpose flag
    Transpose = opcode::TRANSPOSE,
    /// `4` - compute A + B and discard it
    Add = opcode::ADD,
    /// `5 m alpha` - compute alpha * M and discard it
    Scale = opcode::SCALE,
    /// `6` - compute A * B and discard it
    Multiply = opcode::MULTIPLY,
}

impl Opcode {
    pub const ALL: [Opcode; 6] = [
        Opcode::Query,
        Opcode::Set,
        Opcode::Transpose,
        Opcode::Add,
        Opcode::Scale,
        Opcode::Multiply,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in logs and reports
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Query => "query",
            Opcode::Set => "set",
            Opcode::Transpose => "transpose",
            Opcode::Add => "add",
            Opcode::Scale => "scale",
            Opcode::Multiply => "multiply",
        }
    }
}

impl TryFrom<i64> for Opcode {
    type Error = MatrixError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.code() as i64 == value)
            .ok_or(MatrixError::UnknownOpcode(value))
    }
}

impl core::fmt::Display for Opcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which of the two workload matrices an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    A,
    B,
}

impl Target {
    pub const fn code(self) -> u8 {
        match self {
            Target::A => target::A,
            Target::B => target::B,
        }
    }
}

impl TryFrom<i64> for Target {
    type Error = MatrixError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            v if v == target::A as i64 => Ok(Target::A),
            v if v == target::B as i64 => Ok(Target::B),
            other => Err(MatrixError::InvalidTarget(other)),
        }
    }
}

/// One decoded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query {
        target: Target,
        row: usize,
        col: usize,
    },
    Set {
        target: Target,
        row: usize,
        col: usize,
        value: i64,
    },
    Transpose { target: Target },
    Add,
    Scale {
        target: Target,
        alpha: i64,
    },
    Multiply,
}

impl Operation {
    pub const fn opcode(&self) -> Opcode {
        match self {
            Operation::Query { .. } => Opcode::Query,
            Operation::Set { .. } => Opcode::Set,
            Operation::Transpose { .. } => Opcode::Transpose,
            Operation::Add => Opcode::Add,
            Operation::Scale { .. } => Opcode::Scale,
            Operation::Multiply => Opcode::Multiply,
        }
    }

    /// Decode the next operation from `tokens`
    ///
    /// Coordinates are not bounds-checked here; that depends on the
    /// matrix the operation is applied to.
    pub fn parse(tokens: &mut Tokens<'_>) -> Result<Self, MatrixError> {
        let opcode = Opcode::try_from(tokens.next_i64()?)?;

        let operation = match opcode {
            Opcode::Query => Operation::Query {
                target: Target::try_from(tokens.next_i64()?)?,
                row: tokens.next_usize()?,
                col: tokens.next_usize()?,
            },
            Opcode::Set => Operation::Set {
                target: Target::try_from(tokens.next_i64()?)?,
                row: tokens.next_usize()?,
                col: tokens.next_usize()?,
                value: tokens.next_i64()?,
            },
            Opcode::Transpose => Operation::Transpose {
                target: Target::try_from(tokens.next_i64()?)?,
            },
            Opcode::Add => Operation::Add,
            Opcode::Scale => Operation::Scale {
                target: Target::try_from(tokens.next_i64()?)?,
                alpha: tokens.next_i64()?,
            },
            Opcode::Multiply => Operation::Multiply,
        };

        Ok(operation)
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let code = self.opcode().code();
        match *self {
            Operation::Query { target, row, col } => {
                write!(f, "{code} {} {row} {col}", target.code())
            }
            Operation::Set {
                target,
                row,
                col,
                value,
            } => write!(f, "{code} {} {row} {col} {value}", target.code()),
            Operation::Transpose { target } => write!(f, "{code} {}", target.code()),
            Operation::Add | Operation::Multiply => write!(f, "{code}"),
            Operation::Scale { target, alpha } => {
                write!(f, "{code} {} {alpha}", target.code())
            }
        }
    }
}
