//! Format constants for the operation stream

/// Operation codes as they appear on the wire
pub mod opcode {
    pub const QUERY: u8 = 1;
    pub const SET: u8 = 2;
    pub const TRANSPOSE: u8 = 3;
    pub const ADD: u8 = 4;
    pub const SCALE: u8 = 5;
    pub const MULTIPLY: u8 = 6;
}

/// Matrix selector codes
pub mod target {
    pub const A: u8 = 1;
    pub const B: u8 = 2;
}

/// Values the fixture generator draws, inclusive
pub const FIXTURE_VALUES: core::ops::RangeInclusive<i64> = 1..=100;
