//! Integer tokenizing for the whitespace-separated text format
//!
//! Matrix blocks and operation streams are plain integers separated by
//! arbitrary ASCII whitespace. This module provides the parsing
//! functions and a cursor over the tokens with no I/O dependencies.

use crate::MatrixError;
use core::str::SplitAsciiWhitespace;

/// Parse a non-negative integer
pub fn parse_usize(s: &str) -> Result<usize, MatrixError> {
    if s.is_empty() {
        return Err(MatrixError::InvalidNumber);
    }

    // Parse manually to avoid std dependency
    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(MatrixError::InvalidNumber);
        }

        let digit = (byte - b'0') as usize;

        if result > (usize::MAX - digit) / 10 {
            return Err(MatrixError::InvalidNumber);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}

/// Parse a signed integer with an optional leading `+` or `-`
pub fn parse_i64(s: &str) -> Result<i64, MatrixError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() {
        return Err(MatrixError::InvalidNumber);
    }

    // Accumulate negatively so i64::MIN parses without overflow
    let mut result: i64 = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(MatrixError::InvalidNumber);
        }

        let digit = (byte - b'0') as i64;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_sub(digit))
            .ok_or(MatrixError::InvalidNumber)?;
    }

    if negative {
        Ok(result)
    } else {
        result.checked_neg().ok_or(MatrixError::InvalidNumber)
    }
}

/// Cursor over whitespace-separated integer tokens
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    /// Next raw token, or `MalformedInput` when the input is exhausted
    pub fn next_token(&mut self) -> Result<&'a str, MatrixError> {
        self.inner.next().ok_or(MatrixError::MalformedInput)
    }

    pub fn next_usize(&mut self) -> Result<usize, MatrixError> {
        parse_usize(self.next_token()?)
    }

    pub fn next_i64(&mut self) -> Result<i64, MatrixError> {
        parse_i64(self.next_token()?)
    }

    /// Next non-negative integer, or `None` when the input is exhausted
    pub fn try_next_usize(&mut self) -> Result<Option<usize>, MatrixError> {
        self.inner.next().map(parse_usize).transpose()
    }

    /// Whether every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.inner.clone().next().is_none()
    }
}
