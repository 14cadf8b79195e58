//! Arithmetic in the ring Z/MOD
//!
//! Every value a backend retains is a canonical representative in `[0, MOD)`.

/// Modulus of the coefficient ring
pub const MOD: i64 = 1_000_000;

/// Reduce `value` to its canonical representative in `[0, MOD)`
#[inline]
pub const fn canonicalize(value: i64) -> i64 {
    value.rem_euclid(MOD)
}

/// Canonical sum of two arbitrary integers
#[inline]
pub const fn add_mod(a: i64, b: i64) -> i64 {
    canonicalize(canonicalize(a) + canonicalize(b))
}

/// Canonical product of two arbitrary integers
///
/// Both factors are reduced first, so the intermediate product stays
/// below `MOD * MOD` and cannot overflow an `i64`.
#[inline]
pub const fn mul_mod(a: i64, b: i64) -> i64 {
    canonicalize(canonicalize(a) * canonicalize(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize(0), 0);
        assert_eq!(canonicalize(5), 5);
        assert_eq!(canonicalize(MOD), 0);
        assert_eq!(canonicalize(MOD + 7), 7);
        assert_eq!(canonicalize(-1), MOD - 1);
        assert_eq!(canonicalize(-MOD), 0);
        assert_eq!(canonicalize(-3 * MOD - 2), MOD - 2);
    }

    #[test]
    fn test_add_mod() {
        assert_eq!(add_mod(999_999, 1), 0);
        assert_eq!(add_mod(999_999, 2), 1);
        assert_eq!(add_mod(5, -5), 0);
        assert_eq!(add_mod(i64::MAX, i64::MAX), canonicalize(i64::MAX) * 2 % MOD);
    }

    #[test]
    fn test_mul_mod() {
        assert_eq!(mul_mod(999_999, 2), 999_998);
        assert_eq!(mul_mod(-1, 3), MOD - 3);
        assert_eq!(mul_mod(MOD, 12345), 0);
        assert_eq!(mul_mod(i64::MAX, i64::MAX), {
            let r = canonicalize(i64::MAX);
            r * r % MOD
        });
    }
}
