//! Big-numeral arithmetic.
//!
//! Converts between symbol arrays (base `radix`, most-significant symbol
//! first) and `num_bigint::BigInt`, and between `BigInt` and fixed-width
//! big-endian byte strings. All modular arithmetic needed by FF1/FF3/FF3-1
//! reduces to `BigInt` plus `num_traits::Euclid::rem_euclid`, since
//! `radix^m` routinely exceeds machine word width for the radix/length
//! combinations this library accepts.

use num_traits::{Euclid, ToPrimitive};

/// `NUM_radix(X)`: the integer value of symbol array `x`, base `radix`,
/// most-significant symbol first.
pub fn to_bignum(symbols: &[u32], radix: u32) -> num_bigint::BigInt {
    let digits: Vec<u8> = symbols.iter().map(|&s| s as u8).collect();
    // `from_radix_be` only accepts radix <= 256 in digit form; for radix in
    // (256, 65536] we widen through BigInt multiply/add instead.
    if radix <= 256 {
        num_bigint::BigInt::from_radix_be(num_bigint::Sign::Plus, &digits, radix)
            .expect("digits validated < radix by caller")
    } else {
        let mut acc = num_bigint::BigInt::from(0);
        let base = num_bigint::BigInt::from(radix);
        for &s in symbols {
            acc = acc * &base + num_bigint::BigInt::from(s);
        }
        acc
    }
}

/// `STR_m_radix(v)`: the length-`len` symbol array representing `v`, base
/// `radix`, most-significant symbol first. If `v >= radix^len` the result
/// is `v mod radix^len` (well-defined because callers only ever pass
/// representable values, per spec.md §4.2).
pub fn from_bignum(n: &num_bigint::BigInt, radix: u32, len: usize) -> Vec<u32> {
    if radix <= 256 {
        let (_, mut digits) = n.to_radix_le(radix);
        digits.resize(len, 0);
        digits.reverse();
        digits.into_iter().map(|d| d as u32).collect()
    } else {
        let mut v = n.clone();
        let base = num_bigint::BigInt::from(radix);
        let mut out = vec![0u32; len];
        for i in (0..len).rev() {
            let (q, r) = v.div_rem_euclid(&base);
            out[i] = r.to_u32().unwrap_or(0);
            v = q;
        }
        out
    }
}

/// Big-endian byte representation of `v`, zero-padded or truncated (from
/// the low-order end, i.e. kept) to exactly `b` bytes.
pub fn bytes_be(n: &num_bigint::BigInt, b: usize) -> Vec<u8> {
    let (_, mut bytes) = n.to_bytes_le();
    bytes.resize(b, 0);
    bytes.reverse();
    bytes
}

/// Inverse of [`bytes_be`]: the non-negative integer represented by `b`,
/// interpreted big-endian.
pub fn int_be(b: &[u8]) -> num_bigint::BigInt {
    num_bigint::BigInt::from_bytes_be(num_bigint::Sign::Plus, b)
}

/// `(a + b) mod radix^m`.
pub fn add_mod_exp(
    a: &num_bigint::BigInt,
    b: &num_bigint::BigInt,
    radix: u32,
    m: u32,
) -> num_bigint::BigInt {
    let modulus = num_bigint::BigInt::from(radix).pow(m);
    (a + b).rem_euclid(&modulus)
}

/// `(a - b) mod radix^m`.
pub fn sub_mod_exp(
    a: &num_bigint::BigInt,
    b: &num_bigint::BigInt,
    radix: u32,
    m: u32,
) -> num_bigint::BigInt {
    let modulus = num_bigint::BigInt::from(radix).pow(m);
    (a - b).rem_euclid(&modulus)
}

/// `radix^m`, the modulus used throughout the Feistel rounds.
pub fn pow_radix(radix: u32, m: u32) -> num_bigint::BigInt {
    num_bigint::BigInt::from(radix).pow(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn symbol_roundtrip_small_radix() {
        let symbols = [1u32, 2, 3, 4, 5, 6, 7, 8, 9, 0];
        let n = to_bignum(&symbols, 10);
        assert_eq!(n, num_bigint::BigInt::from_str("1234567890").unwrap());

        let back = from_bignum(&n, 10, symbols.len());
        assert_eq!(back, symbols);
    }

    #[test]
    fn symbol_roundtrip_wide_radix() {
        let symbols = [12000u32, 34000, 5, 65000];
        let n = to_bignum(&symbols, 65536);
        let back = from_bignum(&n, 65536, symbols.len());
        assert_eq!(back, symbols);
    }

    #[test]
    fn bytes_be_padding_and_truncation() {
        let n = num_bigint::BigInt::from(1u32);
        assert_eq!(bytes_be(&n, 4), vec![0, 0, 0, 1]);

        let n = num_bigint::BigInt::from(0x0102_0304u64);
        assert_eq!(bytes_be(&n, 4), vec![1, 2, 3, 4]);
        assert_eq!(int_be(&bytes_be(&n, 4)), n);
    }

    #[test]
    fn modular_arithmetic_wraps() {
        let modulus_exp = 2u32; // radix^2
        let radix = 10u32;
        let a = num_bigint::BigInt::from(9u32);
        let b = num_bigint::BigInt::from(95u32);
        // (9 + 95) mod 100 = 4
        assert_eq!(
            add_mod_exp(&a, &b, radix, modulus_exp),
            num_bigint::BigInt::from(4u32)
        );
        // (9 - 95) mod 100 = 14
        assert_eq!(
            sub_mod_exp(&a, &b, radix, modulus_exp),
            num_bigint::BigInt::from(14u32)
        );
    }
}
