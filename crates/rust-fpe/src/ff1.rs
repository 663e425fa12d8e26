//! The FF1 algorithm.
//!
//! FF1 supports key sizes of 128, 192 and 256 bits (AES) or 128 bits (SM4)
//! and a tweak of essentially unbounded length (bounded here to 256 bytes,
//! see [`crate::context`]). This module holds only the Feistel round
//! structure itself (NIST SP 800-38G §5.2); radix/length/tweak validation
//! and key preparation are the caller's ([`crate::context::Context`])
//! responsibility.

use byteorder::ByteOrder;
use num_traits::Euclid;

use crate::cipher::{self, Schedule};
use crate::context::Direction;
use crate::numeral;

/// Runs the 10-round FF1 Feistel over `symbols`, base `radix`, under
/// `schedule` and `tweak`, in the direction given by `which`.
///
/// `symbols` must already satisfy `radix`'s length bounds and every
/// element must be `< radix`; this function does not re-validate either.
pub fn cipher_symbols(
    schedule: &Schedule,
    radix: usize,
    tweak: &[u8],
    symbols: &[u32],
    which: Direction,
) -> Vec<u32> {
    let blksz = schedule.block_size();
    let n = symbols.len();

    // (step 1)
    let u = n / 2;
    let v = n - u;

    // (step 2) the two halves are carried as bignums for the duration of
    // the algorithm and only converted back to symbols at the end.
    let mut na = numeral::to_bignum(&symbols[..u], radix as u32);
    let mut nb = numeral::to_bignum(&symbols[u..], radix as u32);

    // (step 3) b is the number of bytes needed to hold B's numeral value.
    let b = ((((radix as f64).log2() * (v as f64)).ceil() as usize) + 7) / 8;
    // d is the number of bytes extracted from the cipher output as `y`.
    let d = 4 * ((b + 3) / 4) + 4;

    // P is the fixed 16-byte header; Q follows it and is sized to a
    // multiple of the block size.
    let mut p = vec![0u8; 16 + ((tweak.len() + 1 + b + (blksz - 1)) / blksz) * blksz];
    let mut r = vec![0u8; ((d + (blksz - 1)) / blksz) * blksz];

    // (step 5)
    p[0] = 1;
    p[1] = 2;
    byteorder::BigEndian::write_u32(&mut p[2..6], radix as u32);
    p[2] = 1;
    p[6] = 10;
    p[7] = u as u8;
    byteorder::BigEndian::write_u32(&mut p[8..12], n as u32);
    byteorder::BigEndian::write_u32(&mut p[12..16], tweak.len() as u32);

    // (step 6i, partial) the tweak occupies the start of Q; the rest is
    // zero-padding (already zero) followed by the per-round counter and B.
    {
        let q = &mut p[16..];
        q[..tweak.len()].copy_from_slice(tweak);
    }

    // radix^u and radix^v, swapped each round.
    let mut mu = numeral::pow_radix(radix as u32, u as u32);
    let mut mv = if u != v { &mu * radix } else { mu.clone() };

    if let Direction::Decrypt = which {
        std::mem::swap(&mut na, &mut nb);
        std::mem::swap(&mut mu, &mut mv);
    }

    for i in 0..10u8 {
        {
            let q = &mut p[16..];
            let q_len = q.len();

            match which {
                Direction::Encrypt => q[q_len - b - 1] = i,
                Direction::Decrypt => q[q_len - b - 1] = 9 - i,
            }

            let bnum = numeral::bytes_be(&nb, b);
            q[q_len - b..].copy_from_slice(&bnum);
        }

        // (step 6ii) R = PRF(P || Q)
        let mac = cipher::prf(schedule, &p);
        r[..blksz].copy_from_slice(&mac);

        // (step 6iii) extend R to d bytes: R || CIPH(R^1) || CIPH(R^2) || ...
        for j in 1..r.len() / blksz {
            let (s, dst) = r.split_at_mut(blksz);
            let l = (j - 1) * blksz;

            let w = byteorder::BigEndian::read_u32(&s[blksz - 4..]);
            byteorder::BigEndian::write_u32(&mut s[blksz - 4..], w ^ j as u32);
            let out = cipher::ciph(schedule, s);
            dst[l..l + blksz].copy_from_slice(&out);
            byteorder::BigEndian::write_u32(&mut s[blksz - 4..], w);
        }

        // (step 6iv)
        let y = numeral::int_be(&r[..d]);

        // (step 6v-6vi)
        match which {
            Direction::Encrypt => na += y,
            Direction::Decrypt => na -= y,
        }
        na = na.rem_euclid(&mu);
        std::mem::swap(&mut mu, &mut mv);

        // (steps 6viii-6ix; 6vii not necessary)
        std::mem::swap(&mut na, &mut nb);
    }

    if let Direction::Decrypt = which {
        std::mem::swap(&mut na, &mut nb);
    }

    // (step 7)
    let mut out = numeral::from_bignum(&na, radix as u32, u);
    out.extend(numeral::from_bignum(&nb, radix as u32, v));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherKind;

    fn symbols(s: &str) -> Vec<u32> {
        s.chars().map(|c| c.to_digit(10).unwrap()).collect()
    }

    #[test]
    fn nist_sample_1_no_tweak() {
        let key = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let schedule = Schedule::prepare(&key, CipherKind::Aes128).unwrap();

        let pt = symbols("0123456789");
        let ct = cipher_symbols(&schedule, 10, &[], &pt, Direction::Encrypt);
        assert_eq!(ct, symbols("2433477484"));

        let back = cipher_symbols(&schedule, 10, &[], &ct, Direction::Decrypt);
        assert_eq!(back, pt);
    }
}
