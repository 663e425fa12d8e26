//! Uniform block-cipher adapter.
//!
//! Exposes a single `encrypt_block` entry point over AES-128/192/256 and
//! SM4-128, each run as a zero-IV CBC encryptor (equivalent to ECB for the
//! single-block calls this library ever makes, and convenient because it
//! reuses the teacher's `cbc` dependency instead of pulling in a separate
//! ECB crate). Dispatch on `CipherKind` happens once, in `Schedule::prepare`;
//! `encrypt_block` itself matches on an already-resolved variant.

use zeroize::Zeroizing;

use crate::error::Error;
use crate::result::Result;

/// The block ciphers this library can drive FF1/FF3/FF3-1 with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Aes128,
    Aes192,
    Aes256,
    Sm4_128,
}

impl CipherKind {
    fn name(self) -> &'static str {
        match self {
            CipherKind::Aes128 => "AES-128",
            CipherKind::Aes192 => "AES-192",
            CipherKind::Aes256 => "AES-256",
            CipherKind::Sm4_128 => "SM4-128",
        }
    }

    fn expected_key_lengths(self) -> &'static [usize] {
        match self {
            CipherKind::Aes128 => &[16],
            CipherKind::Aes192 => &[24],
            CipherKind::Aes256 => &[32],
            CipherKind::Sm4_128 => &[16],
        }
    }
}

use aes::cipher::{BlockEncryptMut, BlockSizeUser, KeyIvInit};

#[derive(Clone)]
enum Adapter {
    Aes128(cbc::Encryptor<aes::Aes128>),
    Aes192(cbc::Encryptor<aes::Aes192>),
    Aes256(cbc::Encryptor<aes::Aes256>),
    Sm4_128(cbc::Encryptor<sm4::Sm4>),
}

/// A prepared key schedule for one of the supported ciphers.
///
/// The raw key bytes used to build the schedule are held in a
/// `Zeroizing<Vec<u8>>` and wiped on drop. The round-key material inside
/// the underlying `cbc::Encryptor` is opaque to this crate and isn't
/// reachable for zeroization; this is a best-effort measure, not a
/// guarantee, matching the "zeroize when practical" design note.
#[derive(Clone)]
pub struct Schedule {
    adapter: Adapter,
    blksz: usize,
    kind: CipherKind,
    #[allow(dead_code)]
    key: Zeroizing<Vec<u8>>,
}

macro_rules! construct {
    ($variant:ident, $cipher:ty, $key:expr, $iv:expr) => {
        Adapter::$variant(cbc::Encryptor::<$cipher>::new($key.into(), $iv.into()))
    };
}

impl Schedule {
    /// Prepares a key schedule for `kind` from `key_bytes`.
    pub fn prepare(key_bytes: &[u8], kind: CipherKind) -> Result<Schedule> {
        const IV: &[u8; 16] = &[0u8; 16];

        if !kind.expected_key_lengths().contains(&key_bytes.len()) {
            return Err(Error::KeyLength {
                cipher: kind.name(),
                got: key_bytes.len(),
                expected: kind.expected_key_lengths(),
            });
        }

        let adapter = match kind {
            CipherKind::Aes128 => construct!(Aes128, aes::Aes128, key_bytes, IV),
            CipherKind::Aes192 => construct!(Aes192, aes::Aes192, key_bytes, IV),
            CipherKind::Aes256 => construct!(Aes256, aes::Aes256, key_bytes, IV),
            CipherKind::Sm4_128 => construct!(Sm4_128, sm4::Sm4, key_bytes, IV),
        };

        let blksz = match kind {
            CipherKind::Aes128 => aes::Aes128::block_size(),
            CipherKind::Aes192 => aes::Aes192::block_size(),
            CipherKind::Aes256 => aes::Aes256::block_size(),
            CipherKind::Sm4_128 => sm4::Sm4::block_size(),
        };

        Ok(Schedule {
            adapter,
            blksz,
            kind,
            key: Zeroizing::new(key_bytes.to_vec()),
        })
    }

    /// Encrypts a single `blksz`-byte block, writing the result into `dst`.
    pub fn encrypt_block(&mut self, src: &[u8], dst: &mut [u8]) {
        match &mut self.adapter {
            Adapter::Aes128(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
            Adapter::Aes192(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
            Adapter::Aes256(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
            Adapter::Sm4_128(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
        }
    }

    pub fn block_size(&self) -> usize {
        self.blksz
    }

    pub fn kind(&self) -> CipherKind {
        self.kind
    }
}

/// CBC-MAC PRF: chains `encrypt_block` over consecutive blocks of `data`
/// starting from a fresh (IV = 0) copy of `schedule`, returning the final
/// block. Used by FF1's round function and, with a single 16-byte input,
/// doubles as the ECB-style `ciph()` single-block primitive FF3/FF3-1 use.
pub fn prf(schedule: &Schedule, data: &[u8]) -> Vec<u8> {
    let mut c = schedule.clone();
    let blksz = c.block_size();
    let mut out = vec![0u8; blksz];

    for i in 0..(data.len() / blksz) {
        let j = i * blksz;
        c.encrypt_block(&data[j..j + blksz], &mut out);
    }

    out
}

/// Single-block ECB encryption: `prf` restricted to exactly one block,
/// always starting from a fresh (IV = 0) schedule.
pub fn ciph(schedule: &Schedule, block: &[u8]) -> Vec<u8> {
    prf(schedule, &block[..schedule.block_size()])
}
