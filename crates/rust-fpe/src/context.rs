//! Dispatcher & context.
//!
//! [`Context`] is the library's single public entry point: it owns the
//! mode, the cipher kind, the prepared key schedule(s) and the
//! radix/length bounds derived from them, validates every call in the
//! order spec.md §4.6 lists, and dispatches to [`crate::ff1`]/[`crate::ff3`].
//! It implements the state machine of spec.md §4.7 directly as an enum.

use crate::alphabet::{self, Alphabet};
use crate::cipher::{CipherKind, Schedule};
use crate::error::Error;
use crate::ff1;
use crate::ff3::{self, Variant};
use crate::result::Result;

const MIN_RADIX: usize = 2;
const MAX_RADIX: usize = 1 << 16;
/// Practical cap on FF1 input length (spec.md §4.4 permits implementations
/// to cap at 2^16 symbols rather than the field-width maximum of 2^32-1).
const FF1_MAX_LEN: usize = 1 << 16;
/// FF1 tweak length cap (spec.md §3 requires "at least 256 bytes").
const FF1_MAX_TWEAK: usize = 256;

/// Which FPE algorithm a [`Context`] is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ff1,
    Ff3,
    Ff3_1,
}

/// Feistel round direction, shared by [`crate::ff1`] and [`crate::ff3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Tagged key material: FF1 carries a single schedule, FF3/FF3-1 carry the
/// forward schedule (validates the key length) and the reversed-key
/// schedule the Feistel round actually calls (§4.5). This keeps FF1 from
/// carrying an unused second schedule, per the design note in spec.md §9.
enum KeyMaterial {
    Ff1 { schedule: Schedule },
    Ff3Family {
        #[allow(dead_code)]
        forward: Schedule,
        reversed: Schedule,
    },
}

struct Initialized {
    mode: Mode,
    cipher_kind: CipherKind,
    radix: usize,
    minlen: usize,
    maxlen: usize,
    key: KeyMaterial,
}

enum State {
    Fresh,
    Initialized(Initialized),
}

/// An opaque FPE context: holds the prepared key schedule(s), mode, radix
/// and derived length bounds. See spec.md §4.6/§4.7.
///
/// There is no explicit `free`: dropping a `Context` drops its
/// [`Schedule`]s, whose retained key bytes are wrapped in
/// `zeroize::Zeroizing` and wiped automatically. `init` on an already
/// `Initialized` context (reinit) replaces the old `Initialized` value,
/// which drops (and so zeroizes) the old key material before the new one
/// is installed.
pub struct Context {
    state: State,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Context {
        Context { state: State::Fresh }
    }

    /// Initializes (or re-initializes) the context for `mode`/`cipher_kind`
    /// with `key`, over symbol alphabets of size `radix`.
    pub fn init(&mut self, mode: Mode, cipher_kind: CipherKind, key: &[u8], radix: usize) -> Result<()> {
        if key.is_empty() {
            return Err(Error::NullArg);
        }

        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::Radix {
                got: radix,
                min: MIN_RADIX,
                max: MAX_RADIX,
            });
        }

        let (minlen, maxlen) = length_bounds(mode, radix)?;

        let key_material = match mode {
            Mode::Ff1 => KeyMaterial::Ff1 {
                schedule: Schedule::prepare(key, cipher_kind)?,
            },
            Mode::Ff3 | Mode::Ff3_1 => {
                let forward = Schedule::prepare(key, cipher_kind)?;
                let mut reversed_key = key.to_vec();
                reversed_key.reverse();
                let reversed = Schedule::prepare(&reversed_key, cipher_kind)?;
                KeyMaterial::Ff3Family { forward, reversed }
            }
        };

        // Only committed once every validation step above succeeded; a
        // failed init leaves any previous `Initialized` state untouched.
        self.state = State::Initialized(Initialized {
            mode,
            cipher_kind,
            radix,
            minlen,
            maxlen,
            key: key_material,
        });

        Ok(())
    }

    fn initialized(&self) -> Result<&Initialized> {
        match &self.state {
            State::Fresh => Err(Error::BadState),
            State::Initialized(i) => Ok(i),
        }
    }

    pub fn mode(&self) -> Result<Mode> {
        Ok(self.initialized()?.mode)
    }

    pub fn cipher_kind(&self) -> Result<CipherKind> {
        Ok(self.initialized()?.cipher_kind)
    }

    pub fn radix(&self) -> Result<usize> {
        Ok(self.initialized()?.radix)
    }

    pub fn length_bounds(&self) -> Result<(usize, usize)> {
        let i = self.initialized()?;
        Ok((i.minlen, i.maxlen))
    }

    fn validate_length(&self, i: &Initialized, n: usize) -> Result<()> {
        if n < i.minlen || n > i.maxlen {
            return Err(Error::Length {
                got: n,
                min: i.minlen,
                max: i.maxlen,
            });
        }
        Ok(())
    }

    fn validate_tweak(&self, i: &Initialized, tweak: &[u8]) -> Result<()> {
        match i.mode {
            Mode::Ff1 => {
                if tweak.len() > FF1_MAX_TWEAK {
                    return Err(Error::TweakLength {
                        got: tweak.len(),
                        rule: "at most 256 bytes",
                    });
                }
            }
            Mode::Ff3 => {
                if tweak.len() != Variant::Ff3.tweak_len() {
                    return Err(Error::TweakLength {
                        got: tweak.len(),
                        rule: "exactly 8 bytes",
                    });
                }
            }
            Mode::Ff3_1 => {
                if tweak.len() != Variant::Ff31.tweak_len() {
                    return Err(Error::TweakLength {
                        got: tweak.len(),
                        rule: "exactly 7 bytes",
                    });
                }
            }
        }
        Ok(())
    }

    fn run(&self, symbols: &[u32], tweak: &[u8], which: Direction) -> Result<Vec<u32>> {
        let i = self.initialized()?;
        self.validate_length(i, symbols.len())?;
        self.validate_tweak(i, tweak)?;
        alphabet::validate_symbols(symbols, i.radix)?;

        Ok(match (&i.key, i.mode) {
            (KeyMaterial::Ff1 { schedule }, Mode::Ff1) => {
                ff1::cipher_symbols(schedule, i.radix, tweak, symbols, which)
            }
            (KeyMaterial::Ff3Family { reversed, .. }, Mode::Ff3) => {
                ff3::cipher_symbols(reversed, i.radix, tweak, symbols, Variant::Ff3, which)
            }
            (KeyMaterial::Ff3Family { reversed, .. }, Mode::Ff3_1) => {
                ff3::cipher_symbols(reversed, i.radix, tweak, symbols, Variant::Ff31, which)
            }
            _ => return Err(Error::Internal("mode/key-material mismatch".to_string())),
        })
    }

    /// Encrypts a symbol array (every element `< radix`).
    pub fn encrypt(&self, symbols: &[u32], tweak: &[u8]) -> Result<Vec<u32>> {
        self.run(symbols, tweak, Direction::Encrypt)
    }

    /// Decrypts a symbol array (every element `< radix`).
    pub fn decrypt(&self, symbols: &[u32], tweak: &[u8]) -> Result<Vec<u32>> {
        self.run(symbols, tweak, Direction::Decrypt)
    }

    /// Encrypts `buf` in place. Implemented by running `encrypt` into a
    /// scratch buffer and copying back, matching the source's "input and
    /// output buffers may overlap exactly" contract (spec.md §4.6) without
    /// needing raw pointers: there is no separate output buffer to alias.
    pub fn encrypt_in_place(&self, buf: &mut [u32], tweak: &[u8]) -> Result<()> {
        let out = self.encrypt(buf, tweak)?;
        buf.copy_from_slice(&out);
        Ok(())
    }

    /// Decrypts `buf` in place; see [`Context::encrypt_in_place`].
    pub fn decrypt_in_place(&self, buf: &mut [u32], tweak: &[u8]) -> Result<()> {
        let out = self.decrypt(buf, tweak)?;
        buf.copy_from_slice(&out);
        Ok(())
    }

    /// Encrypts a string drawn from `alphabet` (or the library's default
    /// alphabet if `None`).
    pub fn encrypt_str(&self, alphabet: Option<&str>, s: &str, tweak: &[u8]) -> Result<String> {
        self.cipher_str(alphabet, s, tweak, Direction::Encrypt)
    }

    /// Decrypts a string drawn from `alphabet` (or the library's default
    /// alphabet if `None`).
    pub fn decrypt_str(&self, alphabet: Option<&str>, s: &str, tweak: &[u8]) -> Result<String> {
        self.cipher_str(alphabet, s, tweak, Direction::Decrypt)
    }

    fn cipher_str(
        &self,
        alphabet_str: Option<&str>,
        s: &str,
        tweak: &[u8],
        which: Direction,
    ) -> Result<String> {
        let radix = self.radix()?;
        let alpha = Alphabet::new(alphabet_str, radix)?;
        let symbols = alpha.str_to_symbols(s)?;
        let out = self.run(&symbols, tweak, which)?;
        alpha.symbols_to_str(&out)
    }
}

fn length_bounds(mode: Mode, radix: usize) -> Result<(usize, usize)> {
    // NIST's minimum work-factor rule, radix^minlen >= 1_000_000, shared by
    // all three modes:
    //   minlen = ceil(log_radix(1_000_000)) = ceil(6 / log10(radix))
    let minlen = ((6f64 / (radix as f64).log10()).ceil() as usize).max(2);

    let maxlen = match mode {
        Mode::Ff1 => FF1_MAX_LEN,
        // spec.md §4.5: maxlen = 2 * floor(log_radix(2^96)) = 2 * floor(96 / log2(radix)).
        // Flooring before doubling matters: for radix 10 this is 56, not 57.
        Mode::Ff3 | Mode::Ff3_1 => 2 * ((96f64 / (radix as f64).log2()).floor() as usize),
    };

    if minlen > maxlen {
        return Err(Error::Length {
            got: minlen,
            min: minlen,
            max: maxlen,
        });
    }

    Ok((minlen, maxlen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherKind;

    const AES_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn fresh_context_rejects_operations() {
        let ctx = Context::new();
        let err = ctx.encrypt(&[1, 2, 3], &[]).unwrap_err();
        assert_eq!(err, Error::BadState);
    }

    #[test]
    fn init_rejects_bad_radix() {
        let mut ctx = Context::new();
        let err = ctx.init(Mode::Ff1, CipherKind::Aes128, &AES_KEY, 1).unwrap_err();
        assert!(matches!(err, Error::Radix { .. }));
    }

    #[test]
    fn init_rejects_empty_key() {
        let mut ctx = Context::new();
        let err = ctx.init(Mode::Ff1, CipherKind::Aes128, &[], 10).unwrap_err();
        assert_eq!(err, Error::NullArg);
    }

    #[test]
    fn init_rejects_bad_key_length() {
        let mut ctx = Context::new();
        let err = ctx
            .init(Mode::Ff1, CipherKind::Aes128, &[0u8; 15], 10)
            .unwrap_err();
        assert!(matches!(err, Error::KeyLength { .. }));
    }

    #[test]
    fn ff1_roundtrip_and_nist_vector() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff1, CipherKind::Aes128, &AES_KEY, 10).unwrap();

        let pt = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let ct = ctx.encrypt(&pt, &[]).unwrap();
        assert_eq!(ct, vec![2, 4, 3, 3, 4, 7, 7, 4, 8, 4]);

        let back = ctx.decrypt(&ct, &[]).unwrap();
        assert_eq!(back, pt);
    }

    #[test]
    fn rejects_length_out_of_bounds() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff3_1, CipherKind::Aes128, &AES_KEY, 10).unwrap();
        let err = ctx.encrypt(&[1], &[0u8; 7]).unwrap_err();
        assert!(matches!(err, Error::Length { .. }));
    }

    #[test]
    fn ff3_requires_eight_byte_tweak() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff3, CipherKind::Aes128, &AES_KEY, 10).unwrap();
        let err = ctx.encrypt(&[1, 2, 3, 4, 5, 6], &[0u8; 7]).unwrap_err();
        assert!(matches!(err, Error::TweakLength { .. }));
    }

    #[test]
    fn ff3_1_requires_seven_byte_tweak() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff3_1, CipherKind::Aes128, &AES_KEY, 10).unwrap();
        let err = ctx.encrypt(&[1, 2, 3, 4, 5, 6], &[0u8; 8]).unwrap_err();
        assert!(matches!(err, Error::TweakLength { .. }));
    }

    #[test]
    fn rejects_symbol_out_of_range() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff1, CipherKind::Aes128, &AES_KEY, 10).unwrap();
        let err = ctx.encrypt(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 10], &[]).unwrap_err();
        assert!(matches!(err, Error::SymbolOutOfRange(_)));
    }

    #[test]
    fn reinit_replaces_previous_state() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff1, CipherKind::Aes128, &AES_KEY, 10).unwrap();
        ctx.init(Mode::Ff3_1, CipherKind::Aes128, &AES_KEY, 10).unwrap();
        assert_eq!(ctx.mode().unwrap(), Mode::Ff3_1);
    }

    #[test]
    fn string_api_roundtrip() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff1, CipherKind::Aes128, &AES_KEY, 10).unwrap();

        let ct = ctx.encrypt_str(Some("0123456789"), "0123456789", &[]).unwrap();
        assert_eq!(ct, "2433477484");
        let pt = ctx.decrypt_str(Some("0123456789"), &ct, &[]).unwrap();
        assert_eq!(pt, "0123456789");
    }

    #[test]
    fn in_place_matches_out_of_place() {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff1, CipherKind::Aes128, &AES_KEY, 10).unwrap();

        let pt = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let expected = ctx.encrypt(&pt, &[]).unwrap();

        let mut buf = pt.clone();
        ctx.encrypt_in_place(&mut buf, &[]).unwrap();
        assert_eq!(buf, expected);
    }
}
