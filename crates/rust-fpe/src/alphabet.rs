//! Symbol codec.
//!
//! Maps characters to/from symbol indices via a caller-supplied alphabet
//! (or a default 0-9a-zA-Z alphabet, radix <= 62), and validates raw
//! `u32` symbol arrays against a radix directly, for callers that skip the
//! character layer entirely.

use crate::error::Error;
use crate::result::Result;

const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

struct Letter {
    val: char,
    pos: usize,
}

pub struct Alphabet {
    by_pos: Vec<char>,
    by_ltr: Vec<Letter>,
}

impl Alphabet {
    pub fn new(opt_s: Option<&str>, radix: usize) -> Result<Alphabet> {
        let s = opt_s.unwrap_or(DEFAULT_ALPHABET);

        let mut by_pos = Vec::<char>::new();
        for c in s.chars() {
            if by_pos.len() < radix {
                by_pos.push(c);
            }
        }

        if by_pos.len() < radix {
            return Err(Error::Alphabet(format!(
                "not enough letters in alphabet; need {}, got {}",
                radix,
                by_pos.len()
            )));
        }

        if by_pos.len() < 2 {
            return Err(Error::Alphabet(
                "alphabet must contain at least 2 characters".to_string(),
            ));
        }

        let mut by_ltr = Vec::<Letter>::with_capacity(by_pos.len());
        for c in &by_pos {
            by_ltr.push(Letter {
                val: *c,
                pos: by_ltr.len(),
            });
        }
        by_ltr.sort_by_key(|l| l.val);

        for i in 1..by_ltr.len() {
            if by_ltr[i].val == by_ltr[i - 1].val {
                return Err(Error::Alphabet(format!(
                    "duplicate character '{}' in alphabet",
                    by_ltr[i].val
                )));
            }
        }

        Ok(Alphabet { by_ltr, by_pos })
    }

    pub fn len(&self) -> usize {
        self.by_pos.len()
    }

    pub fn ltr(&self, c: char) -> Result<u32> {
        match self.by_ltr.binary_search_by_key(&c, |l| l.val) {
            Ok(i) => Ok(self.by_ltr[i].pos as u32),
            Err(_) => Err(Error::SymbolOutOfRange(format!(
                "'{c}' not found in alphabet"
            ))),
        }
    }

    pub fn pos(&self, i: u32) -> Result<char> {
        let i = i as usize;
        if i >= self.len() {
            return Err(Error::SymbolOutOfRange(format!("no letter at position {i}")));
        }
        Ok(self.by_pos[i])
    }

    pub fn str_to_symbols(&self, s: &str) -> Result<Vec<u32>> {
        s.chars().map(|c| self.ltr(c)).collect()
    }

    pub fn symbols_to_str(&self, symbols: &[u32]) -> Result<String> {
        symbols.iter().map(|&s| self.pos(s)).collect()
    }
}

/// Validates that every symbol in `symbols` is `< radix`, the raw-array
/// counterpart of `Alphabet::str_to_symbols`'s per-character check.
pub fn validate_symbols(symbols: &[u32], radix: usize) -> Result<()> {
    let radix = radix as u32;
    for &s in symbols {
        if s >= radix {
            return Err(Error::SymbolOutOfRange(format!(
                "symbol {s} >= radix {radix}"
            )));
        }
    }
    Ok(())
}
