//! Errors returned by the FPE library.
//!
//! The set of error kinds is closed and mirrors the failure modes a caller
//! needs to branch on: bad configuration (key/radix/alphabet), bad input
//! (length/tweak/symbol range), bad context state, and an internal
//! catch-all for invariant violations that should never surface in
//! practice.

use thiserror::Error;

/// Errors returned by the FPE library.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// A required argument was empty where the caller must supply one:
    /// [`crate::context::Context::init`] rejects an empty key, and the
    /// binding crate rejects an empty alphabet before it ever reaches
    /// [`crate::alphabet::Alphabet::new`]. Safe Rust has no null pointers,
    /// so this stands in for the source's NULL-argument check at the
    /// FFI/binding boundary.
    #[error("required argument is empty")]
    NullArg,

    /// An operation was attempted on a context that hasn't been
    /// initialized, or whose initialization failed.
    #[error("context is not initialized")]
    BadState,

    /// The supplied key length doesn't match any key size the chosen
    /// cipher supports.
    #[error("invalid key length {got} for cipher {cipher}; expected one of {expected:?}")]
    KeyLength {
        cipher: &'static str,
        got: usize,
        expected: &'static [usize],
    },

    /// The requested cipher kind has no adapter implementation.
    #[error("cipher {0} is not available")]
    UnavailableCipher(String),

    /// The radix is outside `[2, 2^16]`.
    #[error("invalid radix {got}; must be between {min} and {max}")]
    Radix { got: usize, min: usize, max: usize },

    /// The input length is outside `[minlen, maxlen]` for the mode/radix.
    #[error("invalid text length {got}; expected between {min} and {max} symbols")]
    Length { got: usize, min: usize, max: usize },

    /// The tweak length isn't permitted for the mode.
    #[error("invalid tweak length {got}; expected {rule}")]
    TweakLength { got: usize, rule: &'static str },

    /// The alphabet has fewer than 2 characters, duplicate characters, or
    /// fewer characters than the requested radix.
    #[error("invalid alphabet: {0}")]
    Alphabet(String),

    /// A raw symbol was `>= radix`, or a string character wasn't found in
    /// the alphabet.
    #[error("symbol out of range: {0}")]
    SymbolOutOfRange(String),

    /// A block-cipher primitive failure or other invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Results returned by the FPE library.
pub type Result<T> = std::result::Result<T, Error>;
