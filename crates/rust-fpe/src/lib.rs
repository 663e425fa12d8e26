//! Format-preserving encryption.
//!
//! Provides implementations of the NIST-specified FF1 and FF3 encryption
//! algorithms (NIST SP 800-38G, and SP 800-38G Rev.1's FF3-1 tweak-handling
//! update). Format-preserving encryption, in short, means that both the
//! plaintext and ciphertext consist of the same alphabet of symbols: a
//! 16-digit card number encrypts to another 16-digit number, not to opaque
//! bytes.
//!
//! The public entry point is [`context::Context`]: construct one, `init` it
//! for a mode/cipher/key/radix, then call `encrypt`/`decrypt` (on raw symbol
//! arrays) or `encrypt_str`/`decrypt_str` (on strings, through an
//! [`alphabet::Alphabet`]).
//!
//! If no alphabet is supplied, a default alphabet is used, consisting of the
//! characters `0` through `9`, followed by the letters `a` through `z`, and
//! then by the letters `A` through `Z`. The maximum radix supported by this
//! default alphabet is 62, the number of characters in the alphabet.
//!
//! # Example
//! ```rust
//! use fpe::cipher::CipherKind;
//! use fpe::context::{Context, Mode};
//!
//! let mut ctx = Context::new();
//! ctx.init(
//!     Mode::Ff1,
//!     CipherKind::Aes128,
//!     &[
//!         0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!         0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//!     ],
//!     10,
//! ).unwrap();
//!
//! // these are from the first NIST-specified test for FF1
//! let pt = "0123456789";
//! let ct = "2433477484";
//!
//! let out = ctx.encrypt_str(None, pt, &[]).unwrap();
//! assert_eq!(out, ct);
//!
//! let out = ctx.decrypt_str(None, &ct, &[]).unwrap();
//! assert_eq!(out, pt);
//! ```

pub mod alphabet;
pub mod cipher;
pub mod context;
pub mod error;
pub mod ff1;
pub mod ff3;
pub mod numeral;

/// Results returned by the FPE library.
pub mod result {
    pub type Result<T> = std::result::Result<T, crate::error::Error>;
}
