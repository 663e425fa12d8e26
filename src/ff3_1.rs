use fpe::cipher::CipherKind;
use fpe::context::{Context, Mode};

/// Resolves a cipher family name to a [`CipherKind`]. AES key sizes are
/// picked best-effort from `key_len`; an actual mismatch (e.g. a 20-byte
/// AES key) surfaces as [`fpe::error::Error::KeyLength`] from
/// `Schedule::prepare`, not here — this function only rejects cipher
/// families the adapter doesn't implement at all.
fn cipher_kind_for(cipher: &str, key_len: usize) -> Result<CipherKind, fpe::error::Error> {
    match cipher {
        "aes" => Ok(match key_len {
            24 => CipherKind::Aes192,
            32 => CipherKind::Aes256,
            _ => CipherKind::Aes128,
        }),
        "sm4" => Ok(CipherKind::Sm4_128),
        other => Err(fpe::error::Error::UnavailableCipher(other.to_string())),
    }
}

pub fn encrypt(
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    plaintext: &str,
) -> Result<String, String> {
    if alphabet.is_empty() {
        return Err(fpe::error::Error::NullArg.to_string());
    }
    let key_bytes = hex::decode(key).map_err(|e| format!("Invalid key hex: {e}"))?;
    let tweak_bytes = hex::decode(tweak).map_err(|e| format!("Invalid tweak hex: {e}"))?;
    let radix = alphabet.chars().count();
    let kind = cipher_kind_for(cipher, key_bytes.len()).map_err(|e| e.to_string())?;

    let mut ctx = Context::new();
    ctx.init(Mode::Ff3_1, kind, &key_bytes, radix)
        .map_err(|e| format!("Encryption failed: {e}"))?;
    ctx.encrypt_str(Some(alphabet), plaintext, &tweak_bytes)
        .map_err(|e| format!("Encryption failed: {e}"))
}

pub fn decrypt(
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    ciphertext: &str,
) -> Result<String, String> {
    if alphabet.is_empty() {
        return Err(fpe::error::Error::NullArg.to_string());
    }
    let key_bytes = hex::decode(key).map_err(|e| format!("Invalid key hex: {e}"))?;
    let tweak_bytes = hex::decode(tweak).map_err(|e| format!("Invalid tweak hex: {e}"))?;
    let radix = alphabet.chars().count();
    let kind = cipher_kind_for(cipher, key_bytes.len()).map_err(|e| e.to_string())?;

    let mut ctx = Context::new();
    ctx.init(Mode::Ff3_1, kind, &key_bytes, radix)
        .map_err(|e| format!("Decryption failed: {e}"))?;
    ctx.decrypt_str(Some(alphabet), ciphertext, &tweak_bytes)
        .map_err(|e| format!("Decryption failed: {e}"))
}
