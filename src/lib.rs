use pyo3::{exceptions::PyValueError, prelude::*};

mod ff1;
mod ff3;
mod ff3_1;

#[pyfunction]
#[pyo3(signature = (cipher, key, tweak, alphabet, plaintext))]
/// Encrypts plaintext using FF1 format-preserving encryption.
///
/// Args:
///     cipher (str): Block cipher to drive FF1 with: "aes" or "sm4"
///     key (str): Hex-encoded key (16, 24, or 32 bytes after decoding for aes; 16 for sm4)
///     tweak (str): Hex-encoded tweak (may be empty or arbitrary length, up to 256 bytes)
///     alphabet (str): String containing the valid characters
///     plaintext (str): Text to encrypt, must contain only characters from alphabet
///
/// Returns:
///     str: The encrypted text
///
/// Raises:
///     ValueError: If inputs are invalid
fn ff1_encrypt(
    py: Python,
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    plaintext: &str,
) -> PyResult<String> {
    py.allow_threads(|| {
        ff1::encrypt(cipher, key, tweak, alphabet, plaintext).map_err(PyValueError::new_err)
    })
}

#[pyfunction]
#[pyo3(signature = (cipher, key, tweak, alphabet, ciphertext))]
/// Decrypts ciphertext using FF1 format-preserving encryption.
///
/// Args:
///     cipher (str): Block cipher to drive FF1 with: "aes" or "sm4"
///     key (str): Hex-encoded key (16, 24, or 32 bytes after decoding for aes; 16 for sm4)
///     tweak (str): Hex-encoded tweak (may be empty or arbitrary length, up to 256 bytes)
///     alphabet (str): String containing the valid characters
///     ciphertext (str): Text to decrypt, must contain only characters from alphabet
///
/// Returns:
///     str: The decrypted text
///
/// Raises:
///     ValueError: If inputs are invalid
fn ff1_decrypt(
    py: Python,
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    ciphertext: &str,
) -> PyResult<String> {
    py.allow_threads(|| {
        ff1::decrypt(cipher, key, tweak, alphabet, ciphertext).map_err(PyValueError::new_err)
    })
}

#[pyfunction]
#[pyo3(signature = (cipher, key, tweak, alphabet, plaintext))]
/// Encrypts plaintext using FF3 format-preserving encryption.
///
/// Args:
///     cipher (str): Block cipher to drive FF3 with: "aes" or "sm4"
///     key (str): Hex-encoded key (16, 24, or 32 bytes after decoding for aes; 16 for sm4)
///     tweak (str): Hex-encoded tweak, exactly 8 bytes after decoding
///     alphabet (str): String containing the valid characters
///     plaintext (str): Text to encrypt, must contain only characters from alphabet
///
/// Returns:
///     str: The encrypted text
///
/// Raises:
///     ValueError: If inputs are invalid
fn ff3_encrypt(
    py: Python,
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    plaintext: &str,
) -> PyResult<String> {
    py.allow_threads(|| {
        ff3::encrypt(cipher, key, tweak, alphabet, plaintext).map_err(PyValueError::new_err)
    })
}

#[pyfunction]
#[pyo3(signature = (cipher, key, tweak, alphabet, ciphertext))]
/// Decrypts ciphertext using FF3 format-preserving encryption.
///
/// Args:
///     cipher (str): Block cipher to drive FF3 with: "aes" or "sm4"
///     key (str): Hex-encoded key (16, 24, or 32 bytes after decoding for aes; 16 for sm4)
///     tweak (str): Hex-encoded tweak, exactly 8 bytes after decoding
///     alphabet (str): String containing the valid characters
///     ciphertext (str): Text to decrypt, must contain only characters from alphabet
///
/// Returns:
///     str: The decrypted text
///
/// Raises:
///     ValueError: If inputs are invalid
fn ff3_decrypt(
    py: Python,
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    ciphertext: &str,
) -> PyResult<String> {
    py.allow_threads(|| {
        ff3::decrypt(cipher, key, tweak, alphabet, ciphertext).map_err(PyValueError::new_err)
    })
}

#[pyfunction]
#[pyo3(signature = (cipher, key, tweak, alphabet, plaintext))]
/// Encrypts plaintext using FF3-1 format-preserving encryption
///
/// Args:
///     cipher (str): Block cipher to drive FF3-1 with: "aes" or "sm4"
///     key (str): Hex-encoded key (16, 24, or 32 bytes after decoding for aes; 16 for sm4)
///     tweak (str): Hex-encoded tweak (exactly 7 bytes after decoding)
///     alphabet (str): String containing the valid characters
///     plaintext (str): Text to encrypt, must contain only characters from alphabet
///
/// Returns:
///     str: The encrypted text
///
/// Raises:
///     ValueError: If inputs are invalid
fn ff3_1_encrypt(
    py: Python,
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    plaintext: &str,
) -> PyResult<String> {
    py.allow_threads(|| {
        ff3_1::encrypt(cipher, key, tweak, alphabet, plaintext).map_err(PyValueError::new_err)
    })
}

#[pyfunction]
#[pyo3(signature = (cipher, key, tweak, alphabet, ciphertext))]
/// Decrypts ciphertext using FF3-1 format-preserving encryption
///
/// Args:
///     cipher (str): Block cipher to drive FF3-1 with: "aes" or "sm4"
///     key (str): Hex-encoded key (16, 24, or 32 bytes after decoding for aes; 16 for sm4)
///     tweak (str): Hex-encoded tweak (exactly 7 bytes after decoding)
///     alphabet (str): String containing the valid characters
///     ciphertext (str): Text to decrypt, must contain only characters from alphabet
///
/// Returns:
///     str: The decrypted text
///
/// Raises:
///     ValueError: If inputs are invalid
fn ff3_1_decrypt(
    py: Python,
    cipher: &str,
    key: &str,
    tweak: &str,
    alphabet: &str,
    ciphertext: &str,
) -> PyResult<String> {
    py.allow_threads(|| {
        ff3_1::decrypt(cipher, key, tweak, alphabet, ciphertext).map_err(PyValueError::new_err)
    })
}

#[pymodule]
fn _rust_ffx_fpe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ff1_encrypt, m)?)?;
    m.add_function(wrap_pyfunction!(ff1_decrypt, m)?)?;
    m.add_function(wrap_pyfunction!(ff3_encrypt, m)?)?;
    m.add_function(wrap_pyfunction!(ff3_decrypt, m)?)?;
    m.add_function(wrap_pyfunction!(ff3_1_encrypt, m)?)?;
    m.add_function(wrap_pyfunction!(ff3_1_decrypt, m)?)?;
    Ok(())
}
