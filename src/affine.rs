//! Affine cipher over the 26-letter alphabet.
//!
//! A stateless classical companion to the rotor machine: encryption maps
//! each letter index through `(a·x + b) mod 26` and decryption through
//! `a⁻¹·(y − b) mod 26`, where `a` must be coprime with 26 for the map
//! to be invertible. Non-alphabetic characters pass through unchanged
//! and output is uppercase, the same text contract as the engine.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::RotorCryptError;

const MODULUS: i64 = ALPHABET_SIZE as i64;

/// Encrypts text with the affine key pair `(a, b)`.
///
/// Keys are taken modulo 26; negative values are allowed.
///
/// # Errors
/// Returns [`RotorCryptError::KeyNotCoprime`] if `a` is not coprime
/// with 26.
///
/// # Examples
///
/// ```
/// use rotorcrypt::affine;
///
/// assert_eq!(affine::encrypt("HELLO", 5, 8).unwrap(), "RCLLA");
/// assert!(affine::encrypt("HELLO", 4, 8).is_err());
/// ```
pub fn encrypt(text: &str, a: i64, b: i64) -> Result<String, RotorCryptError> {
    let (mul, shift) = normalize_key(a, b)?;
    Ok(text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let x = alphabet::to_index(c) as i64;
                alphabet::to_letter(((mul * x + shift) % MODULUS) as usize)
            } else {
                c
            }
        })
        .collect())
}

/// Decrypts text encrypted with the affine key pair `(a, b)`.
///
/// # Errors
/// Returns [`RotorCryptError::KeyNotCoprime`] if `a` is not coprime
/// with 26.
///
/// # Examples
///
/// ```
/// use rotorcrypt::affine;
///
/// let ciphertext = affine::encrypt("ATTACK AT DAWN", 7, 3).unwrap();
/// assert_eq!(affine::decrypt(&ciphertext, 7, 3).unwrap(), "ATTACK AT DAWN");
/// ```
pub fn decrypt(text: &str, a: i64, b: i64) -> Result<String, RotorCryptError> {
    let (mul, shift) = normalize_key(a, b)?;
    let inverse = mod_inverse(mul);
    Ok(text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let y = alphabet::to_index(c) as i64;
                alphabet::to_letter((inverse * (y - shift)).rem_euclid(MODULUS) as usize)
            } else {
                c
            }
        })
        .collect())
}

/// Reduces the key pair modulo 26 and validates the multiplier.
fn normalize_key(a: i64, b: i64) -> Result<(i64, i64), RotorCryptError> {
    let mul = a.rem_euclid(MODULUS);
    if gcd(mul, MODULUS) != 1 {
        return Err(RotorCryptError::KeyNotCoprime { a });
    }
    Ok((mul, b.rem_euclid(MODULUS)))
}

/// Finds the modular inverse of `mul` in [1,26) by search.
///
/// Only called after the coprimality check, so an inverse always exists;
/// not finding one is an internal-consistency error.
fn mod_inverse(mul: i64) -> i64 {
    (1..MODULUS)
        .find(|x| (mul * x) % MODULUS == 1)
        .expect("no modular inverse for a key coprime with 26")
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
