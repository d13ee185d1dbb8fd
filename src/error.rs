//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
///
/// The rotor machine itself surfaces no recoverable errors: malformed
/// pairing text degrades silently (bad pairs are skipped) and
/// non-alphabetic message characters pass through by contract. The only
/// `Result`-carried error comes from the affine cipher's key validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// Affine key `a` shares a factor with the alphabet size.
    #[error("key 'a' = {a} must be coprime with 26")]
    KeyNotCoprime {
        /// The rejected key value as supplied by the caller.
        a: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_not_coprime() {
        let err = RotorCryptError::KeyNotCoprime { a: 13 };
        assert_eq!(format!("{}", err), "key 'a' = 13 must be coprime with 26");
    }

    #[test]
    fn test_display_negative_key() {
        let err = RotorCryptError::KeyNotCoprime { a: -4 };
        assert_eq!(format!("{}", err), "key 'a' = -4 must be coprime with 26");
    }

    #[test]
    fn test_error_equality_and_clone() {
        let err = RotorCryptError::KeyNotCoprime { a: 2 };
        assert_eq!(err, err.clone());
        assert_ne!(err, RotorCryptError::KeyNotCoprime { a: 4 });
    }
}
