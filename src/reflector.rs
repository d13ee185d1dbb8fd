//! Reflector: fixed involutive wiring at the far end of the rotor bank.
//!
//! The reflector does not rotate. It maps each contact to its paired
//! contact, sending the signal back through the rotors left-to-right.

use crate::alphabet::ALPHABET_SIZE;

/// Historical reflector B wiring.
const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Fixed involutive permutation of the alphabet.
///
/// In the historical design every letter maps to a different partner
/// letter and the mapping is its own inverse; the engine uses the
/// supplied table as-is without enforcing either property.
pub struct Reflector {
    table: [u8; ALPHABET_SIZE],
}

impl Reflector {
    /// Creates the reflector with the fixed historical wiring.
    pub fn new() -> Self {
        let mut table = [0u8; ALPHABET_SIZE];
        for (contact, byte) in REFLECTOR_B.bytes().enumerate() {
            table[contact] = byte - b'A';
        }
        Reflector { table }
    }

    /// Maps a letter index through the reflector.
    ///
    /// One fixed-table lookup; no offset is involved.
    pub fn reflect(&self, input: usize) -> usize {
        self.table[input] as usize
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new()
    }
}
