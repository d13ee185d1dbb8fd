//! Rotor cipher machine simulation engine.
//!
//! rotorcrypt simulates a historical electromechanical rotor cipher
//! machine (the Enigma I): each letter passes through a configurable
//! override board and plugboard, three stepping rotors, and a reflector,
//! then back out through the rotors and boards in reverse. Rotor offsets
//! advance once per letter, so the machine produces a continuous
//! key-stream; decryption is the identical transform run from the same
//! starting configuration.
//!
//! # Architecture
//!
//! ```text
//! alphabet    (letter ↔ index codec — everything above works in indices)
//!     ↑
//! Plugboard   (symmetric swap layers — plugboard + override board)
//!     ↑
//! RotorBank   (three wired wheels — offset arithmetic, stepping, double-step)
//!     ↑
//! Reflector   (fixed involutive wiring)
//!     ↑
//! EnigmaMachine (composition root — owns all mutable state)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use rotorcrypt::EnigmaMachine;
//!
//! let mut encoder = EnigmaMachine::new();
//! encoder.configure_plugboard("A B C D");
//! encoder.set_rotor_positions('C', 'A', 'T');
//! let ciphertext = encoder.encrypt_message("HELLO, WORLD!");
//!
//! let mut decoder = EnigmaMachine::new();
//! decoder.configure_plugboard("A B C D");
//! decoder.set_rotor_positions('C', 'A', 'T');
//! assert_eq!(decoder.encrypt_message(&ciphertext), "HELLO, WORLD!");
//! ```
//!
//! The [`affine`] module provides a stateless classical affine cipher
//! over the same alphabet:
//!
//! ```
//! use rotorcrypt::affine;
//!
//! let ciphertext = affine::encrypt("HELLO", 5, 8).unwrap();
//! assert_eq!(affine::decrypt(&ciphertext, 5, 8).unwrap(), "HELLO");
//! ```

#![deny(clippy::all)]

pub mod affine;
pub mod alphabet;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

mod machine;

pub use error::RotorCryptError;
pub use machine::EnigmaMachine;
