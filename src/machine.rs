//! EnigmaMachine: composition root of the rotor cipher engine.
//!
//! Owns all mutable machine state (rotor offsets, plugboard, override
//! board) and drives the full signal path once per alphabetic character.

use tracing::debug;

use crate::alphabet;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{RotorBank, LEFT, MIDDLE, RIGHT};

/// Rotor cipher machine with three stepping rotors, a reflector, and two
/// independently configurable substitution boards.
///
/// # Architecture
///
/// Each alphabetic character first triggers one stepping cycle, then the
/// signal passes:
///
/// ```text
/// override board → plugboard → rotors (right, middle, left)
///     → reflector → rotors (left, middle, right) → plugboard → override board
/// ```
///
/// Rotor offsets persist and advance between calls, modeling the real
/// machine's continuous key-stream: encrypting the same text twice does
/// not produce the same output. Decryption is the same transform run
/// from the same starting offsets and board configuration.
pub struct EnigmaMachine {
    rotors: RotorBank,
    reflector: Reflector,
    plugboard: Plugboard,
    override_board: Plugboard,
}

impl Default for EnigmaMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl EnigmaMachine {
    /// Creates a machine in its startup configuration: rotor offsets
    /// 0/0/0 and both boards at identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let machine = EnigmaMachine::new();
    /// assert_eq!(machine.rotor_status(), ('A', 'A', 'A'));
    /// ```
    pub fn new() -> Self {
        EnigmaMachine {
            rotors: RotorBank::new(),
            reflector: Reflector::new(),
            plugboard: Plugboard::new(),
            override_board: Plugboard::new(),
        }
    }

    /// Sets the rotor offsets directly from three letters.
    ///
    /// Case-insensitive; no validation beyond the codec's case handling.
    ///
    /// # Parameters
    /// - `left`, `middle`, `right`: starting letters for the three rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::new();
    /// machine.set_rotor_positions('B', 'E', 'D');
    /// assert_eq!(machine.rotor_status(), ('B', 'E', 'D'));
    /// ```
    pub fn set_rotor_positions(&mut self, left: char, middle: char, right: char) {
        self.rotors.set_offset(LEFT, alphabet::to_index(left));
        self.rotors.set_offset(MIDDLE, alphabet::to_index(middle));
        self.rotors.set_offset(RIGHT, alphabet::to_index(right));
        debug!(%left, %middle, %right, "rotor positions set");
    }

    /// Reconfigures the plugboard from a pairing list.
    ///
    /// Format: single letters separated by whitespace, taken in
    /// consecutive pairs (`"A B C D"` swaps A↔B and C↔D). Malformed
    /// pairs are skipped silently; the remaining pairs still apply.
    pub fn configure_plugboard(&mut self, pairs: &str) {
        self.plugboard.configure(pairs);
        debug!(pairs, "plugboard configured");
    }

    /// Reconfigures the override board from a pairing list.
    ///
    /// Same format as [`configure_plugboard`](Self::configure_plugboard),
    /// stored independently: the override board is the outermost swap
    /// layer and can be changed at any time without touching the
    /// plugboard.
    pub fn configure_override_board(&mut self, pairs: &str) {
        self.override_board.configure(pairs);
        debug!(pairs, "override board configured");
    }

    /// Encrypts (or, symmetrically, decrypts) a single character.
    ///
    /// Non-alphabetic characters are returned unchanged and do not step
    /// the rotors. Alphabetic characters are uppercased, trigger one
    /// stepping cycle before any wiring lookup, and travel the full
    /// signal path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::new();
    /// assert_eq!(machine.encrypt_char('A'), 'F');
    /// assert_eq!(machine.encrypt_char('!'), '!');
    /// ```
    pub fn encrypt_char(&mut self, c: char) -> char {
        if !c.is_ascii_alphabetic() {
            return c;
        }
        // Step before encrypting, as the real machine did.
        self.rotors.advance();

        let mut index = alphabet::to_index(c);
        index = self.override_board.swap(index);
        index = self.plugboard.swap(index);
        index = self.rotors.forward(index, RIGHT);
        index = self.rotors.forward(index, MIDDLE);
        index = self.rotors.forward(index, LEFT);
        index = self.reflector.reflect(index);
        index = self.rotors.backward(index, LEFT);
        index = self.rotors.backward(index, MIDDLE);
        index = self.rotors.backward(index, RIGHT);
        index = self.plugboard.swap(index);
        index = self.override_board.swap(index);
        alphabet::to_letter(index)
    }

    /// Encrypts a message character by character.
    ///
    /// Order and length are preserved exactly: every character maps 1:1,
    /// with non-alphabetic characters passed through unchanged. The
    /// rotor offsets advance once per alphabetic character, so calling
    /// this twice on the same input produces different output.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let mut encoder = EnigmaMachine::new();
    /// assert_eq!(encoder.encrypt_message("AAAAA"), "FTZMG");
    /// ```
    ///
    /// Decryption is the identical transform from the same start state:
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let mut encoder = EnigmaMachine::new();
    /// let ciphertext = encoder.encrypt_message("HELLOWORLD");
    ///
    /// let mut decoder = EnigmaMachine::new();
    /// assert_eq!(decoder.encrypt_message(&ciphertext), "HELLOWORLD");
    /// ```
    pub fn encrypt_message(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Returns the current rotor offsets as letters (left, middle,
    /// right). Read-only; no side effect.
    pub fn rotor_status(&self) -> (char, char, char) {
        (
            alphabet::to_letter(self.rotors.offset(LEFT)),
            alphabet::to_letter(self.rotors.offset(MIDDLE)),
            alphabet::to_letter(self.rotors.offset(RIGHT)),
        )
    }

    /// Returns the machine to its startup configuration: offsets 0/0/0,
    /// both boards at identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::new();
    /// machine.configure_plugboard("A B");
    /// let first = machine.encrypt_message("ENIGMA");
    ///
    /// machine.reset();
    /// machine.configure_plugboard("A B");
    /// assert_eq!(machine.encrypt_message("ENIGMA"), first);
    /// ```
    pub fn reset(&mut self) {
        self.rotors.reset();
        self.plugboard.reset();
        self.override_board.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_known_vector() {
        let mut machine = EnigmaMachine::new();
        assert_eq!(machine.encrypt_char('A'), 'F');
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let mut upper = EnigmaMachine::new();
        let mut lower = EnigmaMachine::new();
        assert_eq!(upper.encrypt_message("HELLO"), lower.encrypt_message("hello"));
    }

    #[test]
    fn test_non_alphabetic_passes_through_without_stepping() {
        let mut machine = EnigmaMachine::new();
        for c in ['!', ' ', '7', ',', '\n'] {
            assert_eq!(machine.encrypt_char(c), c, "char {:?} must pass through", c);
        }
        assert_eq!(
            machine.rotor_status(),
            ('A', 'A', 'A'),
            "offsets must not move for non-alphabetic input"
        );
    }

    #[test]
    fn test_state_advances_between_calls() {
        let mut machine = EnigmaMachine::new();
        let first = machine.encrypt_char('A');
        let second = machine.encrypt_char('A');
        assert_ne!(first, second, "offsets advance, so outputs differ");
    }

    #[test]
    fn test_self_reciprocity_single_letter() {
        let mut machine = EnigmaMachine::new();
        let ciphertext = machine.encrypt_char('G');
        machine.set_rotor_positions('A', 'A', 'A');
        assert_eq!(machine.encrypt_char(ciphertext), 'G');
    }

    #[test]
    fn test_message_length_is_preserved() {
        let mut machine = EnigmaMachine::new();
        let input = "Attack at dawn! 1940.";
        let output = machine.encrypt_message(input);
        assert_eq!(output.chars().count(), input.chars().count());
    }

    #[test]
    fn test_override_board_wraps_plugboard() {
        // Override maps A->B at entry; plugboard then maps B->C. The
        // letter entering the rotors is C, the same as pressing B on a
        // machine with only the plugboard configured.
        let mut layered = EnigmaMachine::new();
        layered.configure_override_board("A B");
        layered.configure_plugboard("B C");

        let mut plug_only = EnigmaMachine::new();
        plug_only.configure_plugboard("B C");

        assert_eq!(layered.encrypt_char('A'), plug_only.encrypt_char('B'));
    }

    #[test]
    fn test_boards_are_independent() {
        // Reconfiguring the override board must not disturb the plugboard.
        let mut machine = EnigmaMachine::new();
        machine.configure_plugboard("A B");
        machine.configure_override_board("C D");
        machine.configure_override_board("E F");

        let mut reference = EnigmaMachine::new();
        reference.configure_plugboard("A B");
        reference.configure_override_board("E F");
        assert_eq!(
            machine.encrypt_message("XYZZY"),
            reference.encrypt_message("XYZZY")
        );
    }

    #[test]
    fn test_rotor_status_reports_left_middle_right() {
        let mut machine = EnigmaMachine::new();
        machine.set_rotor_positions('X', 'Y', 'Z');
        assert_eq!(machine.rotor_status(), ('X', 'Y', 'Z'));
    }

    #[test]
    fn test_reset_restores_startup_configuration() {
        let mut machine = EnigmaMachine::new();
        machine.configure_plugboard("A B C D");
        machine.configure_override_board("E F");
        machine.set_rotor_positions('Q', 'E', 'V');
        machine.reset();

        let mut fresh = EnigmaMachine::new();
        assert_eq!(machine.rotor_status(), ('A', 'A', 'A'));
        assert_eq!(
            machine.encrypt_message("PLAINTEXT"),
            fresh.encrypt_message("PLAINTEXT")
        );
    }
}
