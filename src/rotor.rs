//! Rotor bank: wiring permutations, offset arithmetic, and stepping.
//!
//! Implements the core of the machine. Each rotor is a fixed permutation
//! of the alphabet behind a mutable rotational offset; the bank maps
//! signals through each rotor in both directions and advances the
//! offsets once per processed letter, including the double-step anomaly.

use tracing::trace;

use crate::alphabet::ALPHABET_SIZE;

/// Number of rotors in the bank.
pub const NUM_ROTORS: usize = 3;

/// Bank position of the right (fastest) rotor.
pub const RIGHT: usize = 0;
/// Bank position of the middle rotor.
pub const MIDDLE: usize = 1;
/// Bank position of the left (slowest) rotor.
pub const LEFT: usize = 2;

/// Historical Enigma I rotor wirings, bank positions right to left.
const WIRINGS: [&str; NUM_ROTORS] = [
    "EKMFLGDQVZNTOWYHXUSPAIBRCJ", // Rotor I
    "AJDKSIRUXBLHWTMCQGZNPYFVOE", // Rotor II
    "BDFHJLCPRTXVZNYEIWGAKMUSQO", // Rotor III
];

/// Turnover letters for rotors I, II, III.
const TURNOVERS: [char; NUM_ROTORS] = ['Q', 'E', 'V'];

/// A single substitution wheel: fixed internal wiring and turnover
/// position, mutable rotational offset in [0,26).
struct Rotor {
    wiring: [u8; ALPHABET_SIZE],
    inverse: [u8; ALPHABET_SIZE],
    turnover: u8,
    offset: u8,
}

impl Rotor {
    /// Builds a rotor from a 26-letter wiring string.
    ///
    /// The inverse permutation is precomputed here so that the backward
    /// path is a single lookup. A wiring that is not a bijection over
    /// the alphabet is an internal-consistency error, never a silent
    /// wrong answer.
    fn new(wiring_str: &str, turnover: char) -> Self {
        assert_eq!(
            wiring_str.len(),
            ALPHABET_SIZE,
            "rotor wiring must cover the full alphabet"
        );
        let mut wiring = [0u8; ALPHABET_SIZE];
        let mut inverse = [u8::MAX; ALPHABET_SIZE];
        for (contact, byte) in wiring_str.bytes().enumerate() {
            let mapped = byte - b'A';
            wiring[contact] = mapped;
            assert_eq!(
                inverse[mapped as usize],
                u8::MAX,
                "rotor wiring is not a permutation of the alphabet"
            );
            inverse[mapped as usize] = contact as u8;
        }
        Rotor {
            wiring,
            inverse,
            turnover: turnover as u8 - b'A',
            offset: 0,
        }
    }
}

/// Which rotors advanced during one stepping cycle.
///
/// Transient: produced by [`RotorBank::advance`] and discarded after the
/// character. `steps[position]` counts the advances that rotor made this
/// cycle: right and left step at most once, the middle rotor at most
/// twice (the double-step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    /// Per-position step counts, indexed by [`RIGHT`], [`MIDDLE`], [`LEFT`].
    pub steps: [u8; NUM_ROTORS],
}

/// Ordered bank of exactly three rotors, addressed right(0) / middle(1)
/// / left(2).
///
/// The wiring composition is fixed at construction; only the offsets
/// change at runtime.
pub struct RotorBank {
    rotors: [Rotor; NUM_ROTORS],
}

impl RotorBank {
    /// Creates the bank with the fixed historical wirings and all
    /// offsets at 0.
    pub fn new() -> Self {
        RotorBank {
            rotors: [
                Rotor::new(WIRINGS[RIGHT], TURNOVERS[RIGHT]),
                Rotor::new(WIRINGS[MIDDLE], TURNOVERS[MIDDLE]),
                Rotor::new(WIRINGS[LEFT], TURNOVERS[LEFT]),
            ],
        }
    }

    /// Maps a letter index through a rotor right-to-left under its
    /// current offset.
    ///
    /// The offset shifts which internal contact the signal enters; the
    /// wired output is shifted back by the same amount and normalized
    /// into [0,26).
    pub fn forward(&self, input: usize, position: usize) -> usize {
        let rotor = &self.rotors[position];
        let offset = rotor.offset as usize;
        let contact = (input + offset) % ALPHABET_SIZE;
        let mapped = rotor.wiring[contact] as usize;
        (mapped + ALPHABET_SIZE - offset) % ALPHABET_SIZE
    }

    /// Maps a letter index through a rotor left-to-right.
    ///
    /// The exact inverse of [`forward`](Self::forward) at the same
    /// offset: `backward(forward(x, r), r) == x` for every x and every
    /// offset.
    pub fn backward(&self, input: usize, position: usize) -> usize {
        let rotor = &self.rotors[position];
        let offset = rotor.offset as usize;
        let contact = (input + offset) % ALPHABET_SIZE;
        let mapped = rotor.inverse[contact] as usize;
        (mapped + ALPHABET_SIZE - offset) % ALPHABET_SIZE
    }

    /// Runs one stepping cycle and reports which rotors advanced.
    ///
    /// All turnover checks read the offsets captured before any advance
    /// in this cycle:
    ///
    /// 1. the right rotor always steps;
    /// 2. the middle rotor steps if the right rotor sat on its turnover;
    /// 3. if the middle rotor sat on its own turnover, the left rotor
    ///    steps and the middle rotor steps again, whether or not rule 2
    ///    already moved it (the double-step anomaly).
    pub fn advance(&mut self) -> StepRecord {
        let right_before = self.rotors[RIGHT].offset;
        let middle_before = self.rotors[MIDDLE].offset;
        let mut record = StepRecord {
            steps: [0; NUM_ROTORS],
        };

        self.step(RIGHT, &mut record);
        if right_before == self.rotors[RIGHT].turnover {
            self.step(MIDDLE, &mut record);
        }
        if middle_before == self.rotors[MIDDLE].turnover {
            self.step(LEFT, &mut record);
            self.step(MIDDLE, &mut record);
        }

        trace!(
            right = self.rotors[RIGHT].offset,
            middle = self.rotors[MIDDLE].offset,
            left = self.rotors[LEFT].offset,
            "stepping cycle complete"
        );
        record
    }

    /// Advances one rotor by a single position, wrapping modulo 26.
    fn step(&mut self, position: usize, record: &mut StepRecord) {
        let rotor = &mut self.rotors[position];
        rotor.offset = (rotor.offset + 1) % ALPHABET_SIZE as u8;
        record.steps[position] += 1;
    }

    /// Returns the current offset of the rotor at `position`.
    pub fn offset(&self, position: usize) -> usize {
        self.rotors[position].offset as usize
    }

    /// Sets the offset of the rotor at `position`, taken modulo 26.
    pub fn set_offset(&mut self, position: usize, offset: usize) {
        self.rotors[position].offset = (offset % ALPHABET_SIZE) as u8;
    }

    /// Returns all offsets to 0.
    pub fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.offset = 0;
        }
    }
}

impl Default for RotorBank {
    fn default() -> Self {
        Self::new()
    }
}
