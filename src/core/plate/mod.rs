//! # Plate Module
//!
//! Indian license plate helpers: format validation, random plate
//! generation, and a simulation that measures how the scorer separates
//! misread plates from unrelated strings.
//!
//! ## Plate Format
//! `MH12AB1234`: two-letter state code, two-digit district, two-letter
//! series, four-digit number.

mod simulation;

pub use simulation::{
    CaseDetail, Simulation, SimulationConfig, SimulationReport, SuiteStats,
};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::OnceLock;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const NOISE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Length range of generated invalid plates
pub const INVALID_LENGTH: std::ops::RangeInclusive<usize> = 5..=12;

fn plate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)[A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{4}$").expect("plate pattern is valid")
    })
}

/// Check a string against the plate format. Case-insensitive.
pub fn is_valid_plate(s: &str) -> bool {
    plate_pattern().is_match(s.trim())
}

/// Generates random plates for simulations and tests
pub struct PlateGenerator {
    rng: StdRng,
}

impl PlateGenerator {
    /// Generator seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, alphabet: &[u8], count: usize, out: &mut String) {
        for _ in 0..count {
            let index = self.rng.random_range(0..alphabet.len());
            out.push(char::from(alphabet[index]));
        }
    }

    /// A plate in the valid format, e.g. `MH12AB1234`
    pub fn valid_plate(&mut self) -> String {
        let mut plate = String::with_capacity(10);
        self.pick(UPPERCASE, 2, &mut plate);
        self.pick(DIGITS, 2, &mut plate);
        self.pick(UPPERCASE, 2, &mut plate);
        self.pick(DIGITS, 4, &mut plate);
        plate
    }

    /// A random string of letters, digits and symbols, 5-12 characters long
    pub fn invalid_plate(&mut self) -> String {
        let length = self.rng.random_range(INVALID_LENGTH);
        let mut plate = String::with_capacity(length);
        self.pick(NOISE, length, &mut plate);
        plate
    }

    /// Copy of `plate` with its last character replaced by a random letter or
    /// digit (possibly the same one). An empty plate gains one character.
    pub fn with_noisy_tail(&mut self, plate: &str) -> String {
        let mut noisy: String = plate.to_string();
        noisy.pop();
        let alphabet = if self.rng.random_bool(26.0 / 36.0) {
            UPPERCASE
        } else {
            DIGITS
        };
        self.pick(alphabet, 1, &mut noisy);
        noisy
    }
}

impl Default for PlateGenerator {
    fn default() -> Self {
        Self::new()
    }
}
