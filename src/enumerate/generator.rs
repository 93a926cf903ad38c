//! Candidate generator

use super::Alphabet;

/// Infinite, length-ascending sequence of candidate strings.
///
/// Holds one digit counter per position; `next` emits the current digits and
/// then advances them with carry. When the leftmost position overflows, the
/// length grows by one and every counter resets to the first symbol.
#[derive(Debug, Clone)]
pub struct Candidates {
    alphabet: Alphabet,
    length: usize,
    digits: Vec<usize>,
}

impl Candidates {
    /// Start at the first candidate of length 1
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_length(alphabet, 1)
    }

    /// Start at the first candidate of the given length (minimum 1)
    pub fn with_length(alphabet: Alphabet, length: usize) -> Self {
        let length = length.max(1);
        Self {
            alphabet,
            length,
            digits: vec![0; length],
        }
    }

    /// Length of the next candidate to be produced
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn current(&self) -> String {
        let symbols = self.alphabet.symbols();
        self.digits.iter().map(|&d| symbols[d]).collect()
    }

    fn advance(&mut self) {
        let base = self.alphabet.base();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < base {
                return;
            }
            *digit = 0;
        }

        // Every position carried: this length is exhausted.
        self.length += 1;
        self.digits = vec![0; self.length];
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.current();
        self.advance();
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
