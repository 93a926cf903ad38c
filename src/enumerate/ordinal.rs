//! Ordinal index codec
//!
//! A candidate is read as a numeral in base `|alphabet|`, rightmost symbol
//! least significant. No offset is added for shorter lengths, so the index is
//! the candidate's rank only among candidates of its own length.

use super::Alphabet;
use crate::error::{BrutalForceError, Result};

/// Value of `candidate` read as a fixed-base numeral over `alphabet`.
///
/// Fails with `UnknownSymbol` when a symbol is missing from the alphabet and
/// with `IndexOverflow` when the value does not fit in a `u128`.
pub fn encode(candidate: &str, alphabet: &Alphabet) -> Result<u128> {
    let base = alphabet.base() as u128;
    let length = candidate.chars().count();
    let mut index: u128 = 0;

    for (position, symbol) in candidate.chars().enumerate() {
        let digit = alphabet
            .position(symbol)
            .ok_or_else(|| BrutalForceError::unknown_symbol(symbol, position))?;

        index = index
            .checked_mul(base)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or_else(|| BrutalForceError::index_overflow(length))?;
    }

    Ok(index)
}

/// Candidate of the given length whose ordinal index is `index`, or `None`
/// if the index is out of range for that length.
pub fn candidate_at(index: u128, length: usize, alphabet: &Alphabet) -> Option<String> {
    if let Some(total) = alphabet.total_combinations(length) {
        if index >= total {
            return None;
        }
    }

    let symbols = alphabet.symbols();
    let base = alphabet.base() as u128;
    let mut result = vec![symbols[0]; length];
    let mut n = index;

    for slot in result.iter_mut().rev() {
        *slot = symbols[(n % base) as usize];
        n /= base;
    }

    Some(result.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::AlphabetPreset;

    #[test]
    fn test_encode_decimal() {
        let digits = Alphabet::preset(AlphabetPreset::Digits);
        assert_eq!(encode("42", &digits), Ok(42));
        assert_eq!(encode("007", &digits), Ok(7));
        assert_eq!(encode("", &digits), Ok(0));
    }

    #[test]
    fn test_encode_ignores_length_epoch() {
        let lower = Alphabet::preset(AlphabetPreset::Lower);
        assert_eq!(encode("a", &lower), Ok(0));
        assert_eq!(encode("aaaa", &lower), Ok(0));
        assert_eq!(encode("ba", &lower), Ok(26));
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let digits = Alphabet::preset(AlphabetPreset::Digits);
        assert_eq!(
            encode("4x2", &digits),
            Err(BrutalForceError::unknown_symbol('x', 1))
        );
    }

    #[test]
    fn test_encode_overflow() {
        let full = Alphabet::default();
        let long = "?".repeat(40);
        assert_eq!(encode(&long, &full), Err(BrutalForceError::index_overflow(40)));
    }

    #[test]
    fn test_bijection_for_fixed_length() {
        let alphabet = Alphabet::new("abc").unwrap();
        let length = 4;
        let total = alphabet.total_combinations(length).unwrap();

        for index in 0..total {
            let candidate = candidate_at(index, length, &alphabet).unwrap();

            // Decode by hand via repeated division.
            let mut n = index;
            let mut digits = Vec::new();
            for _ in 0..length {
                digits.push((n % 3) as usize);
                n /= 3;
            }
            digits.reverse();
            let expected: String = digits.iter().map(|&d| alphabet.symbols()[d]).collect();

            assert_eq!(candidate, expected);
            assert_eq!(encode(&candidate, &alphabet), Ok(index));
        }
        assert_eq!(candidate_at(total, length, &alphabet), None);
    }

    #[test]
    fn test_candidate_at_matches_generator_order() {
        let alphabet = Alphabet::preset(AlphabetPreset::Digits);
        let gen = crate::enumerate::Candidates::with_length(alphabet.clone(), 2);
        for (index, candidate) in gen.take(100).enumerate() {
            assert_eq!(candidate_at(index as u128, 2, &alphabet), Some(candidate));
        }
    }
}
