//! Letter-to-digit correspondence for a single permutation trial.

use thiserror::Error;

/// Number of uppercase Latin letters the map covers.
const ALPHABET_LENGTH: usize = 26;

/// Errors raised when building a [`CorrespondenceMap`] from mismatched or
/// malformed inputs. These indicate misuse of the builder, not a property of
/// any particular puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrespondenceError {
    #[error("source and destination must be of the same length ({src} vs {dst})")]
    LengthMismatch { src: usize, dst: usize },
    #[error("source characters must be uppercase Latin letters, found '{0}'")]
    InvalidLetter(char),
    #[error("destination characters must be decimal digits, found '{0}'")]
    InvalidDigit(char),
}

/// A constant-time lookup from Latin letter to decimal digit.
///
/// Backed by a fixed array of 26 digits indexed by `letter - 'A'`; unmapped
/// letters read as 0. Decimal digit characters map to their own numeric
/// value, so generic lookups over mixed letter/digit text need no special
/// casing. The map is a cheap value type, built fresh for every permutation
/// trial and discarded afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrespondenceMap {
    digits: [u8; ALPHABET_LENGTH],
}

impl CorrespondenceMap {
    /// Builds a map by assigning to each letter of `src` the digit character
    /// at the same position in `dst`.
    ///
    /// # Errors
    ///
    /// Returns an error when the inputs differ in length, when `src`
    /// contains a character that is not an uppercase Latin letter, or when
    /// `dst` contains a character that is not a decimal digit.
    pub fn build(src: &str, dst: &str) -> Result<Self, CorrespondenceError> {
        let src_length = src.chars().count();
        let dst_length = dst.chars().count();
        if src_length != dst_length {
            return Err(CorrespondenceError::LengthMismatch {
                src: src_length,
                dst: dst_length,
            });
        }

        let mut digits = [0u8; ALPHABET_LENGTH];
        for (letter, digit) in src.chars().zip(dst.chars()) {
            if !letter.is_ascii_uppercase() {
                return Err(CorrespondenceError::InvalidLetter(letter));
            }
            if !digit.is_ascii_digit() {
                return Err(CorrespondenceError::InvalidDigit(digit));
            }
            digits[(letter as u8 - b'A') as usize] = digit as u8 - b'0';
        }

        Ok(Self { digits })
    }

    /// Looks up the digit assigned to `ch`.
    ///
    /// Digit characters return their own value; letters read the table.
    /// Anything else is outside the map's domain.
    pub fn get(&self, ch: char) -> u8 {
        debug_assert!(
            ch.is_ascii_digit() || ch.is_ascii_uppercase(),
            "index must be a decimal digit or a Latin letter",
        );
        match ch {
            '0'..='9' => ch as u8 - b'0',
            'A'..='Z' => self.digits[(ch as u8 - b'A') as usize],
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CorrespondenceError, CorrespondenceMap};

    #[test]
    fn maps_letters_positionally() {
        let map = CorrespondenceMap::build("TAXI", "1729").expect("valid correspondence");
        assert_eq!(map.get('T'), 1);
        assert_eq!(map.get('A'), 7);
        assert_eq!(map.get('X'), 2);
        assert_eq!(map.get('I'), 9);
    }

    #[test]
    fn unmapped_letters_read_as_zero() {
        let map = CorrespondenceMap::build("TAXI", "1729").expect("valid correspondence");
        for ch in ('A'..='Z').filter(|ch| !"TAXI".contains(*ch)) {
            assert_eq!(map.get(ch), 0, "letter {} should be unmapped", ch);
        }
    }

    #[test]
    fn digit_characters_map_to_themselves() {
        let map = CorrespondenceMap::default();
        for (value, ch) in ('0'..='9').enumerate() {
            assert_eq!(map.get(ch), value as u8);
        }
    }

    #[test]
    fn rejects_length_mismatch() {
        assert_eq!(
            CorrespondenceMap::build("ABC", "12"),
            Err(CorrespondenceError::LengthMismatch { src: 3, dst: 2 }),
        );
    }

    #[test]
    fn rejects_non_letter_source() {
        assert_eq!(
            CorrespondenceMap::build("AbC", "123"),
            Err(CorrespondenceError::InvalidLetter('b')),
        );
    }

    #[test]
    fn rejects_non_digit_destination() {
        assert_eq!(
            CorrespondenceMap::build("ABC", "12X"),
            Err(CorrespondenceError::InvalidDigit('X')),
        );
    }

    #[test]
    fn later_assignments_win_for_repeated_letters() {
        let map = CorrespondenceMap::build("AA", "12").expect("valid correspondence");
        assert_eq!(map.get('A'), 2);
    }
}
