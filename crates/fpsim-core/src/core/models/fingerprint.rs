use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FingerprintError {
    #[error("Fingerprint is empty")]
    Empty,
    #[error("Invalid character {character:?} at position {position} (expected '0' or '1')")]
    InvalidCharacter { position: usize, character: char },
}

/// A fixed-length bit vector encoding the structural features of a molecule.
///
/// The fingerprint keeps its raw textual form next to a packed word representation.
/// Equality is textual: two fingerprints are equal only when their bit strings are identical
/// character for character, which is what the exact-match counters rely on.
#[derive(Debug, Clone)]
pub struct Fingerprint {
    raw: String,
    words: Vec<u64>,
    ones: usize,
}

impl Fingerprint {
    /// Parses a fingerprint from a string of `'0'` and `'1'` characters.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::Empty`] for a zero-length string and
    /// [`FingerprintError::InvalidCharacter`] for the first character outside `{'0', '1'}`.
    pub fn parse(bits: &str) -> Result<Self, FingerprintError> {
        if bits.is_empty() {
            return Err(FingerprintError::Empty);
        }

        let mut words = vec![0u64; bits.len().div_ceil(WORD_BITS)];
        let mut ones = 0;

        for (position, character) in bits.chars().enumerate() {
            match character {
                '0' => {}
                '1' => {
                    words[position / WORD_BITS] |= 1u64 << (position % WORD_BITS);
                    ones += 1;
                }
                _ => {
                    return Err(FingerprintError::InvalidCharacter {
                        position,
                        character,
                    });
                }
            }
        }

        Ok(Self {
            raw: bits.to_string(),
            words,
            ones,
        })
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Number of set bits, `|A|` in the Tanimoto formula.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.ones
    }

    #[inline]
    pub fn is_all_zero(&self) -> bool {
        self.ones == 0
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Counts positions where both fingerprints have a set bit.
    ///
    /// Only the common prefix is considered when the lengths differ.
    pub fn intersection_count(&self, other: &Fingerprint) -> usize {
        let common = self.len().min(other.len());
        let full_words = common / WORD_BITS;
        let remainder = common % WORD_BITS;

        let mut count: usize = self.words[..full_words]
            .iter()
            .zip(&other.words[..full_words])
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum();

        if remainder > 0 {
            let mask = (1u64 << remainder) - 1;
            count += (self.words[full_words] & other.words[full_words] & mask).count_ones() as usize;
        }

        count
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Fingerprint {}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
