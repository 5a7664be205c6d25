use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// The fixed ordered alphabet used for short codes.
///
/// 66 symbols: lowercase a-z, uppercase A-Z, digits 0-9, then the four
/// unreserved URL characters `-`, `.`, `_`, `~`.
pub const ALPHABET: &[u8; 66] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~";

/// A short code produced by base-66 positional encoding of a numeric seed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCodeBase66(SmolStr);

impl ShortCodeBase66 {
    /// Encodes the given seed as a base-66 string over [`ALPHABET`],
    /// most-significant digit first.
    ///
    /// A seed of 0 encodes to the single character at alphabet index 0
    /// (`"a"`); the conversion never yields an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipline_core::base66::ShortCodeBase66;
    ///
    /// assert_eq!(ShortCodeBase66::encode(0).as_str(), "a");
    /// assert_eq!(ShortCodeBase66::encode(66).as_str(), "ba");
    /// ```
    pub fn encode(seed: u64) -> Self {
        let base = ALPHABET.len() as u64;

        if seed == 0 {
            return Self(SmolStr::new(char::from(ALPHABET[0]).to_string()));
        }

        let mut digits = Vec::new();
        let mut remaining = seed;
        while remaining > 0 {
            digits.push(ALPHABET[(remaining % base) as usize]);
            remaining /= base;
        }

        // Digits are collected least-significant first.
        let encoded: SmolStr = digits.iter().rev().map(|&b| char::from(b)).collect();
        Self(encoded)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if every character of `s` belongs to [`ALPHABET`].
pub fn is_alphabet(s: &str) -> bool {
    s.bytes().all(|b| ALPHABET.contains(&b))
}

impl std::fmt::Debug for ShortCodeBase66 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCodeBase66").field(&self.0).finish()
    }
}

impl Display for ShortCodeBase66 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortCodeBase66 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCodeBase66 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        if !is_alphabet(&s) || s.is_empty() {
            return Err(serde::de::Error::custom(format!(
                "not a valid base-66 short code: '{}'",
                s
            )));
        }
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of `encode`, used only to cross-check the conversion.
    fn decode(code: &str) -> u64 {
        code.bytes().fold(0u64, |acc, b| {
            let index = ALPHABET.iter().position(|&a| a == b).unwrap() as u64;
            acc * ALPHABET.len() as u64 + index
        })
    }

    #[test]
    fn zero_seed_encodes_to_first_symbol() {
        assert_eq!(ShortCodeBase66::encode(0).as_str(), "a");
    }

    #[test]
    fn single_digit_seeds() {
        assert_eq!(ShortCodeBase66::encode(1).as_str(), "b");
        assert_eq!(ShortCodeBase66::encode(25).as_str(), "z");
        assert_eq!(ShortCodeBase66::encode(26).as_str(), "A");
        assert_eq!(ShortCodeBase66::encode(52).as_str(), "0");
        assert_eq!(ShortCodeBase66::encode(62).as_str(), "-");
        assert_eq!(ShortCodeBase66::encode(65).as_str(), "~");
    }

    #[test]
    fn base_boundary_rolls_over() {
        assert_eq!(ShortCodeBase66::encode(66).as_str(), "ba");
        assert_eq!(ShortCodeBase66::encode(67).as_str(), "bb");
        assert_eq!(ShortCodeBase66::encode(66 * 66).as_str(), "baa");
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(
            ShortCodeBase66::encode(9_876_543_210),
            ShortCodeBase66::encode(9_876_543_210)
        );
    }

    #[test]
    fn output_stays_within_alphabet() {
        for seed in [0, 1, 65, 66, 4_383, 123_456_789, 9_999_999_999] {
            let code = ShortCodeBase66::encode(seed);
            assert!(!code.as_str().is_empty());
            assert!(is_alphabet(code.as_str()), "seed {} -> '{}'", seed, code);
        }
    }

    #[test]
    fn encode_round_trips_through_decode() {
        for seed in [0, 1, 66, 1_000, 9_999_999_999] {
            let code = ShortCodeBase66::encode(seed);
            assert_eq!(decode(code.as_str()), seed);
        }
    }

    #[test]
    fn max_ten_digit_seed_stays_short() {
        // 66^6 > 10^10, so any seed in range fits in six characters.
        let code = ShortCodeBase66::encode(9_999_999_999);
        assert!(code.as_str().len() <= 6);
    }

    #[test]
    fn is_alphabet_rejects_foreign_characters() {
        assert!(is_alphabet("abcXYZ09-._~"));
        assert!(!is_alphabet("abc def"));
        assert!(!is_alphabet("abc/def"));
        assert!(!is_alphabet("abc+def"));
    }
}
