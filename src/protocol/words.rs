//! Deterministic three-word mnemonic for coordinates.
//!
//! Hashes the canonical (rounded) coordinate strings, then indexes the word
//! list with three 8-bit windows of the digest. Using the canonical strings
//! means two floats that agree to six decimals always share a mnemonic.
//! One-way by design: there is no reverse mapping.

use super::checksum::fnv1a_32;
use super::error::ProtocolError;
use super::format::{format_fixed, LAT_LNG_DECIMALS};

/// Reference word list, 46 entries. Order is part of the output contract.
pub const DEFAULT_WORDS: [&str; 46] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    "india", "juliet", "kilo", "lima", "mike", "november", "oscar", "papa",
    "quebec", "romeo", "sierra", "tango", "uniform", "victor", "whiskey", "xray",
    "yankee", "zulu", "anchor", "beacon", "cargo", "depot", "express", "freight",
    "gantry", "harbor", "jetty", "keel", "ledger", "manifest", "nexus", "orbit",
    "pallet", "quay", "relay", "summit", "transit", "vault",
];

/// Immutable word list for mnemonic generation.
///
/// Injected rather than read from module state so tests can substitute an
/// alternate list.
#[derive(Debug, Clone, Copy)]
pub struct WordLexicon {
    words: &'static [&'static str],
}

impl Default for WordLexicon {
    fn default() -> Self {
        Self {
            words: &DEFAULT_WORDS,
        }
    }
}

impl WordLexicon {
    pub fn new(words: &'static [&'static str]) -> Self {
        assert!(!words.is_empty(), "word lexicon must not be empty");
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Derive the `w1.w2.w3` mnemonic for a coordinate pair.
    pub fn three_words(&self, lat: f64, lng: f64) -> String {
        let key = format!(
            "{}|{}",
            format_fixed(lat, LAT_LNG_DECIMALS),
            format_fixed(lng, LAT_LNG_DECIMALS),
        );
        let digest = fnv1a_32(key.as_bytes());

        // Bit windows [0,8), [8,16), [16,24), each mod list size.
        let pick = |window: u32| self.words[((window & 0xff) as usize) % self.words.len()];
        format!(
            "{}.{}.{}",
            pick(digest),
            pick(digest >> 8),
            pick(digest >> 16),
        )
    }

    /// Reverse lookup is not defined for the mnemonic scheme.
    pub fn words_to_coords(&self, _words: &str) -> Result<(f64, f64), ProtocolError> {
        Err(ProtocolError::NotSupported)
    }
}
