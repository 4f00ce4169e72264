//! Coords protocol core: the L1/L2 spatial identifier codec.
//!
//! Everything in this module is a pure function over its arguments with no
//! shared mutable state and no I/O. Safe to call from any number of
//! concurrent tasks.
//!
//! - [`checksum`]: FNV-1a 32-bit engine and hex rendering
//! - [`format`]: canonical fixed-precision coordinate formatting
//! - [`l1`]: checksummed L1 identifier generate/parse
//! - [`l2`]: hierarchical L2 handle generate/parse
//! - [`words`]: one-way three-word mnemonic
//! - [`vectors`]: conformance vector suite

pub mod checksum;
pub mod error;
pub mod format;
pub mod l1;
pub mod l2;
pub mod vectors;
pub mod words;

pub use checksum::{checksum_hex, fnv1a_32};
pub use error::ProtocolError;
pub use format::{build_canonical_payload, format_fixed, ALT_DECIMALS, LAT_LNG_DECIMALS};
pub use l1::{generate_checksum, generate_l1, parse_l1, ParsedL1, L1_PREFIX};
pub use l2::{generate_l2_handle, parse_l2_handle, ParsedL2};
pub use vectors::{run_test_vectors, spec_compliant, SpecVector, VectorResult, SPEC_VECTORS};
pub use words::{WordLexicon, DEFAULT_WORDS};
