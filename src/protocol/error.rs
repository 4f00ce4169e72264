//! Error taxonomy for the L1/L2 spatial identifier codec.
//!
//! Every variant is a permanent, structural condition; malformed input never
//! becomes valid by retrying. Checksum mismatch is deliberately *not* here:
//! it is a data condition reported on a successful parse (see
//! [`ParsedL1::checksum_valid`](super::l1::ParsedL1)).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProtocolError {
    #[error("invalid L1 prefix, expected 'coords:l1:v1:'")]
    InvalidPrefix,

    #[error("missing checksum separator '*'")]
    MissingChecksumSeparator,

    #[error("malformed checksum '{0}': expected 8 hex characters")]
    MalformedChecksum(String),

    #[error("expected 3 coordinate fields (lat,lng,alt), found {0}")]
    WrongFieldCount(usize),

    #[error("non-numeric coordinate field '{0}'")]
    NonNumericField(String),

    #[error("{field} {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("L2 handle must start with '@'")]
    MissingAtPrefix,

    #[error("L2 handle must have at least tenant/path")]
    IncompleteHandle,

    #[error("reverse word lookup is not supported")]
    NotSupported,
}
