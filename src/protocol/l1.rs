//! L1 immutable spatial identifier codec.
//!
//! Wire format: `coords:l1:v1:<lat:6>,<lng:6>,<alt:2>*<checksum>` where the
//! checksum is the FNV-1a digest of the pipe-joined canonical payload of the
//! same (rounded) values.
//!
//! Parsing is a fixed pipeline with one distinct error per structural step.
//! A checksum mismatch is *not* a parse failure: the parse succeeds and the
//! caller decides, via [`ParsedL1::checksum_valid`], whether to trust a
//! tampered or corrupted identifier.

use serde::Serialize;

use super::checksum::{checksum_hex, fnv1a_32};
use super::error::ProtocolError;
use super::format::{build_canonical_payload, format_fixed, ALT_DECIMALS, LAT_LNG_DECIMALS};

pub const L1_PREFIX: &str = "coords:l1:v1:";

pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
pub const LNG_MIN: f64 = -180.0;
pub const LNG_MAX: f64 = 180.0;

const CHECKSUM_LEN: usize = 8;

/// Successful parse of an L1 string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedL1 {
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
    /// Checksum as provided, lowercased.
    pub checksum: String,
    /// Checksum recomputed from the parsed triple.
    pub expected_checksum: String,
    pub checksum_valid: bool,
    pub canonical_payload: String,
}

/// FNV-1a checksum over the canonical payload of `(lat, lng, alt)`, in wire
/// (lowercase 8-hex) form.
pub fn generate_checksum(lat: f64, lng: f64, alt: f64) -> String {
    checksum_hex(fnv1a_32(build_canonical_payload(lat, lng, alt).as_bytes()))
}

/// Build the full L1 identifier. Ranges are deliberately not validated here;
/// the transport layer rejects out-of-range coordinates before calling in.
pub fn generate_l1(lat: f64, lng: f64, alt: f64) -> String {
    format!(
        "{L1_PREFIX}{},{},{}*{}",
        format_fixed(lat, LAT_LNG_DECIMALS),
        format_fixed(lng, LAT_LNG_DECIMALS),
        format_fixed(alt, ALT_DECIMALS),
        generate_checksum(lat, lng, alt),
    )
}

/// Parse and structurally validate an L1 string.
pub fn parse_l1(input: &str) -> Result<ParsedL1, ProtocolError> {
    let content = input
        .strip_prefix(L1_PREFIX)
        .ok_or(ProtocolError::InvalidPrefix)?;

    // Last '*' is the checksum separator; the coordinate part never
    // contains one.
    let (coord_part, checksum_part) = content
        .rsplit_once('*')
        .ok_or(ProtocolError::MissingChecksumSeparator)?;

    if checksum_part.len() != CHECKSUM_LEN
        || !checksum_part.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(ProtocolError::MalformedChecksum(checksum_part.to_string()));
    }

    let fields: Vec<&str> = coord_part.split(',').collect();
    if fields.len() != 3 {
        return Err(ProtocolError::WrongFieldCount(fields.len()));
    }

    let mut values = [0f64; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        let parsed: f64 = field
            .trim()
            .parse()
            .map_err(|_| ProtocolError::NonNumericField((*field).to_string()))?;
        // "inf"/"NaN" satisfy the float grammar but can be neither
        // range-checked nor re-canonicalized.
        if !parsed.is_finite() {
            return Err(ProtocolError::NonNumericField((*field).to_string()));
        }
        *slot = parsed;
    }
    let [lat, lng, alt] = values;

    if !(LAT_MIN..=LAT_MAX).contains(&lat) {
        return Err(ProtocolError::OutOfRange {
            field: "latitude",
            value: lat,
            min: LAT_MIN,
            max: LAT_MAX,
        });
    }
    if !(LNG_MIN..=LNG_MAX).contains(&lng) {
        return Err(ProtocolError::OutOfRange {
            field: "longitude",
            value: lng,
            min: LNG_MIN,
            max: LNG_MAX,
        });
    }

    let canonical_payload = build_canonical_payload(lat, lng, alt);
    let expected_checksum = checksum_hex(fnv1a_32(canonical_payload.as_bytes()));
    let checksum = checksum_part.to_ascii_lowercase();
    let checksum_valid = checksum == expected_checksum;

    Ok(ParsedL1 {
        lat,
        lng,
        alt,
        checksum,
        expected_checksum,
        checksum_valid,
        canonical_payload,
    })
}
