//! Spec conformance suite.
//!
//! A fixed table of reference inputs with pre-computed checksum and URI.
//! Running it recomputes both through the live formatter/checksum/codec and
//! reports structured pass/fail records. A mismatch is a conformance
//! regression surfaced in the report, never a panic.

use serde::Serialize;

use super::l1::{generate_checksum, generate_l1};

/// One reference input with its expected outputs.
#[derive(Debug, Clone, Copy)]
pub struct SpecVector {
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
    pub expected_checksum: &'static str,
    pub expected_uri: &'static str,
}

/// Reference vectors pinning formatter, rounding, and hash behavior.
pub const SPEC_VECTORS: [SpecVector; 4] = [
    SpecVector {
        lat: 37.7749,
        lng: -122.4194,
        alt: 15.25,
        expected_checksum: "1c86401e",
        expected_uri: "coords:l1:v1:37.774900,-122.419400,15.25*1c86401e",
    },
    SpecVector {
        lat: 0.0,
        lng: 0.0,
        alt: 0.0,
        expected_checksum: "8922cf52",
        expected_uri: "coords:l1:v1:0.000000,0.000000,0.00*8922cf52",
    },
    SpecVector {
        lat: -33.8688,
        lng: 151.2093,
        alt: 58.70,
        expected_checksum: "905f6970",
        expected_uri: "coords:l1:v1:-33.868800,151.209300,58.70*905f6970",
    },
    SpecVector {
        lat: 48.8566,
        lng: 2.3522,
        alt: 35.40,
        expected_checksum: "ae6c07e1",
        expected_uri: "coords:l1:v1:48.856600,2.352200,35.40*ae6c07e1",
    },
];

/// Per-vector outcome of a conformance run.
#[derive(Debug, Clone, Serialize)]
pub struct VectorResult {
    pub input: [f64; 3],
    pub expected_checksum: String,
    pub actual_checksum: String,
    pub checksum_pass: bool,
    pub expected_uri: String,
    pub actual_uri: String,
    pub uri_pass: bool,
}

/// Recompute every spec vector through the live codec.
pub fn run_test_vectors() -> Vec<VectorResult> {
    SPEC_VECTORS
        .iter()
        .map(|vector| {
            let actual_checksum = generate_checksum(vector.lat, vector.lng, vector.alt);
            let actual_uri = generate_l1(vector.lat, vector.lng, vector.alt);
            VectorResult {
                input: [vector.lat, vector.lng, vector.alt],
                checksum_pass: actual_checksum == vector.expected_checksum,
                uri_pass: actual_uri == vector.expected_uri,
                expected_checksum: vector.expected_checksum.to_string(),
                actual_checksum,
                expected_uri: vector.expected_uri.to_string(),
                actual_uri,
            }
        })
        .collect()
}

/// True when every vector reproduced both checksum and URI exactly.
pub fn spec_compliant(results: &[VectorResult]) -> bool {
    results.iter().all(|r| r.checksum_pass && r.uri_pass)
}
