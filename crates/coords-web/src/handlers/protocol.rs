//! Protocol codec endpoints. Field names here are wire compatibility with
//! existing callers; do not rename.

use axum::extract::{Json, State};
use coords::models::{
    GenerateRequest, GenerateResponse, L1ValidationRequest, L1ValidationResponse,
};
use coords::protocol::{
    build_canonical_payload, generate_checksum, generate_l1, parse_l1, run_test_vectors,
    spec_compliant, VectorResult,
};
use coords::CoordsError;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/v1/protocol/generate
///
/// The transport layer owns range rejection on the generate path; the codec
/// itself only validates ranges when parsing.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if !(-90.0..=90.0).contains(&req.lat) {
        return Err(
            CoordsError::InvalidInput(format!("latitude {} out of range [-90, 90]", req.lat))
                .into(),
        );
    }
    if !(-180.0..=180.0).contains(&req.lng) {
        return Err(CoordsError::InvalidInput(format!(
            "longitude {} out of range [-180, 180]",
            req.lng
        ))
        .into());
    }

    // Altitude is required by the wire format, optional to the caller.
    let alt = req.alt.unwrap_or(0.0);

    Ok(Json(GenerateResponse {
        l1: generate_l1(req.lat, req.lng, alt),
        checksum: generate_checksum(req.lat, req.lng, alt),
        canonical_payload: build_canonical_payload(req.lat, req.lng, alt),
        lat: req.lat,
        lng: req.lng,
        alt,
        words: state.lexicon.three_words(req.lat, req.lng),
    }))
}

/// POST /api/v1/protocol/validate
///
/// Structural failure is a 200 with `valid: false`; checksum mismatch is a
/// 200 with `valid: true, checksum_valid: false`.
pub async fn validate(
    Json(req): Json<L1ValidationRequest>,
) -> Json<L1ValidationResponse> {
    match parse_l1(&req.l1_string) {
        Ok(parsed) => Json(L1ValidationResponse {
            valid: true,
            lat: Some(parsed.lat),
            lng: Some(parsed.lng),
            altitude: Some(parsed.alt),
            checksum: Some(parsed.checksum),
            checksum_valid: Some(parsed.checksum_valid),
            error: None,
        }),
        Err(err) => Json(L1ValidationResponse {
            valid: false,
            lat: None,
            lng: None,
            altitude: None,
            checksum: None,
            checksum_valid: None,
            error: Some(err.to_string()),
        }),
    }
}

#[derive(Debug, Serialize)]
pub struct TestVectorsResponse {
    pub spec_compliant: bool,
    pub vectors: Vec<VectorResult>,
}

/// GET /api/v1/protocol/test-vectors
pub async fn test_vectors() -> Json<TestVectorsResponse> {
    let vectors = run_test_vectors();
    Json(TestVectorsResponse {
        spec_compliant: spec_compliant(&vectors),
        vectors,
    })
}
