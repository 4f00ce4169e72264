//! L2 human-friendly handle codec.
//!
//! Format: `@<tenant>/<path>/<...>`. Purely structural: no checksum, no
//! range validation. Resolving a handle to coordinates is a keyed lookup in
//! an external store and is not part of the codec.

use serde::Serialize;

use super::error::ProtocolError;

/// Successful parse of an L2 handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedL2 {
    pub tenant: String,
    /// Path segments joined back with `/`.
    pub path: String,
    pub parts: Vec<String>,
    pub full_handle: String,
}

/// Build a handle such as `@acme/warehouse/dock-1`.
pub fn generate_l2_handle(tenant: &str, path_parts: &[&str]) -> String {
    format!("@{}/{}", tenant, path_parts.join("/"))
}

/// Parse a handle into tenant and path segments.
pub fn parse_l2_handle(handle: &str) -> Result<ParsedL2, ProtocolError> {
    let content = handle
        .strip_prefix('@')
        .ok_or(ProtocolError::MissingAtPrefix)?;

    let segments: Vec<&str> = content.split('/').collect();
    if segments.len() < 2 {
        return Err(ProtocolError::IncompleteHandle);
    }

    Ok(ParsedL2 {
        tenant: segments[0].to_string(),
        path: segments[1..].join("/"),
        parts: segments[1..].iter().map(|s| s.to_string()).collect(),
        full_handle: handle.to_string(),
    })
}
