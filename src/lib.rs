//! Coords — unified spatial OS for enterprise logistics.
//!
//! The hard core is the protocol codec in [`protocol`]: deterministic,
//! checksummed L1 spatial identifiers, hierarchical L2 handles, and the
//! three-word mnemonic, all pinned by a conformance vector suite. Around it
//! sit the domain models, store ports, and route estimation that the HTTP
//! server (`coords-web`) composes into the coordination backend.

pub mod error;
pub mod models;
pub mod ports;
pub mod protocol;
pub mod routing;
pub mod store;

pub use error::CoordsError;
pub use store::Stores;
