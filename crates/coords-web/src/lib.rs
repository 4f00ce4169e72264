//! coords-web — REST server for the Coords spatial OS.
//!
//! Composes the `coords` core (protocol codec, models, stores, routing
//! estimation) into the HTTP surface: session-authenticated coordination
//! endpoints plus the public protocol endpoints.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod seed;
pub mod state;
