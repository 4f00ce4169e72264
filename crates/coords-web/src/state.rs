//! Shared application state.

use std::sync::Arc;

use coords::protocol::WordLexicon;
use coords::Stores;

use crate::auth::AuthConfig;

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub lexicon: WordLexicon,
    pub auth: Arc<AuthConfig>,
    /// External OAuth session-exchange endpoint; `/api/auth/session`
    /// answers 503 when unset.
    pub oauth_session_url: Option<String>,
}

impl AppState {
    pub fn new(stores: Stores, auth: AuthConfig, oauth_session_url: Option<String>) -> Self {
        Self {
            stores,
            lexicon: WordLexicon::default(),
            auth: Arc::new(auth),
            oauth_session_url,
        }
    }
}
