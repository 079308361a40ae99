//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! There is no database and no server-side session store: the only
//! authentication fact is the boolean cookie, so state reduces to the
//! advisor access configuration loaded at startup.

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use std::sync::Arc;

/// Advisor access configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// The shared advisor access code checked at login. A stand-in for a
    /// real credential service, which lives outside this app.
    pub access_code: String,
}

impl AccessConfig {
    /// Load from `ACCESS_CODE`. Returns `None` if unset or blank
    /// (login will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let access_code = std::env::var("ACCESS_CODE").ok()?;
        let access_code = access_code.trim().to_owned();
        if access_code.is_empty() {
            return None;
        }
        Some(Self { access_code })
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub access: Option<Arc<AccessConfig>>,
}

impl AppState {
    #[must_use]
    pub fn new(access: Option<AccessConfig>) -> Self {
        Self { access: access.map(Arc::new) }
    }
}
