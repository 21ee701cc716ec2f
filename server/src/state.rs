//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the mail relay; it is optional so the site still
//! serves pages when no relay is configured.

use std::sync::Arc;

use forms::Relay;

/// Clone is required by Axum; the relay is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub relay: Option<Arc<dyn Relay>>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn Relay>>) -> Self {
        Self { relay }
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    pub use forms::test_support::MockRelay;

    use super::*;

    pub fn state_with(relay: Arc<MockRelay>) -> AppState {
        let relay: Arc<dyn Relay> = relay;
        AppState::new(Some(relay))
    }
}
