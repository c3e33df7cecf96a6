//! Shared application state.

use std::sync::Arc;

use contacts_core::storage::ContactRepository;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact storage, selected at startup from the configured target.
    pub contacts: Arc<dyn ContactRepository>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }
}
