// src/state.rs
use std::sync::Arc;

use crate::services::gateway::LlmGateway;
use crate::services::trip_store::TripStore;

pub type SharedState = Arc<AppState>;

/// Both collaborators are injected at construction so tests can substitute
/// in-memory doubles without touching disk or the network.
pub struct AppState {
    pub gateway: Arc<dyn LlmGateway>,
    pub trips: Arc<dyn TripStore>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn LlmGateway>, trips: Arc<dyn TripStore>) -> Self {
        Self { gateway, trips }
    }
}
