//! Application state for the web layer.

use std::sync::Arc;

use crate::routing::RouteService;

/// Shared application state.
///
/// The route service owns the dataset and the startup-built graph, so
/// handlers share everything read-only and cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the loaded dataset.
    pub service: Arc<RouteService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: RouteService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
