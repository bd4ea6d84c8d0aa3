//! Application state for Axum handlers.

use shaku::HasComponent;
use std::sync::Arc;
use tally_repository::DatabasePoolInterface;
use tally_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Arc<dyn DatabasePoolInterface>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<dyn DatabasePoolInterface>) -> Self {
        Self {
            user_service,
            database,
        }
    }

    /// Resolves the state's components from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: HasComponent<dyn UserService> + HasComponent<dyn DatabasePoolInterface>,
    {
        Self {
            user_service: HasComponent::<dyn UserService>::resolve(module),
            database: HasComponent::<dyn DatabasePoolInterface>::resolve(module),
        }
    }
}
