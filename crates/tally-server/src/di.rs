//! Dependency injection module using Shaku.
//!
//! `TallyModule` wires the full stack in one process:
//! `DatabasePool` → `SqliteUserRepository` → `UserServiceImpl`.

use shaku::module;
use std::sync::Arc;
use tally_repository::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters, SqliteUserRepository};
use tally_service::UserServiceImpl;

module! {
    pub TallyModule {
        components = [
            DatabasePool,
            SqliteUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the application module around an open database pool.
///
/// The module shares the pool's connections; closing `pool` closes them for
/// every component.
pub fn build_module(pool: &DatabasePool) -> Arc<TallyModule> {
    let module = TallyModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: pool.inner().clone(),
        })
        .build();

    Arc::new(module)
}
