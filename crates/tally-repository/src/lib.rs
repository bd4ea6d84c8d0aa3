//! # Tally Repository
//!
//! Data access for Click Tally.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>        (domain interface)
//! SqliteUserRepository                (SQLx queries)
//!   ↓  Arc<dyn DatabasePoolInterface> (pool interface)
//! DatabasePool                        (SqlitePool + schema bootstrap)
//!   ↓
//! SQLite
//! ```
//!
//! Every write that needs the resulting row uses a single statement with
//! `RETURNING`, so the read-back can never observe another writer's change.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
