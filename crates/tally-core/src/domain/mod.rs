//! Domain entities for Click Tally.

mod user;

pub use user::*;
