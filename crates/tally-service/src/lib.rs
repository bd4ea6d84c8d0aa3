//! # Tally Service
//!
//! Business logic service layer for Click Tally.
//! Turns repository lookups into domain errors and shapes the API DTOs.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
