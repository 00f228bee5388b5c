//! Shared types for the Comanda platform
//!
//! Domain models, the unified error system, money helpers and small
//! utilities used by the server crate.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
