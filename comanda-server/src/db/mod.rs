//! Persistence layer
//!
//! Thin sqlx query modules, one per entity. Every query over tenant-owned
//! data takes the acting restaurant id and filters on it; callers never see
//! rows belonging to another restaurant.

pub mod configs;
pub mod orders;
pub mod products;
pub mod restaurants;
pub mod users;
