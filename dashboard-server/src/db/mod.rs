//! Storage Module
//!
//! Storage access behind the [`DashboardStore`] trait. The engine only
//! ever sees this trait, so an SQL-backed store can replace
//! [`MemoryStore`] without touching the stats or API layers.

pub mod memory;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use seed::{SeedData, load_seed};
pub use store::DashboardStore;
