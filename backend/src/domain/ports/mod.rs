//! Ports implemented by outbound adapters.
//!
//! Inbound adapters (HTTP handlers) depend on these traits instead of any
//! concrete storage, so handler tests can substitute deterministic
//! in-memory implementations. Each port carries its own `thiserror` error
//! enum plus a conversion into the transport-facing [`crate::domain::Error`].

pub mod contact_repository;
pub mod earthquake_repository;
pub mod user_repository;

pub use contact_repository::{ContactRepository, ContactStoreError};
pub use earthquake_repository::{EarthquakeRepository, EarthquakeStoreError};
pub use user_repository::{UserRepository, UserStoreError};
