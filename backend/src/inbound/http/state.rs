//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! the domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{ContactRepository, EarthquakeRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub earthquakes: Arc<dyn EarthquakeRepository>,
}

impl HttpState {
    /// Construct state from the three repository ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        contacts: Arc<dyn ContactRepository>,
        earthquakes: Arc<dyn EarthquakeRepository>,
    ) -> Self {
        Self {
            users,
            contacts,
            earthquakes,
        }
    }
}
