//! Port abstraction for contact persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error, NewContact, UserId};

/// Persistence errors raised by contact repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactStoreError {
    /// Repository connection could not be established.
    #[error("contact repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("contact repository query failed: {message}")]
    Query { message: String },
}

impl ContactStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<ContactStoreError> for Error {
    fn from(error: ContactStoreError) -> Self {
        match error {
            ContactStoreError::Connection { message } => Error::service_unavailable(message),
            ContactStoreError::Query { message } => Error::internal(message),
        }
    }
}

/// Repository port for contact aggregates.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a contact and its first phone in one transaction, returning
    /// the stored aggregate.
    async fn create(&self, new_contact: NewContact) -> Result<Contact, ContactStoreError>;

    /// Fetch a contact with its phones by identifier.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactStoreError>;

    /// List the contacts owned by one user, phones included.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Contact>, ContactStoreError>;
}
