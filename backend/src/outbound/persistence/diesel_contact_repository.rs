//! PostgreSQL-backed `ContactRepository` implementation using Diesel.
//!
//! Contact creation writes the contact row and its first phone inside a
//! single transaction so the aggregate never persists half-built.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{ContactRepository, ContactStoreError};
use crate::domain::{Contact, ContactId, NewContact, Phone, UserId};

use super::models::{ContactRow, NewContactRow, NewPhoneRow, PhoneRow};
use super::pool::{DbPool, PoolError};
use super::schema::{contacts, phones};

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ContactStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ContactStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactStoreError::connection("database connection error")
        }
        _ => ContactStoreError::query("database error"),
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, ContactStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let contact_row = NewContactRow {
            user_id: new_contact.user_id.as_i32(),
            name: new_contact.name,
            kind: new_contact.kind,
        };
        let phone_number = new_contact.phone_number;
        let phone_kind = new_contact.phone_kind;

        conn.transaction::<Contact, diesel::result::Error, _>(|conn| {
            async move {
                let contact: ContactRow = diesel::insert_into(contacts::table)
                    .values(&contact_row)
                    .returning(ContactRow::as_returning())
                    .get_result(conn)
                    .await?;

                let phone: PhoneRow = diesel::insert_into(phones::table)
                    .values(&NewPhoneRow {
                        contact_id: contact.id,
                        number: phone_number,
                        kind: phone_kind,
                    })
                    .returning(PhoneRow::as_returning())
                    .get_result(conn)
                    .await?;

                Ok(contact.into_contact(vec![phone.into()]))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let contact: Option<ContactRow> = contacts::table
            .find(id.as_i32())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(contact) = contact else {
            return Ok(None);
        };

        let phone_rows: Vec<PhoneRow> = phones::table
            .filter(phones::contact_id.eq(contact.id))
            .order(phones::id.asc())
            .select(PhoneRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let phone_list = phone_rows.into_iter().map(Phone::from).collect();
        Ok(Some(contact.into_contact(phone_list)))
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Contact>, ContactStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let contact_rows: Vec<ContactRow> = contacts::table
            .filter(contacts::user_id.eq(user_id.as_i32()))
            .order(contacts::id.asc())
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let contact_ids: Vec<i32> = contact_rows.iter().map(|row| row.id).collect();
        let phone_rows: Vec<PhoneRow> = phones::table
            .filter(phones::contact_id.eq_any(&contact_ids))
            .order(phones::id.asc())
            .select(PhoneRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let mut by_contact: HashMap<i32, Vec<Phone>> = HashMap::new();
        for row in phone_rows {
            by_contact
                .entry(row.contact_id)
                .or_default()
                .push(row.into());
        }

        Ok(contact_rows
            .into_iter()
            .map(|row| {
                let phone_list = by_contact.remove(&row.id).unwrap_or_default();
                row.into_contact(phone_list)
            })
            .collect())
    }
}
