//! Diesel row models mapping between the schema and domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{alerts, contacts, earthquakes, natural_disasters, phones, users};
use crate::domain::{
    Alert, Contact, ContactId, DisasterId, Earthquake, EmailAddress, Phone, StoredCredentials,
    User, UserId, UserProfile,
};

/// Queryable row for registered users.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
    #[expect(dead_code, reason = "audit column not surfaced by the domain model")]
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to the domain user, dropping the password hash.
    ///
    /// Fails only when the stored row violates the email invariant, which
    /// indicates out-of-band data corruption.
    pub(crate) fn into_user(self) -> Result<User, String> {
        let email = EmailAddress::new(self.email).map_err(|err| err.to_string())?;
        Ok(User::new(
            UserId::new(self.id),
            UserProfile {
                email,
                name: self.name,
                age: self.age,
                phone: self.phone,
                residency_address: self.residency_address,
                zipcode: self.zipcode,
                medications: self.medications,
                allergies: self.allergies,
            },
        ))
    }

    /// Project the credential fields used by login.
    pub(crate) fn into_credentials(self) -> StoredCredentials {
        StoredCredentials {
            user_id: UserId::new(self.id),
            password_hash: self.password_hash,
        }
    }
}

/// Insertable row for new users.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
}

/// Changeset overwriting a user's profile in place.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserProfileChangeset {
    pub email: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
}

impl From<&UserProfile> for UserProfileChangeset {
    fn from(profile: &UserProfile) -> Self {
        Self {
            email: profile.email.as_ref().to_owned(),
            name: profile.name.clone(),
            age: profile.age,
            phone: profile.phone.clone(),
            residency_address: profile.residency_address.clone(),
            zipcode: profile.zipcode.clone(),
            medications: profile.medications.clone(),
            allergies: profile.allergies.clone(),
        }
    }
}

/// Queryable row for contacts.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub kind: String,
}

impl ContactRow {
    /// Attach loaded phones to build the domain aggregate.
    pub(crate) fn into_contact(self, phones: Vec<Phone>) -> Contact {
        Contact {
            id: ContactId::new(self.id),
            user_id: UserId::new(self.user_id),
            name: self.name,
            kind: self.kind,
            phones,
        }
    }
}

/// Insertable row for new contacts.
#[derive(Debug, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow {
    pub user_id: i32,
    pub name: String,
    pub kind: String,
}

/// Queryable row for phones.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = phones)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PhoneRow {
    pub id: i32,
    pub contact_id: i32,
    pub number: String,
    pub kind: String,
}

impl From<PhoneRow> for Phone {
    fn from(row: PhoneRow) -> Self {
        Phone {
            id: row.id,
            number: row.number,
            kind: row.kind,
        }
    }
}

/// Insertable row for new phones.
#[derive(Debug, Insertable)]
#[diesel(table_name = phones)]
pub(crate) struct NewPhoneRow {
    pub contact_id: i32,
    pub number: String,
    pub kind: String,
}

/// Queryable row for the disaster base table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = natural_disasters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NaturalDisasterRow {
    #[expect(dead_code, reason = "join key duplicated on the specialisation row")]
    pub nat_id: i32,
    #[expect(dead_code, reason = "discriminator only filters queries")]
    pub kind: String,
    pub location: String,
    pub occurred_at: DateTime<Utc>,
}

/// Queryable row for the earthquake specialisation table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = earthquakes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EarthquakeRow {
    pub nat_id: i32,
    pub magnitude: f64,
    pub depth_km: f64,
}

/// Flatten a joined earthquake/base pair into the domain record.
pub(crate) fn join_to_earthquake(quake: EarthquakeRow, base: NaturalDisasterRow) -> Earthquake {
    Earthquake {
        nat_id: DisasterId::new(quake.nat_id),
        location: base.location,
        occurred_at: base.occurred_at,
        magnitude: quake.magnitude,
        depth_km: quake.depth_km,
    }
}

/// Queryable row for alerts. No route reads or writes these yet; the row
/// keeps the schema and domain model in lockstep.
#[expect(dead_code, reason = "declared by the data model; no route exercises alerts")]
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = alerts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AlertRow {
    pub id: i32,
    pub user_id: i32,
    pub nat_id: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<AlertRow> for Alert {
    fn from(row: AlertRow) -> Self {
        Alert {
            id: row.id,
            user_id: UserId::new(row.user_id),
            nat_id: DisasterId::new(row.nat_id),
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user_row() -> UserRow {
        UserRow {
            id: 1,
            email: "ada@example.com".into(),
            password_hash: "$argon2id$stub".into(),
            name: "Ada Lovelace".into(),
            age: 36,
            phone: "415-555-0100".into(),
            residency_address: "12 Analytical Way".into(),
            zipcode: "94105".into(),
            medications: "none".into(),
            allergies: "none".into(),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn user_row_converts_and_drops_hash() {
        let user = user_row().into_user().expect("valid row");
        assert_eq!(user.id.as_i32(), 1);
        assert_eq!(user.profile.email.as_ref(), "ada@example.com");
        let serialised = serde_json::to_value(&user).expect("serialise");
        assert!(serialised.get("passwordHash").is_none());
    }

    #[test]
    fn user_row_with_corrupt_email_fails_conversion() {
        let mut row = user_row();
        row.email = "not-an-email".into();
        assert!(row.into_user().is_err());
    }

    #[test]
    fn credentials_projection_keeps_hash() {
        let creds = user_row().into_credentials();
        assert_eq!(creds.user_id.as_i32(), 1);
        assert_eq!(creds.password_hash, "$argon2id$stub");
    }

    #[test]
    fn joined_rows_flatten_into_earthquake() {
        let quake = join_to_earthquake(
            EarthquakeRow {
                nat_id: 7,
                magnitude: 6.9,
                depth_km: 19.0,
            },
            NaturalDisasterRow {
                nat_id: 7,
                kind: "earthquake".into(),
                location: "Loma Prieta, CA".into(),
                occurred_at: Utc.with_ymd_and_hms(1989, 10, 17, 0, 4, 15).unwrap(),
            },
        );
        assert_eq!(quake.nat_id.as_i32(), 7);
        assert_eq!(quake.location, "Loma Prieta, CA");
        assert_eq!(quake.magnitude, 6.9);
    }
}
