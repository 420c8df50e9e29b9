//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them
//! for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key (serial).
        id -> Int4,
        /// Unique login email.
        email -> Varchar,
        /// Argon2id hash string.
        password_hash -> Varchar,
        name -> Varchar,
        age -> Int4,
        phone -> Varchar,
        residency_address -> Varchar,
        zipcode -> Varchar,
        medications -> Varchar,
        allergies -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Emergency contacts, each owned by one user.
    contacts (id) {
        id -> Int4,
        user_id -> Int4,
        name -> Varchar,
        /// Relationship classification, free form.
        kind -> Varchar,
    }
}

diesel::table! {
    /// Phone numbers attached to contacts. Append-only.
    phones (id) {
        id -> Int4,
        contact_id -> Int4,
        number -> Varchar,
        /// e.g. `mobile` or `home`.
        kind -> Varchar,
    }
}

diesel::table! {
    /// Base table for natural-disaster records.
    natural_disasters (nat_id) {
        nat_id -> Int4,
        /// Specialisation discriminator, e.g. `earthquake`.
        kind -> Varchar,
        location -> Varchar,
        occurred_at -> Timestamptz,
    }
}

diesel::table! {
    /// Earthquake specialisation rows, keyed by the base record id.
    earthquakes (nat_id) {
        nat_id -> Int4,
        magnitude -> Float8,
        depth_km -> Float8,
    }
}

diesel::table! {
    /// User-directed disaster notifications. Declared but unexercised by
    /// any route, mirroring the source model layer.
    alerts (id) {
        id -> Int4,
        user_id -> Int4,
        nat_id -> Int4,
        message -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(contacts -> users (user_id));
diesel::joinable!(phones -> contacts (contact_id));
diesel::joinable!(earthquakes -> natural_disasters (nat_id));
diesel::joinable!(alerts -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    contacts,
    phones,
    natural_disasters,
    earthquakes,
    alerts,
);
