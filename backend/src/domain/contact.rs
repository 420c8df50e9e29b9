//! Emergency-contact aggregate.
//!
//! A [`Contact`] belongs to exactly one user and owns an ordered,
//! append-only list of [`Phone`] records. Creation writes the contact and
//! its first phone together; no route updates or deletes a contact.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::domain::UserId;

/// Stable contact identifier backed by the database serial key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i32);

impl ContactId {
    /// Wrap a raw database identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number attached to a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub id: i32,
    #[schema(example = "415-555-0100")]
    pub number: String,
    /// Free-form classification, e.g. `mobile` or `home`.
    #[schema(example = "mobile")]
    pub kind: String,
}

/// An emergency contact owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[schema(value_type = i32, example = 1)]
    pub id: ContactId,
    #[schema(value_type = i32, example = 1)]
    pub user_id: UserId,
    pub name: String,
    /// Free-form relationship classification, e.g. `family` or `doctor`.
    pub kind: String,
    pub phones: Vec<Phone>,
}

/// Data required to create a contact and its first phone.
///
/// The source tolerated absent form fields, so the strings here may be
/// empty; only the owner is mandatory.
pub struct NewContact {
    pub user_id: UserId,
    pub name: String,
    pub kind: String,
    pub phone_number: String,
    pub phone_kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serialises_camel_case_with_nested_phones() {
        let contact = Contact {
            id: ContactId::new(3),
            user_id: UserId::new(9),
            name: "Grace Hopper".into(),
            kind: "colleague".into(),
            phones: vec![Phone {
                id: 5,
                number: "202-555-0104".into(),
                kind: "home".into(),
            }],
        };
        let value = serde_json::to_value(&contact).expect("serialise");
        assert_eq!(value["id"], 3);
        assert_eq!(value["userId"], 9);
        assert_eq!(value["phones"][0]["number"], "202-555-0104");
        assert_eq!(value["phones"][0]["kind"], "home");
    }
}
