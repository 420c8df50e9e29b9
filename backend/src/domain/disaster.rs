//! Natural-disaster records.
//!
//! An [`Earthquake`] is the joined-table specialisation of the generic
//! disaster record: the shared columns (location, time) live on the base
//! table and the quake-specific measurements on their own table, keyed by
//! the same identifier. The application only ever reads these records;
//! rows arrive through out-of-band ingestion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::domain::UserId;

/// Discriminator value for earthquake rows on the base disaster table.
pub const EARTHQUAKE_KIND: &str = "earthquake";

/// Identifier shared by a disaster record and its specialisation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisasterId(i32);

impl DisasterId {
    /// Wrap a raw database identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DisasterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded earthquake, flattened from the disaster base record and its
/// specialisation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Earthquake {
    #[schema(value_type = i32, example = 1)]
    pub nat_id: DisasterId,
    #[schema(example = "Loma Prieta, CA")]
    pub location: String,
    pub occurred_at: DateTime<Utc>,
    #[schema(example = 6.9)]
    pub magnitude: f64,
    pub depth_km: f64,
}

/// A user-directed notification about a disaster.
///
/// Declared in the model layer with no route exercising it, mirroring the
/// source application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i32,
    #[schema(value_type = i32)]
    pub user_id: UserId,
    #[schema(value_type = i32)]
    pub nat_id: DisasterId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn earthquake_serialises_camel_case() {
        let quake = Earthquake {
            nat_id: DisasterId::new(12),
            location: "Loma Prieta, CA".into(),
            occurred_at: Utc.with_ymd_and_hms(1989, 10, 17, 0, 4, 15).unwrap(),
            magnitude: 6.9,
            depth_km: 19.0,
        };
        let value = serde_json::to_value(&quake).expect("serialise");
        assert_eq!(value["natId"], 12);
        assert_eq!(value["magnitude"], 6.9);
        assert_eq!(value["occurredAt"], "1989-10-17T00:04:15Z");
    }

    #[test]
    fn alert_serialises_camel_case() {
        let alert = Alert {
            id: 1,
            user_id: UserId::new(4),
            nat_id: DisasterId::new(12),
            message: "Earthquake reported near your residency address".into(),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&alert).expect("serialise");
        assert_eq!(value["userId"], 4);
        assert_eq!(value["natId"], 12);
    }
}
