//! Serde adapter for timestamps on canonical entities.
//!
//! Timestamps always leave the client as UTC with millisecond precision,
//! e.g. `2024-01-15T10:30:00.000Z`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn format(at: &DateTime<Utc>) -> String {
    at.format(FORMAT).to_string()
}

pub fn serialize<S>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(at))
}

pub fn deserialize<'de, D>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    DateTime::<Utc>::deserialize(deserializer)
}
