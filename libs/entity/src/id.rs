use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a backend record.
///
/// Real ids handed out by the backend are non-negative. Negative ids are
/// placeholders minted on the client when a payload carried no usable id;
/// they only serve as local keys and must not be sent back to the backend.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Id(i64);

impl Id {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_synthetic(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
