//! Strongly-typed friend id with UUID validation. Use this instead of raw strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Friend ID (UUID). Validated on construction via `parse`/`from_str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// Fresh v4 id for a friend created in this session.
    pub fn generate() -> Self {
        FriendId(Uuid::new_v4().to_string())
    }

    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        Self::from_str(s.as_ref())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FriendId {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))?;
        Ok(FriendId(s.to_string()))
    }
}

impl From<FriendId> for String {
    fn from(id: FriendId) -> Self {
        id.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FriendId {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FriendId {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let s = String::deserialize(de)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
