//! Opaque entity identifiers.
//!
//! The service identifies applications and posts with 24-character hex
//! strings (MongoDB ObjectId rendering). This module validates the shape
//! and carries the value opaquely; BSON encoding is not our concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Validated 24-character hex identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// # Errors
    /// Returns [`Error::InvalidId`] unless the input is exactly 24 hex
    /// characters.
    pub fn parse(hex: impl Into<String>) -> Result<Self, Error> {
        let hex = hex.into();
        if hex.len() != 24 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidId(hex));
        }
        Ok(Self(hex))
    }

    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}
