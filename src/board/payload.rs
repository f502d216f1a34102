use serde::{Deserialize, Serialize};

use super::catalog::ItemId;
use super::session::MenuEntry;

/// What travels with the pointer between drag start and drop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DragPayload {
    pub id: ItemId,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    Malformed(String),
    EmptyUrl,
    Encode(String),
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::Malformed(reason) => write!(f, "malformed drag payload: {reason}"),
            PayloadError::EmptyUrl => write!(f, "drag payload has an empty icon url"),
            PayloadError::Encode(reason) => write!(f, "drag payload could not be encoded: {reason}"),
        }
    }
}

impl std::error::Error for PayloadError {}

impl DragPayload {
    pub fn new(id: ItemId, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }

    pub fn from_entry(entry: &MenuEntry) -> Self {
        Self::new(entry.item_id, entry.icon.clone())
    }

    /// Encoding refuses exactly what [`DragPayload::decode`] refuses, so
    /// anything that encodes also decodes back to itself.
    ///
    /// # Errors
    /// Returns [`PayloadError::EmptyUrl`] when the icon url is blank and
    /// [`PayloadError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, PayloadError> {
        if self.url.trim().is_empty() {
            return Err(PayloadError::EmptyUrl);
        }
        ron::to_string(self).map_err(|err| PayloadError::Encode(err.to_string()))
    }

    /// Decode a payload read back from the drag transport. Nothing from the
    /// transport is trusted until it passes here.
    ///
    /// # Errors
    /// Returns [`PayloadError::Malformed`] when the text is not a payload
    /// and [`PayloadError::EmptyUrl`] when the icon url is blank.
    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        let payload: DragPayload =
            ron::from_str(raw.trim()).map_err(|err| PayloadError::Malformed(err.to_string()))?;
        if payload.url.trim().is_empty() {
            return Err(PayloadError::EmptyUrl);
        }
        Ok(payload)
    }
}
