//! Wire DTOs for the asset REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Decoding is lenient:
//! missing or `null` text fields become empty strings and unknown keys are
//! ignored, since the client never validates server shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned asset identifier.
///
/// Opaque to the client. The server may emit it as a JSON string or number;
/// both decode to the same textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for AssetId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// An asset as reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Absent until the server has created the record.
    #[serde(default)]
    pub asset_id: Option<AssetId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asset_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub health: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub installed_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

/// Creation request body. Values are sent exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub asset_name: String,
    pub status: String,
    pub health: String,
    pub installed_date: String,
    pub location: String,
}

/// Body of a `201 Created` response: the stored asset plus a derived age.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAsset {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(default)]
    pub age: Option<String>,
}

/// Error body returned by the server for failed requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable description: `message`, then `error`, then nothing.
    pub fn summary(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.is_empty()))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
