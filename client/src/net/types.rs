//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! Field names follow the remote API (`titolo`, `descrizione`, `prezzo`) via
//! serde renames so the rest of the client can use descriptive names. The API
//! is loosely typed: prices and ids arrive as strings or numbers, and the image
//! list of a listing is a JSON-encoded string, so decoding normalizes those here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A listed item as returned by `GET /` and appended locally after publishing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Server-side identifier, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(rename = "titolo", default, deserialize_with = "deserialize_nullable_text")]
    pub title: String,
    #[serde(rename = "descrizione", default, deserialize_with = "deserialize_nullable_text")]
    pub description: String,
    /// Price as display text, normalized to a string regardless of wire type.
    #[serde(rename = "prezzo", default, deserialize_with = "deserialize_text_from_scalar")]
    pub price: String,
    /// JSON-encoded array of image URLs (data URLs for client-created listings).
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub images: String,
    /// Username of the seller.
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub seller: String,
    /// Creation date, already formatted for display.
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub date: String,
}

impl Listing {
    /// Decode the image URL list.
    ///
    /// Older listings store the array with single quotes, so quotes are
    /// normalized before parsing. Unparseable values yield an empty list.
    #[must_use]
    pub fn image_urls(&self) -> Vec<String> {
        let normalized = self.images.replace('\'', "\"");
        serde_json::from_str::<Vec<String>>(&normalized).unwrap_or_default()
    }
}

/// Public identity of an account as echoed by `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Username or email; the API accepts either.
    pub username: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /newproduct`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewListingPayload {
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "descrizione")]
    pub description: String,
    #[serde(rename = "prezzo")]
    pub price: String,
    /// JSON-encoded array of image data URLs.
    pub images: String,
    pub seller: String,
    pub date: String,
}

/// Body of `POST /user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserLookupRequest {
    pub username: String,
}

/// Generic `{status, ...}` envelope shared by the mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    /// Human-readable rejection reason (`/register` only).
    #[serde(default)]
    pub reason: Option<String>,
    /// Echoed account (`/login` and `/register`).
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl StatusResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}

/// Text field that older records may carry as `null`.
fn deserialize_nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Array(_) => serde_json::to_string(&value).map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected string, number, or array")),
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
