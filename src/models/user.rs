use serde::{Deserialize, Serialize};

/// Profile attributes returned by a provider after a completed exchange.
/// Never persisted server-side; the display fields round-trip to the client
/// inside the `auth` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub provider: String,
    pub name: String,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub raw: serde_json::Value,
}

/// The decoded payload of the `auth` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserData {
    pub name: String,
    pub avatar_url: String,
}
