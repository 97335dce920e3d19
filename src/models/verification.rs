//! Token introspection response from the authentication service.

use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the auth service: `{ error?, verified_email?, email? }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Presence of the key marks a rejected token, whatever its value (`null` included).
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub verified_email: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// What a verification result means for the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Token invalid or expired.
    Rejected,
    /// Token valid but the email has not been verified.
    Unverified,
    /// Verified, but the service sent no email.
    MissingEmail,
    Verified(String),
}

impl VerificationResult {
    pub fn into_verification(self) -> Verification {
        if self.error.is_some() {
            return Verification::Rejected;
        }
        if self.verified_email != Some(true) {
            return Verification::Unverified;
        }
        match self.email {
            Some(email) => Verification::Verified(email),
            None => Verification::MissingEmail,
        }
    }
}
