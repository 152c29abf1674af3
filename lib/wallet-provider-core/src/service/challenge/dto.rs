use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Payload of a `challenge+jwt` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeClaims {
    /// Base64url encoded random nonce
    pub challenge: String,
    #[serde(rename = "nbf", with = "time::serde::timestamp")]
    pub not_before: OffsetDateTime,
    #[serde(rename = "exp", with = "time::serde::timestamp")]
    pub expires_at: OffsetDateTime,
}
