use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::Display;
use time::OffsetDateTime;
use url::Url;

use super::jwk::PublicJwk;

pub const CLIENT_ATTESTATION_TYPE: &str = "oauth-client-attestation+jwt";
pub const KEY_ATTESTATION_TYPE: &str = "key-attestation+jwt";

/// <https://openid.net/specs/openid-4-verifiable-credential-issuance-1_0.html#appendix-E>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInstanceAttestationClaims {
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "exp", with = "time::serde::timestamp")]
    pub expires_at: OffsetDateTime,
    #[serde(rename = "cnf")]
    pub confirmation: Confirmation,
    #[serde(rename = "iat", with = "time::serde::timestamp")]
    pub issued_at: OffsetDateTime,
    #[serde(rename = "nbf", with = "time::serde::timestamp")]
    pub not_before: OffsetDateTime,
    pub wallet_name: Option<String>,
    pub wallet_link: Option<Url>,
    pub status: Option<Status>,
    pub eudi_wallet_info: ClientEudiWalletInfo,
    pub wallet_metadata: Option<serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletApplicationAttestationClaims {
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "exp", with = "time::serde::timestamp")]
    pub expires_at: OffsetDateTime,
    #[serde(rename = "cnf")]
    pub confirmation: Confirmation,
    #[serde(rename = "iat", with = "time::serde::timestamp")]
    pub issued_at: OffsetDateTime,
    #[serde(rename = "nbf", with = "time::serde::timestamp")]
    pub not_before: OffsetDateTime,
    pub wallet_name: Option<String>,
    pub wallet_link: Option<Url>,
    pub status: Option<Status>,
    pub eudi_wallet_info: ClientEudiWalletInfo,
}

/// <https://openid.net/specs/openid-4-verifiable-credential-issuance-1_0.html#appendix-D.1>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletUnitAttestationClaims {
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "iat", with = "time::serde::timestamp")]
    pub issued_at: OffsetDateTime,
    #[serde(rename = "exp", with = "time::serde::timestamp")]
    pub expires_at: OffsetDateTime,
    pub attested_keys: Vec<PublicJwk>,
    pub key_storage: Option<Vec<AttackPotentialResistance>>,
    pub user_authentication: Option<Vec<AttackPotentialResistance>>,
    pub certification: Option<Url>,
    pub nonce: Option<String>,
    pub status: Option<Status>,
    pub eudi_wallet_info: UnitEudiWalletInfo,
}

/// <https://www.rfc-editor.org/rfc/rfc7800.html#section-3>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub jwk: PublicJwk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEudiWalletInfo {
    pub general_info: GeneralInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEudiWalletInfo {
    pub general_info: GeneralInfo,
    pub wscd_info: WscdInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralInfo {
    pub wallet_provider_name: String,
    pub wallet_solution_id: String,
    pub wallet_solution_version: String,
    pub wallet_solution_certification_information: CertificationInformation,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WscdInfo {
    pub wscd_type: Option<WscdType>,
    pub wscd_certification_information: CertificationInformation,
}

/// Either a free-form reference or a structured certification object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CertificationInformation {
    Text(String),
    Object(serde_json::Map<String, serde_json::Value>),
}

impl CertificationInformation {
    pub fn is_blank(&self) -> bool {
        match self {
            CertificationInformation::Text(text) => text.trim().is_empty(),
            CertificationInformation::Object(_) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WscdType {
    Remote,
    LocalExternal,
    LocalInternal,
    LocalNative,
    Hybrid,
}

/// ISO 18045 attack potential resistance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum AttackPotentialResistance {
    #[serde(rename = "iso_18045_high")]
    #[strum(serialize = "iso_18045_high")]
    Iso18045High,
    #[serde(rename = "iso_18045_moderate")]
    #[strum(serialize = "iso_18045_moderate")]
    Iso18045Moderate,
    #[serde(rename = "iso_18045_enhanced-basic")]
    #[strum(serialize = "iso_18045_enhanced-basic")]
    Iso18045EnhancedBasic,
    #[serde(rename = "iso_18045_basic")]
    #[strum(serialize = "iso_18045_basic")]
    Iso18045Basic,
}

/// <https://datatracker.ietf.org/doc/html/draft-ietf-oauth-status-list#name-referenced-token>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub status_list: StatusListReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusListReference {
    pub idx: u32,
    pub uri: String,
}
