use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Public JSON Web Key (RFC 7517)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kty")]
pub enum PublicJwk {
    #[serde(rename = "EC")]
    Ec(PublicJwkEc),
    #[serde(rename = "RSA")]
    Rsa(PublicJwkRsa),
    #[serde(rename = "OKP")]
    Okp(PublicJwkOkp),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicJwkEc {
    pub crv: String,
    pub x: String,
    pub y: String,
    #[serde(flatten)]
    pub metadata: JwkMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicJwkRsa {
    pub n: String,
    pub e: String,
    #[serde(flatten)]
    pub metadata: JwkMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicJwkOkp {
    pub crv: String,
    pub x: String,
    #[serde(flatten)]
    pub metadata: JwkMetadata,
}

/// Members that describe a key without being part of its material
///
/// Members without a dedicated field (`key_ops`, `ext`, ...) are kept in
/// `other` and serialized back unchanged.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkMetadata {
    pub kid: Option<String>,
    pub alg: Option<String>,
    #[serde(rename = "use")]
    pub r#use: Option<String>,
    pub x5c: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

// `other` is skipped, equal metadata still hashes equally
impl Hash for JwkMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kid.hash(state);
        self.alg.hash(state);
        self.r#use.hash(state);
        self.x5c.hash(state);
    }
}

impl PublicJwk {
    pub fn metadata(&self) -> &JwkMetadata {
        match self {
            PublicJwk::Ec(key) => &key.metadata,
            PublicJwk::Rsa(key) => &key.metadata,
            PublicJwk::Okp(key) => &key.metadata,
        }
    }

    pub fn metadata_mut(&mut self) -> &mut JwkMetadata {
        match self {
            PublicJwk::Ec(key) => &mut key.metadata,
            PublicJwk::Rsa(key) => &mut key.metadata,
            PublicJwk::Okp(key) => &mut key.metadata,
        }
    }

    /// Copy of the key reduced to its key material
    pub fn key_material(&self) -> PublicJwk {
        let mut key = self.clone();
        *key.metadata_mut() = JwkMetadata::default();
        key
    }
}
