use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::model::jwk::PublicJwk;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtHeader {
    // https://www.rfc-editor.org/rfc/rfc7515.html#section-4.1.1
    #[serde(rename = "alg")]
    pub algorithm: String,

    // https://www.rfc-editor.org/rfc/rfc7515.html#section-4.1.9
    #[serde(rename = "typ", default)]
    pub r#type: Option<String>,

    // https://www.rfc-editor.org/rfc/rfc7515.html#section-4.1.3
    #[serde(rename = "jwk", default)]
    pub jwk: Option<PublicJwk>,

    // https://www.rfc-editor.org/rfc/rfc7515.html#section-4.1.6
    #[serde(rename = "x5c", default)]
    pub x5c: Option<Vec<String>>,
}

/// A signed compact JWS together with its decoded parts
#[derive(Debug, Clone)]
pub struct SignedJwt<T> {
    pub header: JwtHeader,
    pub payload: T,
    pub signature: Vec<u8>,
    pub signing_input: String,
    pub token: String,
}
