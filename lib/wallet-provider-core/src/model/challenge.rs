use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque freshness token handed out to wallets
///
/// Holds the UTF-8 bytes of a signed `challenge+jwt` document. The wire form is
/// base64url without padding; padded input is accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge(Vec<u8>);

#[derive(Debug, thiserror::Error)]
#[error("Invalid challenge encoding: {0}")]
pub struct ChallengeEncodingError(String);

impl Challenge {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn encode(&self) -> Result<String, ChallengeEncodingError> {
        Base64UrlSafeNoPadding::encode_to_string(&self.0)
            .map_err(|err| ChallengeEncodingError(err.to_string()))
    }

    pub fn decode(value: &str) -> Result<Self, ChallengeEncodingError> {
        let bytes = Base64UrlSafeNoPadding::decode_to_vec(value.trim_end_matches('='), None)
            .map_err(|err| ChallengeEncodingError(err.to_string()))?;
        if bytes.is_empty() {
            return Err(ChallengeEncodingError("empty challenge".to_string()));
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Challenge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for Challenge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Challenge::decode(&value).map_err(serde::de::Error::custom)
    }
}
