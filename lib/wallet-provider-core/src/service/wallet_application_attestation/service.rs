use super::WalletApplicationAttestationService;
use super::dto::WalletApplicationAttestationRequestDTO;
use super::error::WalletApplicationAttestationError;
use crate::model::attestation::{
    ClientEudiWalletInfo, Confirmation, WalletApplicationAttestationClaims,
};
use crate::model::jwk::PublicJwk;
use crate::proto::jwt::model::SignedJwt;
use crate::service::common::{ClientKeyDTO, accepts_algorithm, general_info};

impl WalletApplicationAttestationService {
    pub async fn issue(
        &self,
        request: WalletApplicationAttestationRequestDTO,
    ) -> Result<SignedJwt<WalletApplicationAttestationClaims>, WalletApplicationAttestationError>
    {
        let algorithm = self.signer.algorithm();
        if !accepts_algorithm(request.supported_signing_algorithms.as_deref(), algorithm) {
            let requested = request.supported_signing_algorithms.unwrap_or_default();
            tracing::warn!(
                "Wallet application attestation rejected, {algorithm} not among requested algorithms {requested:?}"
            );
            return Err(WalletApplicationAttestationError::UnsupportedSigningAlgorithms {
                supported: algorithm,
                requested,
            });
        }

        let attested_key = self.attested_key(request.key).await?;

        let config = &self.config.wallet_application_attestation;
        let issued_at = self.clock.now_utc();
        let claims = WalletApplicationAttestationClaims {
            issuer: self.config.issuer.identifier(),
            subject: self.config.client_id.to_owned(),
            expires_at: issued_at + config.validity,
            confirmation: Confirmation { jwk: attested_key },
            issued_at,
            not_before: issued_at,
            wallet_name: config.wallet_name.to_owned(),
            wallet_link: config.wallet_link.to_owned(),
            status: None,
            eudi_wallet_info: ClientEudiWalletInfo {
                general_info: general_info(&self.config.wallet_information),
            },
        };

        let signed = self.signer.sign(claims)?;
        tracing::info!(
            "Issued wallet application attestation valid until {}",
            signed.payload.expires_at
        );

        Ok(signed)
    }

    async fn attested_key(
        &self,
        key: ClientKeyDTO,
    ) -> Result<PublicJwk, WalletApplicationAttestationError> {
        let (key_attestation, challenge) = match key {
            ClientKeyDTO::PlatformKeyAttestation {
                key_attestation,
                challenge,
            } => (key_attestation, challenge),
            ClientKeyDTO::Jwk(jwk) => return Ok(jwk),
        };

        if let Err(failure) = self
            .challenge_validator
            .validate(&challenge, self.clock.now_utc())
        {
            tracing::warn!("Wallet application attestation rejected, {failure}");
            return Err(WalletApplicationAttestationError::InvalidChallenge(failure));
        }

        match self
            .key_attestation_validator
            .validate(&key_attestation, &challenge)
            .await
        {
            Ok(attested) => {
                tracing::debug!("Key attestation accepted: {}", attested.details);
                Ok(attested.public_key)
            }
            Err(failure) => {
                tracing::warn!(
                    "Wallet application attestation rejected, key attestation is not valid: {failure}"
                );
                Err(WalletApplicationAttestationError::InvalidKeyAttestation(failure))
            }
        }
    }
}
