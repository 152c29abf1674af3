use super::WalletInstanceAttestationService;
use super::dto::WalletInstanceAttestationRequestDTO;
use super::error::WalletInstanceAttestationError;
use crate::model::attestation::{
    ClientEudiWalletInfo, Confirmation, WalletInstanceAttestationClaims,
};
use crate::proto::jwt::model::SignedJwt;
use crate::service::common::{ClientKeyDTO, accepts_algorithm, general_info};

impl WalletInstanceAttestationService {
    /// Issues a wallet instance attestation binding the requested key to this wallet
    pub async fn issue(
        &self,
        request: WalletInstanceAttestationRequestDTO,
    ) -> Result<SignedJwt<WalletInstanceAttestationClaims>, WalletInstanceAttestationError> {
        let algorithm = self.signer.algorithm();
        if !accepts_algorithm(request.supported_signing_algorithms.as_deref(), algorithm) {
            let requested = request.supported_signing_algorithms.unwrap_or_default();
            tracing::warn!(
                "Wallet instance attestation rejected, {algorithm} not among requested algorithms {requested:?}"
            );
            return Err(WalletInstanceAttestationError::UnsupportedSigningAlgorithms {
                supported: algorithm,
                requested,
            });
        }

        let attested_key = match request.key {
            ClientKeyDTO::PlatformKeyAttestation {
                key_attestation,
                challenge,
            } => {
                self.challenge_validator
                    .validate(&challenge, self.clock.now_utc())
                    .map_err(|failure| {
                        tracing::warn!("Wallet instance attestation rejected, {failure}");
                        WalletInstanceAttestationError::InvalidChallenge(failure)
                    })?;

                self.key_attestation_validator
                    .validate(&key_attestation, &challenge)
                    .await
                    .map_err(|failure| {
                        tracing::warn!(
                            "Wallet instance attestation rejected, key attestation is not valid: {failure}"
                        );
                        WalletInstanceAttestationError::InvalidKeyAttestation(failure)
                    })?
                    .public_key
            }
            ClientKeyDTO::Jwk(jwk) => jwk,
        };

        let config = &self.config.wallet_instance_attestation;
        let issued_at = self.clock.now_utc();
        let claims = WalletInstanceAttestationClaims {
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
            wallet_metadata: request.wallet_metadata,
        };

        let signed = self.signer.sign(claims)?;
        tracing::info!(
            "Issued wallet instance attestation valid until {}",
            signed.payload.expires_at
        );

        Ok(signed)
    }
}
