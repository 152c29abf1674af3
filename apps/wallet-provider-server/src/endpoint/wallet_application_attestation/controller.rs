use axum::Json;
use axum::extract::State;

use super::dto::{
    WalletApplicationAttestationAndroidRequestRestDTO, WalletApplicationAttestationIosRequestRestDTO,
    WalletApplicationAttestationJwkRequestRestDTO, WalletApplicationAttestationResponseRestDTO,
};
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/wallet-application-attestation/platform-key-attestation/android",
    request_body = WalletApplicationAttestationAndroidRequestRestDTO,
    responses(OkOrErrorResponse<WalletApplicationAttestationResponseRestDTO>),
    tag = "wallet_application_attestation",
    summary = "Issue a wallet application attestation for an Android Keystore key",
)]
pub(crate) async fn issue_with_android_key_attestation(
    state: State<AppState>,
    Json(request): Json<WalletApplicationAttestationAndroidRequestRestDTO>,
) -> OkOrErrorResponse<WalletApplicationAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_application_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorResponse::from_result(result, "issuing wallet application attestation")
}

#[utoipa::path(
    post,
    path = "/wallet-application-attestation/platform-key-attestation/ios",
    request_body = WalletApplicationAttestationIosRequestRestDTO,
    responses(OkOrErrorResponse<WalletApplicationAttestationResponseRestDTO>),
    tag = "wallet_application_attestation",
    summary = "Issue a wallet application attestation for an iOS App Attest key",
)]
pub(crate) async fn issue_with_ios_key_attestation(
    state: State<AppState>,
    Json(request): Json<WalletApplicationAttestationIosRequestRestDTO>,
) -> OkOrErrorResponse<WalletApplicationAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_application_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorResponse::from_result(result, "issuing wallet application attestation")
}

#[utoipa::path(
    post,
    path = "/wallet-application-attestation/jwk",
    request_body = WalletApplicationAttestationJwkRequestRestDTO,
    responses(OkOrErrorResponse<WalletApplicationAttestationResponseRestDTO>),
    tag = "wallet_application_attestation",
    summary = "Issue a wallet application attestation for a bare JWK",
    description = "The key is attested without platform evidence, no challenge is required.",
)]
pub(crate) async fn issue_with_jwk(
    state: State<AppState>,
    Json(request): Json<WalletApplicationAttestationJwkRequestRestDTO>,
) -> OkOrErrorResponse<WalletApplicationAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_application_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorResponse::from_result(result, "issuing wallet application attestation")
}
