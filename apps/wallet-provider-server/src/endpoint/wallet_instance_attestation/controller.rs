use axum::Json;
use axum::extract::State;

use super::dto::{
    WalletInstanceAttestationAndroidRequestRestDTO, WalletInstanceAttestationIosRequestRestDTO,
    WalletInstanceAttestationJwkRequestRestDTO, WalletInstanceAttestationResponseRestDTO,
};
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/wallet-instance-attestation/platform-key-attestation/android",
    request_body = WalletInstanceAttestationAndroidRequestRestDTO,
    responses(OkOrErrorResponse<WalletInstanceAttestationResponseRestDTO>),
    tag = "wallet_instance_attestation",
    summary = "Issue a wallet instance attestation for an Android Keystore key",
)]
pub(crate) async fn issue_with_android_key_attestation(
    state: State<AppState>,
    Json(request): Json<WalletInstanceAttestationAndroidRequestRestDTO>,
) -> OkOrErrorResponse<WalletInstanceAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_instance_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorResponse::from_result(result, "issuing wallet instance attestation")
}

#[utoipa::path(
    post,
    path = "/wallet-instance-attestation/platform-key-attestation/ios",
    request_body = WalletInstanceAttestationIosRequestRestDTO,
    responses(OkOrErrorResponse<WalletInstanceAttestationResponseRestDTO>),
    tag = "wallet_instance_attestation",
    summary = "Issue a wallet instance attestation for an iOS App Attest key",
)]
pub(crate) async fn issue_with_ios_key_attestation(
    state: State<AppState>,
    Json(request): Json<WalletInstanceAttestationIosRequestRestDTO>,
) -> OkOrErrorResponse<WalletInstanceAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_instance_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorResponse::from_result(result, "issuing wallet instance attestation")
}

#[utoipa::path(
    post,
    path = "/wallet-instance-attestation/jwk",
    request_body = WalletInstanceAttestationJwkRequestRestDTO,
    responses(OkOrErrorResponse<WalletInstanceAttestationResponseRestDTO>),
    tag = "wallet_instance_attestation",
    summary = "Issue a wallet instance attestation for a bare JWK",
    description = "The key is attested without platform evidence, no challenge is required.",
)]
pub(crate) async fn issue_with_jwk(
    state: State<AppState>,
    Json(request): Json<WalletInstanceAttestationJwkRequestRestDTO>,
) -> OkOrErrorResponse<WalletInstanceAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_instance_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorResponse::from_result(result, "issuing wallet instance attestation")
}
