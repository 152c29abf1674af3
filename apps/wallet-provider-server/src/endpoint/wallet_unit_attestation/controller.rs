use axum::Json;
use axum::extract::State;

use super::dto::{
    WalletUnitAttestationAndroidRequestRestDTO, WalletUnitAttestationIosRequestRestDTO,
    WalletUnitAttestationJwkSetRequestRestDTO, WalletUnitAttestationResponseRestDTO,
};
use crate::dto::response::OkOrErrorsResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/wallet-unit-attestation/platform-key-attestation/android",
    request_body = WalletUnitAttestationAndroidRequestRestDTO,
    responses(OkOrErrorsResponse<WalletUnitAttestationResponseRestDTO>),
    tag = "wallet_unit_attestation",
    summary = "Issue a wallet unit attestation for Android Keystore keys",
    description = "All key attestations are validated, every failure is reported.",
)]
pub(crate) async fn issue_with_android_key_attestations(
    state: State<AppState>,
    Json(request): Json<WalletUnitAttestationAndroidRequestRestDTO>,
) -> OkOrErrorsResponse<WalletUnitAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_unit_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorsResponse::from_result(result, "issuing wallet unit attestation")
}

#[utoipa::path(
    post,
    path = "/wallet-unit-attestation/platform-key-attestation/ios",
    request_body = WalletUnitAttestationIosRequestRestDTO,
    responses(OkOrErrorsResponse<WalletUnitAttestationResponseRestDTO>),
    tag = "wallet_unit_attestation",
    summary = "Issue a wallet unit attestation for iOS App Attest keys",
    description = "All key attestations are validated, every failure is reported.",
)]
pub(crate) async fn issue_with_ios_key_attestations(
    state: State<AppState>,
    Json(request): Json<WalletUnitAttestationIosRequestRestDTO>,
) -> OkOrErrorsResponse<WalletUnitAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_unit_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorsResponse::from_result(result, "issuing wallet unit attestation")
}

#[utoipa::path(
    post,
    path = "/wallet-unit-attestation/jwk-set",
    request_body = WalletUnitAttestationJwkSetRequestRestDTO,
    responses(OkOrErrorsResponse<WalletUnitAttestationResponseRestDTO>),
    tag = "wallet_unit_attestation",
    summary = "Issue a wallet unit attestation for a set of bare JWKs",
)]
pub(crate) async fn issue_with_jwk_set(
    state: State<AppState>,
    Json(request): Json<WalletUnitAttestationJwkSetRequestRestDTO>,
) -> OkOrErrorsResponse<WalletUnitAttestationResponseRestDTO> {
    let result = state
        .core
        .wallet_unit_attestation_service
        .issue(request.into())
        .await;
    OkOrErrorsResponse::from_result(result, "issuing wallet unit attestation")
}
