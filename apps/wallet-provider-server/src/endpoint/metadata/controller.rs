use axum::Json;
use axum::extract::State;

use super::dto::{JwkSetRestDTO, ProtectedResourceMetadataRestDTO};
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/.well-known/oauth-protected-resource",
    responses(
        (status = 200, description = "OK", body = ProtectedResourceMetadataRestDTO),
    ),
    tag = "metadata",
    summary = "Protected resource metadata",
    description = "Returns the OAuth 2.0 protected resource metadata of the wallet provider.",
)]
pub(crate) async fn get_protected_resource_metadata(
    state: State<AppState>,
) -> Json<ProtectedResourceMetadataRestDTO> {
    Json(
        state
            .core
            .metadata_service
            .protected_resource_metadata()
            .into(),
    )
}

#[utoipa::path(
    get,
    path = "/jwks",
    responses(OkOrErrorResponse<JwkSetRestDTO>),
    tag = "metadata",
    summary = "Signing keys",
    description = "Returns the public key used to sign challenges and attestations.",
)]
pub(crate) async fn get_jwks(state: State<AppState>) -> OkOrErrorResponse<JwkSetRestDTO> {
    let result = state.core.metadata_service.jwks();
    OkOrErrorResponse::from_result(result, "building JWK set")
}
