use axum::extract::State;

use super::dto::ChallengeResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/challenge",
    responses(OkOrErrorResponse<ChallengeResponseRestDTO>),
    tag = "challenge",
    summary = "Generate a challenge",
    description = indoc::formatdoc! {"
        Issues a short-lived challenge. The wallet binds it into a platform key
        attestation and redeems it with an attestation issuance request.
    "},
)]
pub(crate) async fn generate_challenge(
    state: State<AppState>,
) -> OkOrErrorResponse<ChallengeResponseRestDTO> {
    let result = state.core.challenge_service.generate();
    OkOrErrorResponse::from_result(result, "generating challenge")
}
