use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;
use wallet_provider_core::error::{ErrorCode, ErrorCodeMixin};
use wallet_provider_core::service::wallet_unit_attestation::error::WalletUnitAttestationError;

use super::error::{ErrorResponseRestDTO, ErrorsResponseRestDTO};

#[derive(utoipa::IntoResponses)]
pub(crate) enum ErrorResponse {
    #[response(status = 400, description = "Bad Request")]
    BadRequest(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 500, description = "Internal error")]
    ServerError(#[to_schema] ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic() -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            error: ErrorCode::InternalError.into(),
        })
    }

    #[track_caller]
    fn from_error(error: impl ErrorCodeMixin + Display, action_description: &str) -> Self {
        let code = error.error_code();
        let response = ErrorResponseRestDTO { error: code.into() };
        if code.is_internal() {
            let location = std::panic::Location::caller();
            tracing::error!(%error, %location, "Error while {action_description}");
            Self::ServerError(response)
        } else {
            Self::BadRequest(response)
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
            Self::ServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

#[derive(utoipa::IntoResponses)]
pub(crate) enum ErrorsResponse {
    #[response(status = 400, description = "Bad Request")]
    BadRequest(#[to_schema] ErrorsResponseRestDTO),
    #[response(status = 500, description = "Internal error")]
    ServerError(#[to_schema] ErrorsResponseRestDTO),
}

impl ErrorsResponse {
    #[track_caller]
    fn from_error(error: WalletUnitAttestationError, action_description: &str) -> Self {
        let codes = error.error_codes();
        let response = ErrorsResponseRestDTO {
            errors: codes.iter().copied().map(Into::into).collect(),
        };
        if codes.iter().any(ErrorCode::is_internal) {
            let location = std::panic::Location::caller();
            tracing::error!(%error, %location, "Error while {action_description}");
            Self::ServerError(response)
        } else {
            Self::BadRequest(response)
        }
    }
}

impl IntoResponse for ErrorsResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::BadRequest(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::ServerError(errors) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(errors)).into_response()
            }
        }
    }
}

fn with_error_responses<SuccessResponse: utoipa::IntoResponses, Error: utoipa::IntoResponses>()
-> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
    let mut responses = SuccessResponse::responses();
    responses.append(&mut Error::responses());
    responses
}

#[derive(utoipa::IntoResponses)]
#[response(status = 200, description = "OK")]
struct SuccessResponse<T: ToSchema>(#[to_schema] T);

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, impl ErrorCodeMixin + Display>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_error(error, action_description)),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        with_error_responses::<SuccessResponse<T>, ErrorResponse>()
    }
}

pub(crate) enum OkOrErrorsResponse<T> {
    Ok(T),
    Error(ErrorsResponse),
}

impl<T> OkOrErrorsResponse<T> {
    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, WalletUnitAttestationError>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::Ok(value.into()),
            Err(error) => Self::Error(ErrorsResponse::from_error(error, action_description)),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorsResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(errors) => errors.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorsResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        with_error_responses::<SuccessResponse<T>, ErrorsResponse>()
    }
}

pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic().into_response()
}
