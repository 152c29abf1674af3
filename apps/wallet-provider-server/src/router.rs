use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::Request;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use wallet_provider_core::WalletProviderCore;
use wallet_provider_core::config::core_config::AppConfig;

use crate::ServerConfig;
use crate::dto::response::handle_panic;
use crate::endpoint::{
    self, challenge, metadata, wallet_application_attestation, wallet_instance_attestation,
    wallet_unit_attestation,
};

pub(crate) struct InternalAppState {
    pub core: WalletProviderCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener non-blocking");

    let core = WalletProviderCore::new(config.core)
        .await
        .expect("Failed to initialize wallet provider");

    let state: AppState = Arc::new(InternalAppState {
        core,
        config: Arc::new(config.app),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Failed to start axum server");

    info!("Server stopped");
}

fn router(state: AppState) -> Router {
    let wallet_instance_attestation = Router::new()
        .route(
            "/platform-key-attestation/android",
            post(wallet_instance_attestation::controller::issue_with_android_key_attestation),
        )
        .route(
            "/platform-key-attestation/ios",
            post(wallet_instance_attestation::controller::issue_with_ios_key_attestation),
        )
        .route(
            "/jwk",
            post(wallet_instance_attestation::controller::issue_with_jwk),
        );

    let wallet_application_attestation = Router::new()
        .route(
            "/platform-key-attestation/android",
            post(wallet_application_attestation::controller::issue_with_android_key_attestation),
        )
        .route(
            "/platform-key-attestation/ios",
            post(wallet_application_attestation::controller::issue_with_ios_key_attestation),
        )
        .route(
            "/jwk",
            post(wallet_application_attestation::controller::issue_with_jwk),
        );

    let wallet_unit_attestation = Router::new()
        .route(
            "/platform-key-attestation/android",
            post(wallet_unit_attestation::controller::issue_with_android_key_attestations),
        )
        .route(
            "/platform-key-attestation/ios",
            post(wallet_unit_attestation::controller::issue_with_ios_key_attestations),
        )
        .route(
            "/jwk-set",
            post(wallet_unit_attestation::controller::issue_with_jwk_set),
        );

    let mut router = Router::new()
        .route("/challenge", post(challenge::controller::generate_challenge))
        .nest("/wallet-instance-attestation", wallet_instance_attestation)
        .nest(
            "/wallet-application-attestation",
            wallet_application_attestation,
        )
        .nest("/wallet-unit-attestation", wallet_unit_attestation)
        .route(
            "/.well-known/oauth-protected-resource",
            get(metadata::controller::get_protected_resource_metadata),
        )
        .route("/jwks", get(metadata::controller::get_jwks))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        path = request.uri().path(),
                        service = "wallet-provider",
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // errors are logged by the response mapping
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        );

    if state.config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::challenge::controller::generate_challenge,

            endpoint::wallet_instance_attestation::controller::issue_with_android_key_attestation,
            endpoint::wallet_instance_attestation::controller::issue_with_ios_key_attestation,
            endpoint::wallet_instance_attestation::controller::issue_with_jwk,

            endpoint::wallet_application_attestation::controller::issue_with_android_key_attestation,
            endpoint::wallet_application_attestation::controller::issue_with_ios_key_attestation,
            endpoint::wallet_application_attestation::controller::issue_with_jwk,

            endpoint::wallet_unit_attestation::controller::issue_with_android_key_attestations,
            endpoint::wallet_unit_attestation::controller::issue_with_ios_key_attestations,
            endpoint::wallet_unit_attestation::controller::issue_with_jwk_set,

            endpoint::metadata::controller::get_protected_resource_metadata,
            endpoint::metadata::controller::get_jwks,
        ),
        components(
            schemas(
                endpoint::challenge::dto::ChallengeResponseRestDTO,

                endpoint::wallet_instance_attestation::dto::WalletInstanceAttestationAndroidRequestRestDTO,
                endpoint::wallet_instance_attestation::dto::WalletInstanceAttestationIosRequestRestDTO,
                endpoint::wallet_instance_attestation::dto::WalletInstanceAttestationJwkRequestRestDTO,
                endpoint::wallet_instance_attestation::dto::WalletInstanceAttestationResponseRestDTO,

                endpoint::wallet_application_attestation::dto::WalletApplicationAttestationAndroidRequestRestDTO,
                endpoint::wallet_application_attestation::dto::WalletApplicationAttestationIosRequestRestDTO,
                endpoint::wallet_application_attestation::dto::WalletApplicationAttestationJwkRequestRestDTO,
                endpoint::wallet_application_attestation::dto::WalletApplicationAttestationResponseRestDTO,

                endpoint::wallet_unit_attestation::dto::WalletUnitAttestationAndroidRequestRestDTO,
                endpoint::wallet_unit_attestation::dto::WalletUnitAttestationIosRequestRestDTO,
                endpoint::wallet_unit_attestation::dto::WalletUnitAttestationJwkSetRequestRestDTO,
                endpoint::wallet_unit_attestation::dto::JwkSetRequestRestDTO,
                endpoint::wallet_unit_attestation::dto::WalletUnitAttestationResponseRestDTO,

                endpoint::metadata::dto::JwkSetRestDTO,
                endpoint::metadata::dto::ProtectedResourceMetadataRestDTO,

                crate::dto::common::AndroidKeystoreAttestationRestDTO,
                crate::dto::common::IosAppAttestationRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorsResponseRestDTO,
                crate::dto::error::ErrorCodeRestEnum,
            )
        ),
        tags(
            (name = "challenge", description = "Challenge issuance"),
            (name = "wallet_instance_attestation", description = "Wallet instance attestation issuance"),
            (name = "wallet_application_attestation", description = "Wallet application attestation issuance"),
            (name = "wallet_unit_attestation", description = "Wallet unit attestation issuance"),
            (name = "metadata", description = "Protected resource metadata and signing keys"),
        ),
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}
