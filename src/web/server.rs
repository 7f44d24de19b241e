use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::catalog::store::LocusRegistry;
use crate::cli::ServeArgs;
use crate::core::types::ProfileLayout;
use crate::interpret::Interpreter;
use crate::parsing::detect::ParsedInput;
use crate::parsing::profile::parse_profile_text;
use crate::parsing::table::GenotypeTable;
use crate::utils::validation::{validate_text_content, MAX_INPUT_SIZE};

/// Request body limit: the largest accepted profile plus JSON overhead
pub const MAX_BODY_SIZE: usize = MAX_INPUT_SIZE + 64 * 1024;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;
/// Per-IP rate limit
pub const RATE_LIMIT_PER_SECOND: u64 = 10;
pub const RATE_LIMIT_BURST: u32 = 50;

/// Shared application state
pub struct AppState {
    pub registry: LocusRegistry,
}

/// Body of `POST /api/interpret`
///
/// Either a map of locus name (key or gene id) to genotype code, or the text of
/// an exported trait profile.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InterpretRequest {
    Genotypes {
        genotypes: HashMap<String, String>,
    },
    Report {
        report: String,
        #[serde(default)]
        layout: Option<ProfileLayout>,
    },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// Create an error response without leaking internal details
///
/// The internal error, if any, is only logged server-side.
pub fn create_safe_error_response(
    status: StatusCode,
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> Response {
    if let Some(internal_msg) = internal_error {
        tracing::warn!("Rejected request ({}): {}", error_type, internal_msg);
    }

    (
        status,
        Json(ErrorResponse {
            error: user_message.to_string(),
            error_type: error_type.to_string(),
        }),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// Per-IP rate limiting needs the peer address, so it is added by the server
/// itself rather than here.
///
/// # Errors
///
/// Returns an error if the locus catalog cannot be loaded.
pub fn create_router() -> anyhow::Result<Router> {
    let registry = LocusRegistry::load_embedded()?;
    Ok(create_router_with_registry(registry))
}

/// Create the application router around an already loaded registry
pub fn create_router_with_registry(registry: LocusRegistry) -> Router {
    let state = Arc::new(AppState { registry });

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/interpret", post(interpret_handler))
        .route("/api/loci", get(loci_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?;

    let app = create_router()?.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting coat-decoder web server at http://{addr}");
    info!(%addr, "Web server listening");

    if args.open {
        let _ = open::that(format!("http://{addr}/api/loci"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler() -> &'static str {
    "ok"
}

/// API endpoint for interpreting genotypes
async fn interpret_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InterpretRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            return create_safe_error_response(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                "Request body must be a JSON object with either 'genotypes' or 'report'",
                Some(&rejection.body_text()),
            );
        }
    };

    let parsed = match request {
        InterpretRequest::Genotypes { genotypes } => {
            GenotypeTable::from_pairs(genotypes.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .map(ParsedInput::Table)
        }
        InterpretRequest::Report { report, layout } => {
            if let Err(e) = validate_text_content(report.as_bytes()) {
                return create_safe_error_response(
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    &e.to_string(),
                    None,
                );
            }
            parse_profile_text(&report, layout).map(ParsedInput::Profile)
        }
    };

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            return create_safe_error_response(
                StatusCode::BAD_REQUEST,
                "parse_error",
                &e.to_string(),
                None,
            );
        }
    };

    let report = Interpreter::new(&state.registry).interpret(&parsed);
    Json(report).into_response()
}

async fn loci_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let loci: Vec<serde_json::Value> = state
        .registry
        .entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "locus": e.locus,
                "gene": e.locus.gene_id(),
                "label": e.locus.label(),
                "group": e.group(),
                "semantics": e.semantics,
                "codes": e.codes,
                "description": e.description,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": loci.len(),
        "loci": loci,
    }))
}
