use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use utoipa::{OpenApi, ToSchema};

use crate::catalog::models::{
    AnalyticsReport, AnomalyRecord, ArgoFloat, ChatData, ChatReply, ChatRequest,
    CoverageStatistics, FloatListResponse, FloatStatus, MonthlyTrendPoint, PatternRecord, Profile,
    ProfileSample, ProfileSummary, QcSummary, RegionSummary, Severity, TrackPoint, TsPoint,
};
use crate::services::analytics_service::AnalyticsParams;
use crate::services::chat_service::ChatError;
use crate::services::float_service::FloatFilterParams;
use crate::services::{AnalyticsService, ChatService, FloatService, ProfileService};

#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
    pub analytics_service: AnalyticsService,
    pub chat_service: ChatService,
    pub float_service: FloatService,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/profiles", get(list_profiles))
        .route("/profiles/{id}", get(get_profile))
        .route("/profiles/{id}/qc-summary", get(get_qc_summary))
        .route("/profiles/{id}/ts-points", get(get_ts_points))
        .route("/analytics", get(get_analytics))
        .route("/floats", get(get_floats))
        .route("/chat", post(post_chat))
        .with_state(state);

    Router::new().nest("/api/v1", api_routes)
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    responses((status = 200, description = "Summaries of the seeded profiles", body = [ProfileSummary]))
)]
#[instrument(skip(state))]
async fn list_profiles(State(state): State<AppState>) -> Json<Vec<ProfileSummary>> {
    let summaries = state.profile_service.list_profiles();
    info!("Listed {} profiles", summaries.len());
    Json(summaries)
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Full vertical profile", body = Profile),
        (status = 404, description = "Unknown profile id")
    )
)]
#[instrument(skip(state), fields(profile_id = %id))]
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, StatusCode> {
    debug!("Fetching profile {}", id);
    let profile = state.profile_service.get_profile(&id).ok_or_else(|| {
        warn!("Profile {} not found", id);
        StatusCode::NOT_FOUND
    })?;

    info!(
        "Retrieved profile {} for float {} with {} samples",
        id,
        profile.float_id,
        profile.samples.len()
    );
    Ok(Json(profile.clone()))
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}/qc-summary",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Sample counts per QC tier", body = QcSummary),
        (status = 404, description = "Unknown profile id")
    )
)]
#[instrument(skip(state), fields(profile_id = %id))]
async fn get_qc_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QcSummary>, StatusCode> {
    debug!("Tallying QC flags for profile {}", id);
    let summary = state.profile_service.qc_summary(&id).ok_or_else(|| {
        warn!("Profile {} not found", id);
        StatusCode::NOT_FOUND
    })?;

    info!(
        "QC summary for profile {}: {} good, {} bad",
        id, summary.good, summary.bad
    );
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}/ts-points",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "T-S diagram points for the profile", body = [TsPoint]),
        (status = 404, description = "Unknown profile id")
    )
)]
#[instrument(skip(state), fields(profile_id = %id))]
async fn get_ts_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TsPoint>>, StatusCode> {
    debug!("Building T-S series for profile {}", id);
    let points = state.profile_service.ts_points(&id).ok_or_else(|| {
        warn!("Profile {} not found", id);
        StatusCode::NOT_FOUND
    })?;

    info!("Built {} T-S points for profile {}", points.len(), id);
    Ok(Json(points))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    params(AnalyticsParams),
    responses((status = 200, description = "Freshly regenerated analytics report", body = AnalyticsReport))
)]
#[instrument(
    skip(state, params),
    fields(
        time_range = %params.time_range,
        analysis_type = %params.analysis_type,
        region = %params.region
    )
)]
async fn get_analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> Json<AnalyticsReport> {
    debug!("Regenerating analytics report");
    let report = state.analytics_service.generate();
    info!(
        "Generated analytics report: {} trend points, {} regions, {} anomalies",
        report.temporal.len(),
        report.spatial.len(),
        report.anomalies.len()
    );
    Json(report)
}

#[utoipa::path(
    get,
    path = "/api/v1/floats",
    params(FloatFilterParams),
    responses((status = 200, description = "Floats matching the filter", body = FloatListResponse))
)]
#[instrument(
    skip(state, params),
    fields(status = %params.status, min_profiles = %params.min_profiles, region = %params.region)
)]
async fn get_floats(
    State(state): State<AppState>,
    Query(params): Query<FloatFilterParams>,
) -> Json<FloatListResponse> {
    debug!("Filtering float list");
    let response = state.float_service.filtered(&params);
    info!(
        "Matched {} of {} floats",
        response.matched, response.total_floats
    );
    Json(response)
}

#[utoipa::path(
    post,
    path = "/api/v1/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Canned reply for the message", body = ChatReply),
        (status = 204, description = "Blank input, ignored"),
        (status = 429, description = "A previous request is still pending")
    )
)]
#[instrument(skip(state, request))]
async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, StatusCode> {
    debug!("Chat message received");
    match state.chat_service.respond(&request.message).await {
        Ok(Some(reply)) => {
            info!(
                "Chat reply {} generated with {} suggestions",
                reply.id,
                reply.suggestions.len()
            );
            Ok((StatusCode::OK, Json(reply)).into_response())
        }
        Ok(None) => {
            debug!("Ignoring blank chat submission");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(ChatError::Busy) => {
            warn!("Rejecting chat message: previous request still pending");
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_profiles,
        get_profile,
        get_qc_summary,
        get_ts_points,
        get_analytics,
        get_floats,
        post_chat
    ),
    components(schemas(
        HealthResponse,
        Profile,
        ProfileSample,
        ProfileSummary,
        QcSummary,
        TsPoint,
        AnalyticsReport,
        MonthlyTrendPoint,
        RegionSummary,
        AnomalyRecord,
        PatternRecord,
        CoverageStatistics,
        Severity,
        ArgoFloat,
        TrackPoint,
        FloatStatus,
        FloatListResponse,
        ChatRequest,
        ChatReply,
        ChatData
    ))
)]
struct ApiDoc;

pub fn generate_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
