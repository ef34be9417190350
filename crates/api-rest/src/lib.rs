//! # API REST
//!
//! REST API implementation for Surveylytic.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, download headers)
//!
//! Uses `api-shared` for request/response types. The binary that binds a
//! listener lives in the workspace root (`surveylytic-run`).

#![warn(rust_2018_idioms)]

use api_shared::{
    ErrorRes, HealthRes, HealthService, ListResponsesRes, ResponseFilterParams, SubmitResponseReq,
    SubmitResponseRes, SummaryParams, SummaryRes, ValidationErrorRes,
};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use survey_core::{SubmissionOutcome, SurveyAnswers, SurveyError, SurveyService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
struct AppState {
    survey_service: SurveyService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        summary,
        computed_summary,
        list_responses,
        export_responses,
        submit_response,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        SummaryRes,
        api_shared::DayCountRes,
        api_shared::RatingCountRes,
        api_shared::AreaCountRes,
        ListResponsesRes,
        api_shared::ResponseRowRes,
        SubmitResponseReq,
        SubmitResponseRes,
        ValidationErrorRes,
        api_shared::FieldErrorRes,
    ))
)]
struct ApiDoc;

/// Builds the REST router around `survey_service`.
///
/// Routes:
/// - `GET /health`
/// - `GET /summary`, `GET /summary/computed`
/// - `GET /responses`, `POST /responses`
/// - `GET /responses/export`
/// - Swagger UI under `/swagger-ui`
pub fn router(survey_service: SurveyService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/summary", get(summary))
        .route("/summary/computed", get(computed_summary))
        .route("/responses", get(list_responses).post(submit_response))
        .route("/responses/export", get(export_responses))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { survey_service })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/summary",
    responses(
        (status = 200, description = "Dashboard statistics", body = SummaryRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Dashboard statistics as reported by the data source.
#[axum::debug_handler]
async fn summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryRes>, (StatusCode, &'static str)> {
    match state.survey_service.summary().await {
        Ok(summary) => Ok(Json(summary.into())),
        Err(e) => {
            tracing::error!("Fetch summary error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/summary/computed",
    params(SummaryParams),
    responses(
        (status = 200, description = "Statistics computed from stored responses", body = SummaryRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Dashboard statistics computed from the current response list.
#[axum::debug_handler]
async fn computed_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<SummaryRes>, (StatusCode, &'static str)> {
    match state.survey_service.computed_summary(params.started).await {
        Ok(summary) => Ok(Json(summary.into())),
        Err(e) => {
            tracing::error!("Compute summary error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/responses",
    params(ResponseFilterParams),
    responses(
        (status = 200, description = "Filtered survey responses", body = ListResponsesRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List survey responses matching the rating filter and comment search.
///
/// Rows keep the data source's order. Unrecognised rating values yield an
/// empty list rather than an error.
#[axum::debug_handler]
async fn list_responses(
    State(state): State<AppState>,
    Query(params): Query<ResponseFilterParams>,
) -> Result<Json<ListResponsesRes>, (StatusCode, &'static str)> {
    match state.survey_service.list(&params.to_query()).await {
        Ok(filtered) => Ok(Json(filtered.into())),
        Err(e) => {
            tracing::error!("List responses error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/responses/export",
    params(ResponseFilterParams),
    responses(
        (status = 200, description = "CSV download of the filtered responses", body = String, content_type = "text/csv"),
        (status = 500, description = "Internal server error")
    )
)]
/// Export the filtered responses as a CSV download.
#[axum::debug_handler]
async fn export_responses(
    State(state): State<AppState>,
    Query(params): Query<ResponseFilterParams>,
) -> Result<Response, (StatusCode, &'static str)> {
    match state
        .survey_service
        .export(&params.to_query(), chrono::Utc::now())
        .await
    {
        Ok(export) => {
            let headers = [
                (header::CONTENT_TYPE, export.content_type.to_string()),
                (header::CONTENT_DISPOSITION, export.content_disposition()),
            ];
            Ok((headers, export.body).into_response())
        }
        Err(e) => {
            tracing::error!("Export responses error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/responses",
    request_body = SubmitResponseReq,
    responses(
        (status = 201, description = "Survey accepted", body = SubmitResponseRes),
        (status = 200, description = "Preview mode, survey not processed", body = SubmitResponseRes),
        (status = 400, description = "Missing or invalid answers", body = ValidationErrorRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Submit a survey answer set.
#[axum::debug_handler]
async fn submit_response(
    State(state): State<AppState>,
    Json(req): Json<SubmitResponseReq>,
) -> Response {
    let answers = SurveyAnswers::from(req);
    match state.survey_service.submit(&answers).await {
        Ok(outcome) => {
            let status = match outcome {
                SubmissionOutcome::Accepted(_) => StatusCode::CREATED,
                SubmissionOutcome::Preview => StatusCode::OK,
            };
            (status, Json(SubmitResponseRes::from(outcome))).into_response()
        }
        Err(SurveyError::Validation(errors)) => {
            tracing::warn!("Rejected survey submission: {}", errors);
            (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorRes::from(&errors)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Submit response error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes {
                    message: "Internal error".into(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::time::Duration;
    use survey_core::source::{JsonFileSource, MockSurveySource};
    use tower::ServiceExt;

    fn app(preview_mode: bool) -> Router {
        let source = Arc::new(MockSurveySource::new(Duration::ZERO));
        router(SurveyService::with_source(source, preview_mode))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("body readable")
            .to_bytes()
            .to_vec();
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, json: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(app(false), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: HealthRes = serde_json::from_slice(&body).unwrap();
        assert!(health.ok);
    }

    #[tokio::test]
    async fn list_filters_by_rating() {
        let (status, body) = send(app(false), get("/responses?satisfaction=5")).await;
        assert_eq!(status, StatusCode::OK);
        let res: ListResponsesRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.total, 10);
        let ids: Vec<&str> = res.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["resp-001", "resp-004", "resp-007"]);
    }

    #[tokio::test]
    async fn list_searches_comments_case_insensitively() {
        let (_, body) = send(app(false), get("/responses?search=SHIPPING")).await;
        let res: ListResponsesRes = serde_json::from_slice(&body).unwrap();
        let ids: Vec<&str> = res.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["resp-001"]);
    }

    #[tokio::test]
    async fn malformed_rating_yields_empty_list() {
        let (status, body) = send(app(false), get("/responses?satisfaction=great")).await;
        assert_eq!(status, StatusCode::OK);
        let res: ListResponsesRes = serde_json::from_slice(&body).unwrap();
        assert!(res.rows.is_empty());
    }

    #[tokio::test]
    async fn export_sets_download_headers() {
        let response = app(false)
            .oneshot(get("/responses/export?satisfaction=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_owned();
        assert!(disposition.starts_with("attachment; filename=\"survey_responses_"));
        assert!(disposition.ends_with(".csv\""));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("damaged"));
    }

    #[tokio::test]
    async fn summary_returns_fixed_statistics() {
        let (status, body) = send(app(false), get("/summary")).await;
        assert_eq!(status, StatusCode::OK);
        let res: SummaryRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.total_responses, 245);
        assert_eq!(res.completion_rate, "78%");
    }

    #[tokio::test]
    async fn computed_summary_accepts_started_count() {
        let (_, body) = send(app(false), get("/summary/computed?started=40")).await;
        let res: SummaryRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.total_responses, 10);
        assert_eq!(res.completion_rate, "25%");
    }

    #[tokio::test]
    async fn submit_accepts_complete_answers() {
        let req = serde_json::json!({
            "satisfaction": "4",
            "improvement": "shipping",
            "recommendation": "8",
            "comments": "Arrived on time"
        });
        let (status, body) = send(app(false), post_json("/responses", req)).await;
        assert_eq!(status, StatusCode::CREATED);
        let res: SubmitResponseRes = serde_json::from_slice(&body).unwrap();
        assert!(res.success);
        assert!(res.receipt_id.is_some());
    }

    #[tokio::test]
    async fn submit_reports_field_errors() {
        let req = serde_json::json!({
            "satisfaction": "",
            "improvement": "pricing",
            "recommendation": ""
        });
        let (status, body) = send(app(false), post_json("/responses", req)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let res: ValidationErrorRes = serde_json::from_slice(&body).unwrap();
        let fields: Vec<&str> = res.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["satisfaction", "recommendation"]);
    }

    #[tokio::test]
    async fn submit_in_preview_mode_is_not_processed() {
        let req = serde_json::json!({
            "satisfaction": "5",
            "improvement": "pricing",
            "recommendation": "10"
        });
        let (status, body) = send(app(true), post_json("/responses", req)).await;
        assert_eq!(status, StatusCode::OK);
        let res: SubmitResponseRes = serde_json::from_slice(&body).unwrap();
        assert!(res.preview);
        assert!(!res.success);
    }

    #[tokio::test]
    async fn source_failure_maps_to_internal_error() {
        let source = Arc::new(JsonFileSource::new("/nonexistent/responses.json"));
        let app = router(SurveyService::with_source(source, false));
        let (status, _) = send(app, get("/responses")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
