use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;

use super::domain::{ApplicationId, Step1Snapshot, Step2Snapshot, Step3Snapshot};
use super::repository::{ApplicationRepository, PetDirectory, RepositoryError};
use super::service::{AdoptionApplicationService, ApplicationServiceError};

/// Router builder exposing HTTP endpoints for the three-step flow.
pub fn adoption_router<R, P>(service: Arc<AdoptionApplicationService<R, P>>) -> Router
where
    R: ApplicationRepository + 'static,
    P: PetDirectory + 'static,
{
    Router::new()
        .route(
            "/api/v1/adoptions/:pet_slug/applications",
            post(begin_handler::<R, P>),
        )
        .route(
            "/api/v1/adoptions/applications/:application_id/living-situation",
            put(living_situation_handler::<R, P>),
        )
        .route(
            "/api/v1/adoptions/applications/:application_id/commitments",
            post(commitments_handler::<R, P>),
        )
        .route(
            "/api/v1/adoptions/applications/:application_id",
            get(status_handler::<R, P>),
        )
        .with_state(service)
}

pub(crate) async fn begin_handler<R, P>(
    State(service): State<Arc<AdoptionApplicationService<R, P>>>,
    Path(pet_slug): Path<String>,
    axum::Json(step1): axum::Json<Step1Snapshot>,
) -> Response
where
    R: ApplicationRepository + 'static,
    P: PetDirectory + 'static,
{
    match service.begin(&pet_slug, step1) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn living_situation_handler<R, P>(
    State(service): State<Arc<AdoptionApplicationService<R, P>>>,
    Path(application_id): Path<String>,
    axum::Json(step2): axum::Json<Step2Snapshot>,
) -> Response
where
    R: ApplicationRepository + 'static,
    P: PetDirectory + 'static,
{
    let id = ApplicationId(application_id);
    match service.record_living_situation(&id, step2) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn commitments_handler<R, P>(
    State(service): State<Arc<AdoptionApplicationService<R, P>>>,
    Path(application_id): Path<String>,
    axum::Json(step3): axum::Json<Step3Snapshot>,
) -> Response
where
    R: ApplicationRepository + 'static,
    P: PetDirectory + 'static,
{
    let id = ApplicationId(application_id);
    match service.finalize(&id, step3) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, P>(
    State(service): State<Arc<AdoptionApplicationService<R, P>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    P: PetDirectory + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::UnknownPet(_) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicationServiceError::IncompleteApplication => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_))
        | ApplicationServiceError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
