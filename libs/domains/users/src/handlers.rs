use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    ApiError, IdPath, ResultExt, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use futures::TryStreamExt;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::mapper;
use crate::models::{UserRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(save, find_all, find_by_id, update, delete),
    components(
        schemas(UserRequest, UserResponse),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Users router. Mount it under `/users`:
///
/// | Verb | Path | |
/// |---|---|---|
/// | POST | `/` | 201, empty body |
/// | GET | `/` | 200, array |
/// | GET | `/{id}` | 200 or 404 |
/// | PATCH | `/{id}` | 200, updated user |
/// | DELETE | `/{id}` | 200, empty body |
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(find_all).post(save))
        .route("/{id}", get(find_by_id).patch(update).delete(delete))
        .with_state(shared_service)
}

/// Create a user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<StatusCode, ApiError> {
    service.save(request).await.at_path(uri.path())?;
    Ok(StatusCode::CREATED)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_all<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users: Vec<UserResponse> = service
        .find_all()
        .map_ok(|user| mapper::to_response(&user))
        .try_collect()
        .await
        .at_path(uri.path())?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_by_id<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service.find_by_id(&id).await.at_path(uri.path())?;
    Ok(Json(mapper::to_response(&user)))
}

/// Update a user
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service.update(&id, request).await.at_path(uri.path())?;
    Ok(Json(mapper::to_response(&user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    service.delete(&id).await.at_path(uri.path())?;
    Ok(StatusCode::OK)
}
