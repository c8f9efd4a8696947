use crate::{
    api::models::*,
    core::{errors::StudentError, models::student::Student, services::StudentService},
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use std::sync::Arc;

pub const ROOT_MESSAGE: &str = "Student Data Entry API is running";

// Define API routes
pub fn api_routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/students", get(list_students).post(create_student))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    )
)]
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Student created", body = Student),
        (status = 400, description = "Store failed to create the student", body = ErrorResponse),
        (status = 422, description = "Malformed payload or invalid email", body = ErrorResponse)
    )
)]
pub async fn create_student(
    State(service): State<Arc<StudentService>>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Json(req) = payload.map_err(|rejection| StudentError::InvalidPayload(rejection.body_text()))?;
    let student = service.create_student(req.into()).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students, newest first", body = [Student]),
        (status = 500, description = "Store failed to list students", body = ErrorResponse)
    )
)]
pub async fn list_students(State(service): State<Arc<StudentService>>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = service.list_students().await?;
    Ok(Json(students))
}
