use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::StudentError;
use crate::core::models::student::NewStudent;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub name: String,
    pub father_name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        NewStudent {
            name: req.name,
            father_name: req.father_name,
            email: req.email,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

// Newtype wrapper for StudentError to implement IntoResponse
pub struct ApiError(pub StudentError);

impl From<StudentError> for ApiError {
    fn from(err: StudentError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            StudentError::InvalidPayload(_) | StudentError::InvalidEmail(_) | StudentError::InvalidInput(..) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // Creation failures are reported as client errors, listing failures as server errors.
            StudentError::NotCreated | StudentError::Create(_) => StatusCode::BAD_REQUEST,
            StudentError::List(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { detail: self.0.to_string() })).into_response()
    }
}
