use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A registration record as held by the store. `id` and `created_at` are
/// assigned by the store and never come from a client.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub father_name: String,
    pub email: String,
    #[schema(example = "2024-06-01T12:34:56.123456+00:00")]
    pub created_at: String,
}

/// The client-supplied part of a record, checked before any write.
#[derive(Clone, Debug, Serialize, Validate, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub father_name: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
}
