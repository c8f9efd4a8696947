use utoipa::OpenApi;

use crate::{
    api::models::{CreateStudentRequest, ErrorResponse, RootResponse},
    core::models::student::Student,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::read_root,
        super::handlers::create_student,
        super::handlers::list_students
    ),
    components(schemas(CreateStudentRequest, RootResponse, ErrorResponse, Student)),
    info(
        title = "Data Entry 123 - Student Data Entry API",
        description = "Registers students and lists them newest first",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
