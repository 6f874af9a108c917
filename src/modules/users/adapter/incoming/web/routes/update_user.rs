use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::user_dto::UserDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::{UpdateUserError, UpdateUserRequest};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserDto {
    /// New email address
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    /// New full name
    #[schema(example = "Alice Example")]
    pub full_name: Option<String>,

    /// New password
    pub password: Option<String>,

    /// Account status (superuser only)
    pub is_active: Option<bool>,
}

/// Update a user (self or superuser)
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<UserDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to update this user", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/{user_id}")]
pub async fn update_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<UpdateUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let dto = req.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let request = UpdateUserRequest {
        email: dto.email,
        full_name: dto.full_name,
        password: dto.password,
        is_active: dto.is_active,
    };

    match data
        .update_user_use_case
        .execute(&principal, user_id, request)
        .await
    {
        Ok(user) => ApiResponse::success(UserDto::from(user)),

        Err(UpdateUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(UpdateUserError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to update this user")
        }

        Err(UpdateUserError::SuperuserRequired) => ApiResponse::forbidden(
            "SUPERUSER_REQUIRED",
            "Only a superuser may make this status change",
        ),

        Err(UpdateUserError::InvalidEmail) => {
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", "Invalid email format")
        }

        Err(UpdateUserError::WeakPassword(violations)) => {
            let msgs: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", &msgs.join("; "))
        }

        Err(UpdateUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email address is already registered")
        }

        Err(UpdateUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(UpdateUserError::RepositoryError(ref e)) => {
            error!(error = %e, user_id, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}
