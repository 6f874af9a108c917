use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_dto::UserDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::CreateUserError;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserDto {
    /// Email address
    #[schema(example = "alice@example.com")]
    pub email: String,

    /// Full name
    #[schema(example = "Alice Example")]
    pub full_name: String,

    /// Password (min 8 chars, upper, lower, digit)
    #[schema(example = "Sup3rSecret")]
    pub password: String,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserDto>)),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/users")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Registration attempt");

    match data
        .create_user_use_case
        .execute(dto.email, dto.full_name, dto.password)
        .await
    {
        Ok(user) => ApiResponse::created(UserDto::from(user)),

        Err(CreateUserError::InvalidEmail) => {
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", "Invalid email format")
        }

        Err(CreateUserError::WeakPassword(violations)) => {
            let msgs: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", &msgs.join("; "))
        }

        Err(CreateUserError::EmailAlreadyExists) => {
            warn!("Registration failed: email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email address is already registered")
        }

        Err(CreateUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(CreateUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to persist user");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::password_policy::PolicyViolation;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::users::application::domain::User;
    use crate::users::application::use_cases::ICreateUserUseCase;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockCreateUserSuccess;

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUserSuccess {
        async fn execute(
            &self,
            email: String,
            full_name: String,
            _password: String,
        ) -> Result<User, CreateUserError> {
            Ok(User {
                id: 1,
                email,
                full_name,
                hashed_password: "hash".to_string(),
                is_active: true,
                is_superuser: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
                last_login: None,
            })
        }
    }

    struct MockCreateUserDuplicate;

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUserDuplicate {
        async fn execute(
            &self,
            _email: String,
            _full_name: String,
            _password: String,
        ) -> Result<User, CreateUserError> {
            Err(CreateUserError::EmailAlreadyExists)
        }
    }

    struct MockCreateUserWeakPassword;

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUserWeakPassword {
        async fn execute(
            &self,
            _email: String,
            _full_name: String,
            _password: String,
        ) -> Result<User, CreateUserError> {
            Err(CreateUserError::WeakPassword(vec![
                PolicyViolation::TooShort { minimum: 8 },
                PolicyViolation::MissingDigit,
            ]))
        }
    }

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "email": "alice@example.com",
            "full_name": "Alice Example",
            "password": "Sup3rSecret"
        })
    }

    #[actix_web::test]
    async fn test_register_user_created() {
        let app_state = TestAppStateBuilder::default()
            .with_create_user(MockCreateUserSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(&request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["email"], "alice@example.com");
        assert_eq!(body["data"]["is_active"], true);
        assert!(body["data"].get("hashed_password").is_none());
    }

    #[actix_web::test]
    async fn test_register_user_duplicate_email() {
        let app_state = TestAppStateBuilder::default()
            .with_create_user(MockCreateUserDuplicate)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(&request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_register_user_weak_password_lists_all_violations() {
        let app_state = TestAppStateBuilder::default()
            .with_create_user(MockCreateUserWeakPassword)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(&request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("at least 8 characters"));
        assert!(message.contains("digit"));
    }
}
