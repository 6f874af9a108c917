use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::Principal;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Claims-level identity extracted from a bearer token. This only proves
/// the token was signed by us; route handlers still resolve it to a
/// [`Principal`] so account state is checked against the current user row.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub is_superuser: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(
                    ApiResponse::could_not_validate_credentials(),
                )));
            }
        };

        // Every verification failure collapses into the same 401 body so
        // callers cannot probe which check failed.
        match jwt_service.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(
                        ApiResponse::could_not_validate_credentials(),
                    )));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    is_superuser: claims.is_superuser,
                }))
            }
            Err(_) => ready(Err(create_api_error(
                ApiResponse::could_not_validate_credentials(),
            ))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Resolve token claims to a live principal. The user row is re-read on
/// every request so deactivation takes effect immediately, not at token
/// expiry. Superuser status also comes from the row, never the claims.
pub async fn resolve_principal(
    data: &web::Data<AppState>,
    auth: &AuthenticatedUser,
) -> Result<Principal, HttpResponse> {
    match data.user_query.find_by_id(auth.user_id).await {
        Ok(Some(user)) => {
            if !user.is_active {
                return Err(ApiResponse::forbidden(
                    "INACTIVE_USER",
                    "User account is inactive",
                ));
            }

            Ok(Principal {
                user_id: user.id,
                is_superuser: user.is_superuser,
            })
        }

        Ok(None) => Err(ApiResponse::could_not_validate_credentials()),

        Err(e) => {
            tracing::error!(user_id = auth.user_id, error = %e, "failed to resolve principal");
            Err(ApiResponse::internal_error())
        }
    }
}
