use actix_web::{dev::Payload, http::header, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::auth::application::helpers::{AuthRejection, Authenticator};
use crate::shared::api::ApiResponse;

/// The caller behind a valid bearer token, reloaded from the identity store.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Caller);

impl AuthenticatedUser {
    pub fn caller(&self) -> &Caller {
        &self.0
    }

    pub fn into_caller(self) -> Caller {
        self.0
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

pub fn rejection_response(rejection: &AuthRejection) -> HttpResponse {
    match rejection {
        AuthRejection::MissingToken => ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ),
        AuthRejection::InvalidToken => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        AuthRejection::UnknownUser => {
            ApiResponse::unauthorized("UNKNOWN_USER", "User no longer exists")
        }
        AuthRejection::Suspended => {
            ApiResponse::forbidden("ACCOUNT_SUSPENDED", "This account has been suspended")
        }
        AuthRejection::RepositoryError(msg) => {
            error!(error = %msg, "Failed to load caller during authentication");
            ApiResponse::internal_error()
        }
    }
}

pub fn policy_violation_response(violation: &PolicyViolation) -> HttpResponse {
    ApiResponse::forbidden(violation.code(), &violation.to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticator = req.app_data::<web::Data<Authenticator>>().cloned();
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let Some(authenticator) = authenticator else {
                error!("Authenticator is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            authenticator
                .authenticate(authorization.as_deref())
                .await
                .map(AuthenticatedUser)
                .map_err(|rejection| {
                    if !matches!(rejection, AuthRejection::RepositoryError(_)) {
                        warn!(reason = %rejection, "Request rejected by authenticator");
                    }
                    create_api_error(rejection_response(&rejection))
                })
        })
    }
}
