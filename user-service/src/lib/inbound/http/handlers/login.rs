use auth::AuthenticationError;
use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<AuthTokenResponseData>, ApiError> {
    let (username, password) = body.credentials()?;

    // An unknown username and a wrong password must be indistinguishable
    // in the response, so every failure below collapses to the same 401.
    let username = Username::new(username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let claims = Claims::for_user((&user).into(), state.token_ttl_days);

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, &claims)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthenticationError::Jwt(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthTokenResponseData {
            auth_token: result.access_token,
        },
    ))
}

/// HTTP request body for login.
///
/// Loose JSON values: a request without a well-formed credentials object
/// is a plain bad request, before any lookup happens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: Option<serde_json::Value>,
    password: Option<serde_json::Value>,
}

impl LoginRequestBody {
    fn credentials(self) -> Result<(String, String), ApiError> {
        let username = self.username.as_ref().and_then(|v| v.as_str());
        let password = self.password.as_ref().and_then(|v| v.as_str());

        match (username, password) {
            (Some(username), Some(password)) => Ok((username.to_string(), password.to_string())),
            _ => Err(ApiError::BadRequest("Bad Request".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthTokenResponseData {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}
