use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

pub async fn create_user<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating a user.
///
/// Fields deserialize as loose JSON values so that a missing key and a key
/// of the wrong type produce different error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: Option<serde_json::Value>,
    password: Option<serde_json::Value>,
    fullname: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
enum ParseCreateUserRequestError {
    #[error("Missing 'username' in request body")]
    MissingUsername,

    #[error("Missing 'password' in request body")]
    MissingPassword,

    #[error("Field: 'username' must be type String")]
    UsernameNotAString,

    #[error("Field: 'password' must be type String")]
    PasswordNotAString,

    #[error(transparent)]
    Username(#[from] UsernameError),

    #[error(transparent)]
    Password(#[from] PasswordPolicyError),
}

impl CreateUserRequest {
    /// Validate the raw body in a fixed rule order so the first violated
    /// rule decides the message: presence of both fields, string types,
    /// whitespace, then the password length bounds.
    ///
    /// `fullname` is never validated; when present and a string it is
    /// trimmed, otherwise it is stored empty.
    fn try_into_command(self) -> Result<CreateUserCommand, ParseCreateUserRequestError> {
        let username = self
            .username
            .ok_or(ParseCreateUserRequestError::MissingUsername)?;
        let password = self
            .password
            .ok_or(ParseCreateUserRequestError::MissingPassword)?;

        let username = username
            .as_str()
            .ok_or(ParseCreateUserRequestError::UsernameNotAString)?;
        let password = password
            .as_str()
            .ok_or(ParseCreateUserRequestError::PasswordNotAString)?;

        let username = Username::new(username.to_string())?;
        let password = Password::new(password.to_string())?;

        let fullname = self
            .fullname
            .as_ref()
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(CreateUserCommand::new(username, password, fullname))
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl From<&User> for CreateUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            fullname: user.fullname.clone(),
        }
    }
}
