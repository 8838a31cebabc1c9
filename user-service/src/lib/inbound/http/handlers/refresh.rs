use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::login::AuthTokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// Re-issue the caller's token with a fresh expiry.
///
/// The middleware has already verified the bearer token, so the claims in
/// the request extensions are trusted. The embedded user view and subject
/// are carried over verbatim; refresh never consults the store and never
/// extends a token that has already expired (those are rejected upstream).
pub async fn refresh<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiSuccess<AuthTokenResponseData>, ApiError> {
    let renewed = claims.renewed(state.token_ttl_days);

    let auth_token = state
        .authenticator
        .issue_token(&renewed)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthTokenResponseData { auth_token },
    ))
}
