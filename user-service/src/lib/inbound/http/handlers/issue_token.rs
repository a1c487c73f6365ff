use auth::AccessToken;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use chrono::Utc;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// OAuth2 password-grant style form; `username` carries the account email.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRequestForm {
    username: String,
    password: String,
}

pub async fn issue_token(
    State(state): State<AppState>,
    form: Result<Form<TokenRequestForm>, FormRejection>,
) -> Result<ApiSuccess<AccessToken>, ApiError> {
    let Form(form) = form?;

    let token = state
        .authenticator
        .login(&form.username, &form.password, Utc::now())
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "Token request rejected");
            ApiError::from(e)
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, token))
}
