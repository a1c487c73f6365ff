use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::NOT_AUTHENTICATED;
use crate::inbound::http::router::AppState;

/// Extension type carrying the user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the bearer token to a user and adds it to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_owned();

    let user = state.access_guard.authenticate(&token, Utc::now()).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let rejected = || {
        tracing::debug!("Missing or malformed Authorization header");
        ApiError::Unauthorized(NOT_AUTHENTICATED.to_string())
    };

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(rejected)?;

    let auth_str = auth_header.to_str().map_err(|_| rejected())?;

    let (scheme, token) = auth_str.split_once(' ').ok_or_else(rejected)?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(rejected());
    }

    Ok(token.trim())
}
