use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::MessageResponse;
use super::NOT_ENOUGH_PERMISSIONS;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(CurrentUser(current_user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    if user_id != current_user.id {
        return Err(ApiError::Forbidden(NOT_ENOUGH_PERMISSIONS.to_string()));
    }

    state
        .user_service
        .delete_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponse::new("User deleted")))
}
