use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageResponse;

pub async fn read_root() -> ApiSuccess<MessageResponse> {
    ApiSuccess::new(StatusCode::OK, MessageResponse::new("Olá Mundo!"))
}
