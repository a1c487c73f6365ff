use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserPublic;
use crate::domain::user::models::Page;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default)]
    skip: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    Page::DEFAULT_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserList {
    pub users: Vec<UserPublic>,
}

pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<ApiSuccess<UserList>, ApiError> {
    let Query(query) = query?;
    let page = Page {
        skip: query.skip,
        limit: query.limit,
    };

    state
        .user_service
        .list_users(page)
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                UserList {
                    users: users.iter().map(UserPublic::from).collect(),
                },
            )
        })
}
