use std::sync::Arc;
use std::time::Duration;

use auth::AccessGuard;
use auth::AuthSettings;
use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::issue_token::issue_token;
use super::handlers::list_users::list_users;
use super::handlers::root::read_root;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::directory::RepositoryDirectory;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub authenticator: Arc<Authenticator<RepositoryDirectory>>,
    pub access_guard: Arc<AccessGuard<RepositoryDirectory>>,
}

impl AppState {
    /// Wire the user service, authenticator and access guard over one repository.
    pub fn new<UR: UserRepository>(repository: Arc<UR>, settings: &AuthSettings) -> Self {
        let directory = Arc::new(RepositoryDirectory::new(repository.clone()));

        Self {
            user_service: Arc::new(UserService::new(repository)),
            authenticator: Arc::new(Authenticator::new(Arc::clone(&directory), settings)),
            access_guard: Arc::new(AccessGuard::new(directory, settings)),
        }
    }
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let public_routes = Router::new()
        .route("/", get(read_root))
        .route("/token", post(issue_token))
        .route("/users", post(create_user).get(list_users))
        .route("/users/:user_id", get(get_user));

    let protected_routes = Router::new()
        .route("/users/:user_id", put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span so bearer tokens never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
