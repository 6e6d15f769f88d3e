use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_vacation::create_vacation;
use super::handlers::delete_staff::delete_staff;
use super::handlers::get_staff::get_staff;
use super::handlers::get_vacation::get_vacation;
use super::handlers::list_staff::list_staff;
use super::handlers::list_vacations::list_vacations;
use super::handlers::login::login;
use super::handlers::register_staff::register_staff;
use super::handlers::update_staff::update_staff;
use super::handlers::update_vacation::update_vacation;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::staff::models::Role;
use crate::domain::staff::ports::StaffServicePort;
use crate::domain::vacation::ports::VacationServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub admins: Arc<dyn StaffServicePort>,
    pub directors: Arc<dyn StaffServicePort>,
    pub kadrs: Arc<dyn StaffServicePort>,
    pub users: Arc<dyn StaffServicePort>,
    pub vacations: Arc<dyn VacationServicePort>,
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// The account service managing one role family.
    pub fn directory(&self, role: Role) -> &Arc<dyn StaffServicePort> {
        match role {
            Role::Admin => &self.admins,
            Role::Director => &self.directors,
            Role::Kadr => &self.kadrs,
            Role::User => &self.users,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/api/auth/:role/login", post(login));

    let protected_routes = Router::new()
        .route("/api/staff/:role/register", post(register_staff))
        .route("/api/staff/:role", put(update_staff))
        .route("/api/staff/:role", get(list_staff))
        .route("/api/staff/:role/:id", get(get_staff))
        .route("/api/staff/:role/:id", delete(delete_staff))
        .route("/api/vacations", post(create_vacation))
        .route("/api/vacations", put(update_vacation))
        .route("/api/vacations", get(list_vacations))
        .route("/api/vacations/:id", get(get_vacation))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
