//! carepath-api
//!
//! HTTP surface for CarePath. Runs the triage engine for anonymous symptom
//! checks and serves the facility directory, appointments, profiles and
//! symptom-check history for signed-in users.

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router. CORS is layered on by the caller.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/symptoms/history",
            post(routes::history::save_to_history).get(routes::history::list_history),
        )
        .route("/api/symptoms/{id}", get(routes::history::get_symptom_check))
        .route("/api/facilities", post(routes::facilities::create_facility))
        .route(
            "/api/facilities/{id}",
            put(routes::facilities::update_facility).delete(routes::facilities::delete_facility),
        )
        .route("/api/appointments", post(routes::appointments::create_appointment))
        .route(
            "/api/appointments/user/{handle}",
            get(routes::appointments::list_user_appointments),
        )
        .route(
            "/api/appointments/{id}/cancel",
            put(routes::appointments::cancel_appointment),
        )
        .route(
            "/api/user/profile",
            get(routes::profile::get_profile).put(routes::profile::update_profile),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Health (no auth)
        .route("/api/health", get(routes::health::health_check))
        // Symptom checker (no auth, anonymous checks are allowed)
        .route("/api/symptoms/chat", post(routes::symptoms::process_message))
        .route("/api/symptoms/check", post(routes::symptoms::check_symptoms))
        .route("/api/symptoms/common", get(routes::symptoms::common_symptoms))
        // Facility directory reads (no auth)
        .route("/api/facilities", get(routes::facilities::list_facilities))
        .route("/api/facilities/{id}", get(routes::facilities::get_facility))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
