//! Route configuration for the World Heritage Sites API.
//!
//! Routes are organized into groups. The set of groups is a fixed list known
//! at compile time, see [`route_groups`]; [`create_routes`] registers each of
//! them under its prefix next to the system routes.

pub mod site_routes;

use axum::{Router, routing::get};
use heritage_persistence::core::SiteStorage;
use tracing::debug;

use crate::handlers;
use crate::state::AppState;

pub use site_routes::site_routes;

/// A named set of routes sharing a path prefix.
pub struct RouteGroup<S> {
    /// Name used in logs.
    pub name: &'static str,
    /// Path prefix every route of the group starts with.
    pub prefix: &'static str,
    /// Builds the group's routes under the given prefix.
    pub build: fn(&str) -> Router<AppState<S>>,
}

/// Returns every route group the server exposes.
pub fn route_groups<S>() -> Vec<RouteGroup<S>>
where
    S: SiteStorage + 'static,
{
    vec![RouteGroup {
        name: "sites",
        prefix: "/sites",
        build: site_routes::<S>,
    }]
}

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - every group from [`route_groups`]
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: SiteStorage + 'static,
{
    let mut router = Router::new().route("/health", get(handlers::health_handler::<S>));

    for group in route_groups::<S>() {
        debug!(group = group.name, prefix = group.prefix, "Registering route group");
        router = router.merge((group.build)(group.prefix));
    }

    router.with_state(state)
}
