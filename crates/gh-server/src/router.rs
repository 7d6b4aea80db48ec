//! Axum router construction.
//!
//! Builds the full application router with all explorer routes, middleware
//! layers, and static file serving.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

/// Build the complete Axum router.
///
/// Explorer routes are registered with their full, concrete paths. The
/// links and form targets in the templates use trailing slashes, and
/// matchit treats `/explorer` and `/explorer/` as distinct paths, so the
/// slash-carrying spellings are what get registered (with a no-slash alias
/// for the explorer home).
pub fn build_router(ctx: AppContext, static_dir: Option<PathBuf>) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::pages::home))
        .route("/license", get(routes::pages::license))
        .route("/health", get(routes::pages::health_check))
        .route("/explorer", get(routes::pages::explorer_home))
        .route("/explorer/", get(routes::pages::explorer_home))
        .route(
            "/explorer/search/{entity}/",
            get(routes::pages::search_form),
        )
        // Players
        .route(
            "/explorer/player/by_name/",
            get(routes::players::get_by_query),
        )
        .route(
            "/explorer/player/by_username/{username}",
            get(routes::players::get_by_username),
        )
        .route(
            "/explorer/player/{name}",
            get(routes::players::get_by_name).post(routes::players::update),
        )
        .route(
            "/explorer/player/{name}/edit",
            get(routes::players::edit_form).post(routes::players::update_from_edit),
        )
        // Monsters
        .route(
            "/explorer/monster/by_name/",
            get(routes::monsters::get_by_query),
        )
        .route(
            "/explorer/monster/{name}",
            get(routes::monsters::get_by_name).post(routes::monsters::update),
        )
        .route(
            "/explorer/monster/{name}/edit",
            get(routes::monsters::edit_form).post(routes::monsters::update_from_edit),
        )
        // Weapons
        .route(
            "/explorer/weapon/by_name/",
            get(routes::weapons::get_by_query),
        )
        .route(
            "/explorer/weapon/{name}",
            get(routes::weapons::get_by_name).post(routes::weapons::update),
        )
        .route(
            "/explorer/weapon/{name}/edit",
            get(routes::weapons::edit_form).post(routes::weapons::update_from_edit),
        )
        // Armor
        .route(
            "/explorer/armor/by_name/",
            get(routes::armor::get_by_query),
        )
        .route(
            "/explorer/armor/{name}",
            get(routes::armor::get_by_name).post(routes::armor::update),
        )
        .route(
            "/explorer/armor/{name}/edit",
            get(routes::armor::edit_form).post(routes::armor::update_from_edit),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx);

    // Static assets (stylesheets, item images).
    if let Some(dir) = static_dir {
        if dir.exists() {
            tracing::info!("Serving static files from {:?}", dir);
            app = app.nest_service("/static", tower_http::services::ServeDir::new(&dir));
        }
    }

    app
}
