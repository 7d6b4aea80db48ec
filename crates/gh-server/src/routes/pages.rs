//! Static page handlers: home, license, explorer home, search forms.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppError;
use crate::templates::TemplateContext;

/// GET /
pub async fn home(State(ctx): State<AppContext>) -> Result<Html<String>, AppError> {
    tracing::info!("Rendering home page");
    let body = ctx.templates.render("home.html", &TemplateContext::new())?;
    Ok(Html(body))
}

/// GET /license
pub async fn license(State(ctx): State<AppContext>) -> Result<Html<String>, AppError> {
    tracing::info!("Rendering license page");
    let body = ctx
        .templates
        .render("license.html", &TemplateContext::new())?;
    Ok(Html(body))
}

/// GET /explorer/
pub async fn explorer_home(State(ctx): State<AppContext>) -> Result<Html<String>, AppError> {
    let body = ctx
        .templates
        .render("explorer_home.html", &TemplateContext::new())?;
    Ok(Html(body))
}

/// GET /explorer/search/{entity}/
///
/// Renders the search form for the given entity kind; an unknown entity
/// segment is a 404, not a template error.
pub async fn search_form(
    State(ctx): State<AppContext>,
    Path(entity): Path<String>,
) -> Result<Html<String>, AppError> {
    let template = match entity.as_str() {
        "player" => "search_player.html",
        "monster" => "search_monster.html",
        "weapon" => "search_weapon.html",
        "armor" => "search_armor.html",
        _ => return Err(gh_core::Error::not_found("entity", &entity).into()),
    };
    let body = ctx.templates.render(template, &TemplateContext::new())?;
    Ok(Html(body))
}

/// Liveness probe response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
