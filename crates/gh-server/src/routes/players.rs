//! Player lookup and edit page handlers.

use axum::extract::{Form, Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use gh_core::{ArmorId, PlayerId, WeaponId};
use gh_db::models::Player;
use gh_db::queries::players as db;

use crate::context::AppContext;
use crate::error::AppError;
use crate::routes::NameQuery;
use crate::templates::{url_escape, TemplateContext};

/// Form-encoded body for player edit submissions.
#[derive(Debug, Deserialize)]
pub struct PlayerForm {
    pub username: String,
    pub password: String,
    pub name: String,
    pub level: i64,
    pub health: i64,
    pub exp: i64,
    pub gold: i64,
    pub bank: i64,
    pub weapon: i64,
    pub armor: i64,
    pub description: String,
}

impl PlayerForm {
    /// Build the full row to persist, keeping the looked-up id.
    fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            username: self.username,
            password: self.password,
            name: self.name,
            level: self.level,
            health: self.health,
            exp: self.exp,
            gold: self.gold,
            bank: self.bank,
            weapon: WeaponId::from(self.weapon),
            armor: ArmorId::from(self.armor),
            description: self.description,
        }
    }
}

fn context_for(player: &Player) -> TemplateContext {
    TemplateContext::new()
        .with_var("id", &player.id.to_string())
        .with_var("username", &player.username)
        .with_var("password", &player.password)
        .with_var("name", &player.name)
        .with_var("name_url", &url_escape(&player.name))
        .with_var("level", &player.level.to_string())
        .with_var("health", &player.health.to_string())
        .with_var("exp", &player.exp.to_string())
        .with_var("gold", &player.gold.to_string())
        .with_var("bank", &player.bank.to_string())
        .with_var("weapon", &player.weapon.to_string())
        .with_var("armor", &player.armor.to_string())
        .with_var("description", &player.description)
}

fn lookup(ctx: &AppContext, name: &str) -> Result<Player, AppError> {
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    let player = db::get_player_by_name(&conn, name)?
        .ok_or_else(|| gh_core::Error::not_found("player", name))?;
    Ok(player)
}

/// GET /explorer/player/{name}
pub async fn get_by_name(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::info!("Looking up player '{name}'");
    let player = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("lookup_player.html", &context_for(&player))?;
    Ok(Html(body))
}

/// GET /explorer/player/by_name/?name=X
pub async fn get_by_query(
    State(ctx): State<AppContext>,
    Query(query): Query<NameQuery>,
) -> Result<Html<String>, AppError> {
    let player = lookup(&ctx, &query.name)?;
    let body = ctx
        .templates
        .render("lookup_player.html", &context_for(&player))?;
    Ok(Html(body))
}

/// GET /explorer/player/by_username/{username}
pub async fn get_by_username(
    State(ctx): State<AppContext>,
    Path(username): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::info!("Looking up player by username '{username}'");
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    let player = db::get_player_by_username(&conn, &username)?
        .ok_or_else(|| gh_core::Error::not_found("player", &username))?;
    let body = ctx
        .templates
        .render("lookup_player.html", &context_for(&player))?;
    Ok(Html(body))
}

/// GET /explorer/player/{name}/edit
pub async fn edit_form(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let player = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("edit_player.html", &context_for(&player))?;
    Ok(Html(body))
}

/// POST /explorer/player/{name}
///
/// Persists the submitted fields onto the row found by `{name}` and
/// re-renders the lookup page with the saved values.
pub async fn update(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<PlayerForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("lookup_player.html", &context_for(&updated))?;
    Ok(Html(body))
}

/// POST /explorer/player/{name}/edit
///
/// Persists like the plain POST, but re-renders the edit form so the user
/// can keep editing.
pub async fn update_from_edit(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<PlayerForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("edit_player.html", &context_for(&updated))?;
    Ok(Html(body))
}

fn save(ctx: &AppContext, name: &str, form: PlayerForm) -> Result<Player, AppError> {
    tracing::info!("Updating player '{name}'");
    let existing = lookup(ctx, name)?;
    let updated = form.into_player(existing.id);
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    if !db::update_player(&conn, &updated)? {
        return Err(gh_core::Error::not_found("player", name).into());
    }
    Ok(updated)
}
