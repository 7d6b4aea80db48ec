//! Monster lookup and edit page handlers.

use axum::extract::{Form, Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use gh_core::{ArmorId, MonsterId, WeaponId};
use gh_db::models::Monster;
use gh_db::queries::monsters as db;

use crate::context::AppContext;
use crate::error::AppError;
use crate::routes::NameQuery;
use crate::templates::{url_escape, TemplateContext};

/// Form-encoded body for monster edit submissions.
#[derive(Debug, Deserialize)]
pub struct MonsterForm {
    pub name: String,
    pub level: i64,
    pub health: i64,
    pub exp: i64,
    pub weapon: i64,
    pub armor: i64,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MonsterForm {
    fn into_monster(self, id: MonsterId) -> Monster {
        Monster {
            id,
            name: self.name,
            level: self.level,
            health: self.health,
            exp: self.exp,
            weapon: WeaponId::from(self.weapon),
            armor: ArmorId::from(self.armor),
            description: self.description,
            // An empty form field clears the image.
            image_url: self.image_url.filter(|s| !s.trim().is_empty()),
        }
    }
}

fn context_for(monster: &Monster) -> TemplateContext {
    TemplateContext::new()
        .with_var("id", &monster.id.to_string())
        .with_var("name", &monster.name)
        .with_var("name_url", &url_escape(&monster.name))
        .with_var("level", &monster.level.to_string())
        .with_var("health", &monster.health.to_string())
        .with_var("exp", &monster.exp.to_string())
        .with_var("weapon", &monster.weapon.to_string())
        .with_var("armor", &monster.armor.to_string())
        .with_var("description", &monster.description)
        .with_var("image_url", monster.image_url.as_deref().unwrap_or(""))
}

fn lookup(ctx: &AppContext, name: &str) -> Result<Monster, AppError> {
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    let monster = db::get_monster_by_name(&conn, name)?
        .ok_or_else(|| gh_core::Error::not_found("monster", name))?;
    Ok(monster)
}

/// GET /explorer/monster/{name}
pub async fn get_by_name(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::info!("Looking up monster '{name}'");
    let monster = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("lookup_monster.html", &context_for(&monster))?;
    Ok(Html(body))
}

/// GET /explorer/monster/by_name/?name=X
pub async fn get_by_query(
    State(ctx): State<AppContext>,
    Query(query): Query<NameQuery>,
) -> Result<Html<String>, AppError> {
    let monster = lookup(&ctx, &query.name)?;
    let body = ctx
        .templates
        .render("lookup_monster.html", &context_for(&monster))?;
    Ok(Html(body))
}

/// GET /explorer/monster/{name}/edit
pub async fn edit_form(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let monster = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("edit_monster.html", &context_for(&monster))?;
    Ok(Html(body))
}

/// POST /explorer/monster/{name}
pub async fn update(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<MonsterForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("lookup_monster.html", &context_for(&updated))?;
    Ok(Html(body))
}

/// POST /explorer/monster/{name}/edit
pub async fn update_from_edit(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<MonsterForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("edit_monster.html", &context_for(&updated))?;
    Ok(Html(body))
}

fn save(ctx: &AppContext, name: &str, form: MonsterForm) -> Result<Monster, AppError> {
    tracing::info!("Updating monster '{name}'");
    let existing = lookup(ctx, name)?;
    let updated = form.into_monster(existing.id);
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    if !db::update_monster(&conn, &updated)? {
        return Err(gh_core::Error::not_found("monster", name).into());
    }
    Ok(updated)
}
