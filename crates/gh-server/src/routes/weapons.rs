//! Weapon lookup and edit page handlers.

use axum::extract::{Form, Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use gh_core::WeaponId;
use gh_db::models::Weapon;
use gh_db::queries::weapons as db;

use crate::context::AppContext;
use crate::error::AppError;
use crate::routes::NameQuery;
use crate::templates::{url_escape, TemplateContext};

/// Form-encoded body for weapon edit submissions.
///
/// `monster_only` is posted as an explicit true/false select value.
#[derive(Debug, Deserialize)]
pub struct WeaponForm {
    pub name: String,
    pub weight: i64,
    pub min_damage: i64,
    pub max_damage: i64,
    pub description: String,
    pub buy_value: i64,
    pub sell_value: i64,
    pub monster_only: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl WeaponForm {
    fn into_weapon(self, id: WeaponId) -> Weapon {
        Weapon {
            id,
            name: self.name,
            weight: self.weight,
            min_damage: self.min_damage,
            max_damage: self.max_damage,
            description: self.description,
            buy_value: self.buy_value,
            sell_value: self.sell_value,
            monster_only: self.monster_only,
            image_url: self.image_url.filter(|s| !s.trim().is_empty()),
        }
    }
}

fn context_for(weapon: &Weapon) -> TemplateContext {
    TemplateContext::new()
        .with_var("id", &weapon.id.to_string())
        .with_var("name", &weapon.name)
        .with_var("name_url", &url_escape(&weapon.name))
        .with_var("weight", &weapon.weight.to_string())
        .with_var("min_damage", &weapon.min_damage.to_string())
        .with_var("max_damage", &weapon.max_damage.to_string())
        .with_var("description", &weapon.description)
        .with_var("buy_value", &weapon.buy_value.to_string())
        .with_var("sell_value", &weapon.sell_value.to_string())
        .with_var("monster_only", if weapon.monster_only { "true" } else { "false" })
        .with_var(
            "monster_only_true_selected",
            if weapon.monster_only { "selected" } else { "" },
        )
        .with_var(
            "monster_only_false_selected",
            if weapon.monster_only { "" } else { "selected" },
        )
        .with_var("image_url", weapon.image_url.as_deref().unwrap_or(""))
}

fn lookup(ctx: &AppContext, name: &str) -> Result<Weapon, AppError> {
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    let weapon = db::get_weapon_by_name(&conn, name)?
        .ok_or_else(|| gh_core::Error::not_found("weapon", name))?;
    Ok(weapon)
}

/// GET /explorer/weapon/{name}
pub async fn get_by_name(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::info!("Looking up weapon '{name}'");
    let weapon = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("lookup_weapon.html", &context_for(&weapon))?;
    Ok(Html(body))
}

/// GET /explorer/weapon/by_name/?name=X
pub async fn get_by_query(
    State(ctx): State<AppContext>,
    Query(query): Query<NameQuery>,
) -> Result<Html<String>, AppError> {
    let weapon = lookup(&ctx, &query.name)?;
    let body = ctx
        .templates
        .render("lookup_weapon.html", &context_for(&weapon))?;
    Ok(Html(body))
}

/// GET /explorer/weapon/{name}/edit
pub async fn edit_form(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let weapon = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("edit_weapon.html", &context_for(&weapon))?;
    Ok(Html(body))
}

/// POST /explorer/weapon/{name}
pub async fn update(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<WeaponForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("lookup_weapon.html", &context_for(&updated))?;
    Ok(Html(body))
}

/// POST /explorer/weapon/{name}/edit
pub async fn update_from_edit(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<WeaponForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("edit_weapon.html", &context_for(&updated))?;
    Ok(Html(body))
}

fn save(ctx: &AppContext, name: &str, form: WeaponForm) -> Result<Weapon, AppError> {
    tracing::info!("Updating weapon '{name}'");
    let existing = lookup(ctx, name)?;
    let updated = form.into_weapon(existing.id);
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    if !db::update_weapon(&conn, &updated)? {
        return Err(gh_core::Error::not_found("weapon", name).into());
    }
    Ok(updated)
}
