//! Armor lookup and edit page handlers.

use axum::extract::{Form, Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use gh_core::ArmorId;
use gh_db::models::Armor;
use gh_db::queries::armor as db;

use crate::context::AppContext;
use crate::error::AppError;
use crate::routes::NameQuery;
use crate::templates::{url_escape, TemplateContext};

/// Form-encoded body for armor edit submissions.
#[derive(Debug, Deserialize)]
pub struct ArmorForm {
    pub name: String,
    pub ac: i64,
    pub weight: i64,
    pub damage_buffer: i64,
    pub buy_value: i64,
    pub sell_value: i64,
    pub monster_only: bool,
    pub description: String,
}

impl ArmorForm {
    fn into_armor(self, id: ArmorId) -> Armor {
        Armor {
            id,
            name: self.name,
            ac: self.ac,
            weight: self.weight,
            damage_buffer: self.damage_buffer,
            buy_value: self.buy_value,
            sell_value: self.sell_value,
            monster_only: self.monster_only,
            description: self.description,
        }
    }
}

fn context_for(armor: &Armor) -> TemplateContext {
    TemplateContext::new()
        .with_var("id", &armor.id.to_string())
        .with_var("name", &armor.name)
        .with_var("name_url", &url_escape(&armor.name))
        .with_var("ac", &armor.ac.to_string())
        .with_var("weight", &armor.weight.to_string())
        .with_var("damage_buffer", &armor.damage_buffer.to_string())
        .with_var("buy_value", &armor.buy_value.to_string())
        .with_var("sell_value", &armor.sell_value.to_string())
        .with_var("monster_only", if armor.monster_only { "true" } else { "false" })
        .with_var(
            "monster_only_true_selected",
            if armor.monster_only { "selected" } else { "" },
        )
        .with_var(
            "monster_only_false_selected",
            if armor.monster_only { "" } else { "selected" },
        )
        .with_var("description", &armor.description)
}

fn lookup(ctx: &AppContext, name: &str) -> Result<Armor, AppError> {
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    let armor = db::get_armor_by_name(&conn, name)?
        .ok_or_else(|| gh_core::Error::not_found("armor", name))?;
    Ok(armor)
}

/// GET /explorer/armor/{name}
pub async fn get_by_name(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::info!("Looking up armor '{name}'");
    let armor = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("lookup_armor.html", &context_for(&armor))?;
    Ok(Html(body))
}

/// GET /explorer/armor/by_name/?name=X
pub async fn get_by_query(
    State(ctx): State<AppContext>,
    Query(query): Query<NameQuery>,
) -> Result<Html<String>, AppError> {
    let armor = lookup(&ctx, &query.name)?;
    let body = ctx
        .templates
        .render("lookup_armor.html", &context_for(&armor))?;
    Ok(Html(body))
}

/// GET /explorer/armor/{name}/edit
pub async fn edit_form(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let armor = lookup(&ctx, &name)?;
    let body = ctx
        .templates
        .render("edit_armor.html", &context_for(&armor))?;
    Ok(Html(body))
}

/// POST /explorer/armor/{name}
pub async fn update(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<ArmorForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("lookup_armor.html", &context_for(&updated))?;
    Ok(Html(body))
}

/// POST /explorer/armor/{name}/edit
pub async fn update_from_edit(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    Form(form): Form<ArmorForm>,
) -> Result<Html<String>, AppError> {
    let updated = save(&ctx, &name, form)?;
    let body = ctx
        .templates
        .render("edit_armor.html", &context_for(&updated))?;
    Ok(Html(body))
}

fn save(ctx: &AppContext, name: &str, form: ArmorForm) -> Result<Armor, AppError> {
    tracing::info!("Updating armor '{name}'");
    let existing = lookup(ctx, name)?;
    let updated = form.into_armor(existing.id);
    let conn = gh_db::pool::get_conn(&ctx.db)?;
    if !db::update_armor(&conn, &updated)? {
        return Err(gh_core::Error::not_found("armor", name).into());
    }
    Ok(updated)
}
