use axum::{
    extract::{Form, Path, State},
    response::Response,
};
use pantryplan_matcher::{Expiring, expiring_soon};
use pantryplan_pantry::{AddPantryItemInput, PantryItem};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    flash::{self, Flash, Notice},
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub notice: Option<Notice>,
    pub items: &'a [PantryItem],
    pub expiring: Vec<Expiring<'a, PantryItem>>,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> Response {
    let items = crate::try_page_response!(app_state.pantry_command.list());
    let today = OffsetDateTime::now_utc().date();
    let notice = template.notice.clone();

    template.render(IndexTemplate {
        notice,
        items: &items,
        expiring: expiring_soon(&items, today),
    })
}

#[derive(Deserialize)]
pub struct AddItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub expires_on: String,
    #[serde(default)]
    pub category: String,
}

pub async fn add_item(
    State(app_state): State<AppState>,
    Flash(jar): Flash,
    Form(input): Form<AddItemForm>,
) -> Response {
    let result = app_state
        .pantry_command
        .add(AddPantryItemInput {
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
            expires_on: input.expires_on,
            category: input.category,
        })
        .await
        .map(|_| "Item added.");

    flash::redirect(jar, "/", result)
}

pub async fn delete_item(
    State(app_state): State<AppState>,
    Flash(jar): Flash,
    Path((id,)): Path<(i64,)>,
) -> Response {
    let result = app_state
        .pantry_command
        .delete(id)
        .await
        .map(|_| "Item removed.");

    flash::redirect(jar, "/", result)
}
