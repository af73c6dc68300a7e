use axum::{
    extract::{Form, Path, State},
    response::Response,
};
use pantryplan_matcher::{Ranked, rank};
use pantryplan_recipe::{AddRecipeInput, Recipe};
use serde::Deserialize;

use crate::{
    flash::{self, Flash, Notice},
    routes::AppState,
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "recipes.html")]
pub struct RecipesTemplate<'a> {
    pub notice: Option<Notice>,
    pub ranked: Vec<Ranked<'a, Recipe>>,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> Response {
    let pantry = crate::try_page_response!(app_state.pantry_command.pantry_set());
    let recipes = crate::try_page_response!(app_state.recipe_command.list());
    let notice = template.notice.clone();

    template.render(RecipesTemplate {
        notice,
        ranked: rank(&recipes, &pantry),
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
}

pub async fn action(
    State(app_state): State<AppState>,
    Flash(jar): Flash,
    Form(input): Form<ActionInput>,
) -> Response {
    let result = app_state
        .recipe_command
        .add(AddRecipeInput {
            title: input.title,
            ingredients: input.ingredients,
            instructions: input.instructions,
        })
        .await
        .map(|_| "Recipe added.");

    flash::redirect(jar, "/recipes", result)
}

pub async fn delete(
    State(app_state): State<AppState>,
    Flash(jar): Flash,
    Path((id,)): Path<(i64,)>,
) -> Response {
    let result = app_state
        .recipe_command
        .delete(id)
        .await
        .map(|_| "Recipe removed.");

    flash::redirect(jar, "/recipes", result)
}
