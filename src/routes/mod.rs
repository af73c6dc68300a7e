use axum::{
    Router,
    response::Response,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod plan;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub pantry_command: pantryplan_pantry::Command,
    pub recipe_command: pantryplan_recipe::Command,
    pub pool: SqlitePool,
}

pub async fn fallback() -> Response {
    Template::not_found(NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/items", post(index::add_item))
        .route("/items/{id}/delete", post(index::delete_item))
        .route("/recipes", get(recipes::page).post(recipes::action))
        .route("/recipes/{id}/delete", post(recipes::delete))
        .route("/plan", get(plan::page))
        .route("/static/{*path}", get(crate::assets::serve))
        .fallback(fallback)
        .with_state(app_state)
}
