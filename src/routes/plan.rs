use axum::{extract::State, response::Response};
use pantryplan_matcher::{PlanCandidate, ShoppingEntry, plan, shopping_list};

use crate::{flash::Notice, routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "plan.html")]
pub struct PlanTemplate {
    pub notice: Option<Notice>,
    pub candidates: Vec<PlanCandidate>,
    pub shopping: Vec<ShoppingEntry>,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> Response {
    let pantry = crate::try_page_response!(app_state.pantry_command.pantry_set());
    let recipes = crate::try_page_response!(app_state.recipe_command.all());

    let candidates = plan(&recipes, &pantry);
    let shopping = shopping_list(&candidates);
    tracing::debug!(
        candidates = candidates.len(),
        shopping = shopping.len(),
        "meal plan computed"
    );

    let notice = template.notice.clone();

    template.render(PlanTemplate {
        notice,
        candidates,
        shopping,
    })
}
