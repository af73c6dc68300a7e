use pantryplan_matcher::normalize;
use pantryplan_shared::State;
use time::OffsetDateTime;
use validator::Validate;

use crate::{
    Recipe,
    repository::{self, NewRecipe},
};

/// Raw form fields of a new recipe.
#[derive(Debug, Default, Validate)]
pub struct AddRecipeInput {
    #[validate(length(max = 200, message = "Title is too long."))]
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

#[derive(Clone)]
pub struct Command(pub State);

impl Command {
    pub fn new(state: State) -> Self {
        Self(state)
    }

    /// Recipe catalog, sorted by title.
    pub async fn list(&self) -> pantryplan_shared::Result<Vec<Recipe>> {
        repository::find_all(&self.0.read_db, true).await
    }

    /// Every recipe in storage order, as input for planning.
    pub async fn all(&self) -> pantryplan_shared::Result<Vec<Recipe>> {
        repository::find_all(&self.0.read_db, false).await
    }

    pub async fn add(&self, input: AddRecipeInput) -> pantryplan_shared::Result<i64> {
        let title = input.title.trim();
        let ingredients = input.ingredients.trim();
        let instructions = input.instructions.trim();
        if title.is_empty() || ingredients.is_empty() || instructions.is_empty() {
            pantryplan_shared::user!("Title, ingredients, instructions are required.");
        }

        input.validate()?;

        let id = repository::create(
            &self.0.write_db,
            NewRecipe {
                title: title.to_owned(),
                ingredients: normalize(ingredients),
                instructions: instructions.to_owned(),
                created_at: OffsetDateTime::now_utc().unix_timestamp(),
            },
        )
        .await?;

        tracing::info!(id, "recipe added");

        Ok(id)
    }

    /// Removes a recipe; unknown ids are ignored.
    pub async fn delete(&self, id: i64) -> pantryplan_shared::Result<()> {
        if !repository::delete(&self.0.write_db, id).await? {
            tracing::debug!(id, "recipe already gone");
        }

        Ok(())
    }
}
