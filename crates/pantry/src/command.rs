use pantryplan_matcher::{PantrySet, pantry_set};
use pantryplan_shared::State;
use time::OffsetDateTime;
use validator::Validate;

use crate::{
    PantryItem, Quantity,
    repository::{self, NewPantryItem},
};

pub const DEFAULT_UNIT: &str = "pcs";

/// Raw form fields of a new pantry item.
#[derive(Debug, Default, Validate)]
pub struct AddPantryItemInput {
    #[validate(length(max = 120, message = "Name is too long."))]
    pub name: String,
    pub quantity: String,
    #[validate(length(max = 30, message = "Unit is too long."))]
    pub unit: String,
    pub expires_on: String,
    #[validate(length(max = 60, message = "Category is too long."))]
    pub category: String,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[derive(Clone)]
pub struct Command(pub State);

impl Command {
    pub fn new(state: State) -> Self {
        Self(state)
    }

    /// Inventory ordered by expiration date (undated last), then name.
    pub async fn list(&self) -> pantryplan_shared::Result<Vec<PantryItem>> {
        repository::list(&self.0.read_db).await
    }

    /// Names of everything on hand, ready for matching.
    pub async fn pantry_set(&self) -> pantryplan_shared::Result<PantrySet> {
        let names = repository::names(&self.0.read_db).await?;

        Ok(pantry_set(names))
    }

    pub async fn add(&self, input: AddPantryItemInput) -> pantryplan_shared::Result<i64> {
        let name = input.name.trim().to_lowercase();
        let quantity = input.quantity.trim();
        if name.is_empty() || quantity.is_empty() {
            pantryplan_shared::user!("Name and quantity are required.");
        }

        let Some(quantity) = Quantity::parse(quantity) else {
            pantryplan_shared::user!("Quantity must be a number.");
        };

        input.validate()?;

        let id = repository::create(
            &self.0.write_db,
            NewPantryItem {
                name,
                quantity,
                unit: non_blank(&input.unit).unwrap_or_else(|| DEFAULT_UNIT.to_owned()),
                expires_on: non_blank(&input.expires_on),
                category: non_blank(&input.category),
                created_at: OffsetDateTime::now_utc().unix_timestamp(),
            },
        )
        .await?;

        tracing::info!(id, "pantry item added");

        Ok(id)
    }

    /// Removes an item; unknown ids are ignored.
    pub async fn delete(&self, id: i64) -> pantryplan_shared::Result<()> {
        if !repository::delete(&self.0.write_db, id).await? {
            tracing::debug!(id, "pantry item already gone");
        }

        Ok(())
    }
}
