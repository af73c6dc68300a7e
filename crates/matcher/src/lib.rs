//! Recipe matching and meal-plan selection over in-memory values.
//!
//! Everything in this crate is a total function: no I/O, no errors. Callers
//! fetch pantry names and recipes, then hand them over as plain values.

mod expiry;
mod plan;
mod score;
mod tokenize;

pub use expiry::*;
pub use plan::*;
pub use score::*;
pub use tokenize::*;

/// A recipe as seen by the matcher.
pub trait Dish {
    fn title(&self) -> &str;

    /// Ingredient tokens in recipe order, duplicates kept.
    fn ingredients(&self) -> Vec<String>;

    fn instructions(&self) -> &str;
}
