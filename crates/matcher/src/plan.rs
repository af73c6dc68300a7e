use std::{cmp::Ordering, collections::HashMap};

use crate::{Dish, PantrySet, score};

/// Number of recipes picked for a meal plan.
pub const PLAN_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCandidate {
    pub title: String,
    pub missing: Vec<String>,
    pub instructions: String,
    have: usize,
    total: usize,
}

impl PlanCandidate {
    /// Share of ingredient occurrences on hand, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        self.have as f64 / self.total as f64
    }

    /// Ratio as a whole percentage, rounded down, for display.
    pub fn percent(&self) -> usize {
        self.have * 100 / self.total
    }

    // Exact comparison of have/total without going through floats.
    fn cmp_ratio(&self, other: &Self) -> Ordering {
        (self.have * other.total).cmp(&(other.have * self.total))
    }
}

/// Picks the [`PLAN_SIZE`] recipes the pantry covers best.
///
/// Recipes without ingredients never make it into a plan. Candidates are
/// ordered by coverage, then by how little is missing; each recipe is judged
/// on its own, so overlapping shopping needs are not taken into account.
pub fn plan<R: Dish>(recipes: &[R], pantry: &PantrySet) -> Vec<PlanCandidate> {
    let mut candidates: Vec<PlanCandidate> = recipes
        .iter()
        .filter_map(|recipe| {
            let ingredients = recipe.ingredients();
            if ingredients.is_empty() {
                return None;
            }

            let result = score(&ingredients, pantry);

            Some(PlanCandidate {
                title: recipe.title().to_owned(),
                instructions: recipe.instructions().to_owned(),
                have: result.have.len(),
                total: ingredients.len(),
                missing: result.missing,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.cmp_ratio(a)
            .then_with(|| a.missing.len().cmp(&b.missing.len()))
    });
    candidates.truncate(PLAN_SIZE);

    candidates
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingEntry {
    pub ingredient: String,
    /// Number of planned recipes missing it, once per occurrence.
    pub count: usize,
}

/// Aggregates what the planned recipes are missing, most needed first.
pub fn shopping_list(plan: &[PlanCandidate]) -> Vec<ShoppingEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ingredient in plan.iter().flat_map(|candidate| candidate.missing.iter()) {
        *counts.entry(ingredient.as_str()).or_default() += 1;
    }

    let mut entries: Vec<ShoppingEntry> = counts
        .into_iter()
        .map(|(ingredient, count)| ShoppingEntry {
            ingredient: ingredient.to_owned(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.ingredient.cmp(&b.ingredient))
    });

    entries
}
