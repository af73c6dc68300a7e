use std::cmp::Ordering;

use crate::{Dish, PantrySet};

/// How much of one recipe the pantry covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Ingredients on hand, recipe order.
    pub have: Vec<String>,
    /// Ingredients to buy, recipe order.
    pub missing: Vec<String>,
    /// Whole percentage of ingredient occurrences on hand, rounded down.
    pub score: u8,
}

impl MatchResult {
    pub fn total(&self) -> usize {
        self.have.len() + self.missing.len()
    }
}

/// Partitions `ingredients` against the pantry and scores the recipe.
///
/// Repeated ingredients count once per occurrence on both sides of the
/// ratio. An empty list scores 0.
pub fn score(ingredients: &[String], pantry: &PantrySet) -> MatchResult {
    let (have, missing): (Vec<String>, Vec<String>) = ingredients
        .iter()
        .cloned()
        .partition(|ingredient| pantry.contains(ingredient));

    MatchResult {
        score: percentage(have.len(), ingredients.len()),
        have,
        missing,
    }
}

fn percentage(have: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    // have <= total, so this is at most 100
    (have * 100 / total) as u8
}

/// A recipe next to its match against the pantry.
#[derive(Debug)]
pub struct Ranked<'a, R> {
    pub recipe: &'a R,
    pub result: MatchResult,
}

/// Scores every recipe and orders them best first.
///
/// Ties on score fall back to the title as stored, compared byte-wise so
/// uppercase sorts before lowercase.
pub fn rank<'a, R: Dish>(recipes: &'a [R], pantry: &PantrySet) -> Vec<Ranked<'a, R>> {
    let mut ranked: Vec<Ranked<'a, R>> = recipes
        .iter()
        .map(|recipe| Ranked {
            result: score(&recipe.ingredients(), pantry),
            recipe,
        })
        .collect();

    ranked.sort_by(compare_ranked);

    ranked
}

fn compare_ranked<R: Dish>(a: &Ranked<'_, R>, b: &Ranked<'_, R>) -> Ordering {
    b.result
        .score
        .cmp(&a.result.score)
        .then_with(|| a.recipe.title().cmp(b.recipe.title()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    struct Card(&'static str, &'static str);

    impl Dish for Card {
        fn title(&self) -> &str {
            self.0
        }

        fn ingredients(&self) -> Vec<String> {
            tokenize(self.1)
        }

        fn instructions(&self) -> &str {
            ""
        }
    }

    fn pantry(names: &[&str]) -> PantrySet {
        names.iter().collect()
    }

    #[test]
    fn partitions_in_recipe_order() {
        let result = score(
            &tokenize("tomato, pasta, garlic, olive oil"),
            &pantry(&["tomato", "pasta", "egg"]),
        );

        assert_eq!(result.have, vec!["tomato", "pasta"]);
        assert_eq!(result.missing, vec!["garlic", "olive oil"]);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn empty_recipe_scores_zero() {
        let result = score(&[], &pantry(&["egg"]));
        assert_eq!(result.score, 0);
        assert!(result.have.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn empty_pantry_scores_zero() {
        let result = score(&tokenize("egg,milk"), &PantrySet::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.missing, vec!["egg", "milk"]);
    }

    #[test]
    fn score_rounds_down() {
        let result = score(&tokenize("a,b,c"), &pantry(&["a", "b"]));
        assert_eq!(result.score, 66);

        let result = score(&tokenize("a,b,c"), &pantry(&["a"]));
        assert_eq!(result.score, 33);
    }

    #[test]
    fn duplicates_weigh_per_occurrence() {
        // 2 of 3 occurrences are eggs, but only 1 of 2 distinct ingredients
        let result = score(&tokenize("egg,egg,flour"), &pantry(&["egg"]));
        assert_eq!(result.have, vec!["egg", "egg"]);
        assert_eq!(result.score, 66);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn score_matches_floor_formula() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        for n in 1..=names.len() {
            for k in 0..=n {
                let ingredients: Vec<String> = names[..n].iter().map(|s| s.to_string()).collect();
                let result = score(&ingredients, &pantry(&names[..k]));
                assert_eq!(result.score as usize, 100 * k / n, "k={k} n={n}");
            }
        }
    }

    #[test]
    fn ties_rank_by_title() {
        let recipes = [
            Card("Banana Bread", "banana,flour,egg,butter,sugar"),
            Card("Apple Pie", "apple,flour,egg,butter,sugar"),
            Card("Omelette", "egg,milk"),
        ];
        let pantry = pantry(&["flour", "egg", "butter", "sugar", "milk"]);

        let titles: Vec<&str> = rank(&recipes, &pantry)
            .iter()
            .map(|r| r.recipe.title())
            .collect();

        assert_eq!(titles, vec!["Omelette", "Apple Pie", "Banana Bread"]);
    }

    #[test]
    fn equal_scores_keep_case_sensitive_title_order() {
        let recipes = [Card("apple crumble", "x"), Card("Zucchini", "y")];
        let ranked = rank(&recipes, &PantrySet::default());

        assert_eq!(ranked[0].recipe.title(), "Zucchini");
        assert_eq!(ranked[1].recipe.title(), "apple crumble");
    }

    #[test]
    fn ranking_is_total_over_empty_inputs() {
        let recipes: [Card; 0] = [];
        assert!(rank(&recipes, &PantrySet::default()).is_empty());
    }

    #[test]
    fn equal_score_and_title_keep_input_order() {
        let recipes = [Card("Soup", "leek, carrot"), Card("Soup", "leek, potato")];

        let ranked = rank(&recipes, &pantry(&["leek"]));

        assert_eq!(ranked[0].result.missing, vec!["carrot"]);
        assert_eq!(ranked[1].result.missing, vec!["potato"]);

        let reversed = [Card("Soup", "leek, potato"), Card("Soup", "leek, carrot")];
        let ranked = rank(&reversed, &pantry(&["leek"]));
        assert_eq!(ranked[0].result.missing, vec!["potato"]);
        assert_eq!(ranked[1].result.missing, vec!["carrot"]);
    }
}
