use pantryplan_matcher::{
    Dish, PantrySet, Perishable, expiring_soon, normalize, plan, rank, score, shopping_list,
    tokenize,
};
use time::macros::date;

struct Recipe {
    title: &'static str,
    ingredients: &'static str,
}

impl Dish for Recipe {
    fn title(&self) -> &str {
        self.title
    }

    fn ingredients(&self) -> Vec<String> {
        tokenize(self.ingredients)
    }

    fn instructions(&self) -> &str {
        "Mix and serve."
    }
}

struct Item {
    name: &'static str,
    expires_on: Option<&'static str>,
}

impl Perishable for Item {
    fn expires_on(&self) -> Option<&str> {
        self.expires_on
    }
}

fn recipe(title: &'static str, ingredients: &'static str) -> Recipe {
    Recipe { title, ingredients }
}

#[test]
fn tomato_pasta_is_half_covered() {
    let pantry: PantrySet = ["tomato", "pasta", "egg"].into_iter().collect();
    let result = score(&tokenize("tomato, pasta, garlic, olive oil"), &pantry);

    assert_eq!(result.have, vec!["tomato", "pasta"]);
    assert_eq!(result.missing, vec!["garlic", "olive oil"]);
    assert_eq!(result.score, 50);
}

#[test]
fn recipe_without_ingredients_scores_zero_and_is_never_planned() {
    let pantry: PantrySet = ["egg"].into_iter().collect();
    let recipes = [recipe("Nothing", ""), recipe("Eggs", "egg")];

    let ranked = rank(&recipes, &pantry);
    let nothing = ranked
        .iter()
        .find(|r| r.recipe.title == "Nothing")
        .expect("every recipe is ranked");
    assert_eq!(nothing.result.score, 0);

    let planned = plan(&recipes, &pantry);
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].title, "Eggs");
}

#[test]
fn equal_scores_rank_alphabetically() {
    let pantry: PantrySet = ["flour", "butter", "sugar", "egg"].into_iter().collect();
    let recipes = [
        recipe("Banana Bread", "banana, flour, butter, sugar, egg"),
        recipe("Apple Pie", "apple, flour, butter, sugar, egg"),
    ];

    let ranked = rank(&recipes, &pantry);

    assert_eq!(ranked[0].recipe.title, "Apple Pie");
    assert_eq!(ranked[1].recipe.title, "Banana Bread");
    assert!(ranked.iter().all(|r| r.result.score == 80));
}

#[test]
fn onion_missing_everywhere_tops_the_shopping_list() {
    let pantry: PantrySet = ["rice", "tomato"].into_iter().collect();
    let recipes = [
        recipe("Risotto", "rice, onion, stock"),
        recipe("Salsa", "tomato, onion, lime"),
        recipe("Pilaf", "rice, onion, cumin"),
        recipe("Curry", "lentils, onion, cumin, coconut"),
    ];

    let planned = plan(&recipes, &pantry);
    assert_eq!(planned.len(), 3);
    assert!(planned.iter().all(|c| c.title != "Curry"));

    let list = shopping_list(&planned);
    assert_eq!(list[0].ingredient, "onion");
    assert_eq!(list[0].count, 3);
    assert!(list[1..].iter().all(|e| e.count == 1));
}

#[test]
fn tokenizer_round_trips_normalized_text() {
    let first = tokenize("a,b,c");
    assert_eq!(tokenize(&first.join(",")), first);
    assert_eq!(normalize("a,b,c"), "a,b,c");
}

#[test]
fn expiring_soon_includes_expired_and_skips_undated() {
    let today = date!(2026 - 10 - 17);
    let items = [
        Item { name: "milk", expires_on: Some("2026-10-19") },
        Item { name: "bread", expires_on: Some("2026-10-16") },
        Item { name: "salt", expires_on: None },
    ];

    let soon = expiring_soon(&items, today);

    assert_eq!(soon.len(), 2);
    assert_eq!((soon[0].item.name, soon[0].days_remaining), ("milk", 2));
    assert_eq!((soon[1].item.name, soon[1].days_remaining), ("bread", -1));
    assert_eq!(items.len(), 3);
}
