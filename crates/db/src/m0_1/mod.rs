mod pantry_item_create_expires_on_idx;
mod pantry_item_create_table;
mod recipe_create_table;
mod recipe_create_title_idx;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        pantry_item_create_table::Operation,
        pantry_item_create_expires_on_idx::Operation,
        recipe_create_table::Operation,
        recipe_create_title_idx::Operation,
    ]
);
