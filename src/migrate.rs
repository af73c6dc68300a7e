//! Database migration utilities

use sqlx::{SqlitePool, migrate::MigrateDatabase};
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;

/// Apply every pending schema migration
pub async fn run(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    pantryplan_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(())
}

/// Create the database if needed and run all migrations
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Migrating database {}", config.database.url);

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    run(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}

/// Apply migrations and load the demo pantry and recipes
pub async fn seed(config: &Config) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    run(&pool).await?;
    seed_demo(pantryplan_shared::State::single(pool.clone())).await?;
    pool.close().await;

    tracing::info!("Demo data inserted into {}", config.database.url);

    Ok(())
}

/// Demo inventory and recipes, added through the regular commands.
pub async fn seed_demo(state: pantryplan_shared::State) -> anyhow::Result<()> {
    let today = time::OffsetDateTime::now_utc().date();
    let pantry = pantryplan_pantry::Command::new(state.clone());
    let recipes = pantryplan_recipe::Command::new(state);

    let items = [
        ("tomato", "4", "pcs", Some(today + time::Duration::days(2)), "produce"),
        ("pasta", "500", "g", None, "dry"),
        ("egg", "6", "pcs", Some(today + time::Duration::days(5)), "dairy"),
    ];

    for (name, quantity, unit, expires_on, category) in items {
        pantry
            .add(pantryplan_pantry::AddPantryItemInput {
                name: name.to_owned(),
                quantity: quantity.to_owned(),
                unit: unit.to_owned(),
                expires_on: expires_on.map(|d| d.to_string()).unwrap_or_default(),
                category: category.to_owned(),
            })
            .await?;
    }

    let dishes = [
        (
            "Tomato Pasta",
            "tomato,pasta,garlic,olive oil",
            "Boil pasta. Saute tomato+garlic. Mix.",
        ),
        (
            "Omelette",
            "egg,tomato,onion,salt",
            "Beat eggs. Cook with chopped veggies.",
        ),
    ];

    for (title, ingredients, instructions) in dishes {
        recipes
            .add(pantryplan_recipe::AddRecipeInput {
                title: title.to_owned(),
                ingredients: ingredients.to_owned(),
                instructions: instructions.to_owned(),
            })
            .await?;
    }

    Ok(())
}
