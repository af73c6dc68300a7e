use pantryplan_db::table;
use pantryplan_matcher::{Dish, tokenize};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    /// Normalized, comma separated.
    #[sqlx(rename = "ingredients")]
    pub ingredients_csv: String,
    pub instructions: String,
    pub created_at: i64,
}

impl Dish for Recipe {
    fn title(&self) -> &str {
        &self.title
    }

    fn ingredients(&self) -> Vec<String> {
        tokenize(&self.ingredients_csv)
    }

    fn instructions(&self) -> &str {
        &self.instructions
    }
}

pub(crate) struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub created_at: i64,
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            table::Recipe::Id,
            table::Recipe::Title,
            table::Recipe::Ingredients,
            table::Recipe::Instructions,
            table::Recipe::CreatedAt,
        ])
        .from(table::Recipe::Table)
        .to_owned()
}

pub(crate) async fn find_all(
    pool: &SqlitePool,
    by_title: bool,
) -> pantryplan_shared::Result<Vec<Recipe>> {
    let mut statement = select();
    if by_title {
        statement.order_by(table::Recipe::Title, Order::Asc);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Recipe, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn create(pool: &SqlitePool, recipe: NewRecipe) -> pantryplan_shared::Result<i64> {
    let statement = Query::insert()
        .into_table(table::Recipe::Table)
        .columns([
            table::Recipe::Title,
            table::Recipe::Ingredients,
            table::Recipe::Instructions,
            table::Recipe::CreatedAt,
        ])
        .values_panic([
            recipe.title.into(),
            recipe.ingredients.into(),
            recipe.instructions.into(),
            recipe.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn delete(pool: &SqlitePool, id: i64) -> pantryplan_shared::Result<bool> {
    let statement = Query::delete()
        .from_table(table::Recipe::Table)
        .and_where(Expr::col(table::Recipe::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}
