use pantryplan_db::table;
use pantryplan_matcher::Perishable;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::Quantity;

#[derive(Debug, Clone, FromRow)]
pub struct PantryItem {
    pub id: i64,
    pub name: String,
    #[sqlx(try_from = "i64")]
    pub quantity: Quantity,
    pub unit: String,
    /// Stored as entered; may not be a valid date.
    pub expires_on: Option<String>,
    pub category: Option<String>,
    pub created_at: i64,
}

impl Perishable for PantryItem {
    fn expires_on(&self) -> Option<&str> {
        self.expires_on.as_deref()
    }
}

pub(crate) struct NewPantryItem {
    pub name: String,
    pub quantity: Quantity,
    pub unit: String,
    pub expires_on: Option<String>,
    pub category: Option<String>,
    pub created_at: i64,
}

pub(crate) async fn list(pool: &SqlitePool) -> pantryplan_shared::Result<Vec<PantryItem>> {
    let statement = Query::select()
        .columns([
            table::PantryItem::Id,
            table::PantryItem::Name,
            table::PantryItem::Quantity,
            table::PantryItem::Unit,
            table::PantryItem::ExpiresOn,
            table::PantryItem::Category,
            table::PantryItem::CreatedAt,
        ])
        .from(table::PantryItem::Table)
        .order_by_expr(
            Expr::col(table::PantryItem::ExpiresOn).is_null(),
            Order::Asc,
        )
        .order_by(table::PantryItem::ExpiresOn, Order::Asc)
        .order_by(table::PantryItem::Name, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PantryItem, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn names(pool: &SqlitePool) -> pantryplan_shared::Result<Vec<String>> {
    let statement = Query::select()
        .column(table::PantryItem::Name)
        .from(table::PantryItem::Table)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub(crate) async fn create(pool: &SqlitePool, item: NewPantryItem) -> pantryplan_shared::Result<i64> {
    let statement = Query::insert()
        .into_table(table::PantryItem::Table)
        .columns([
            table::PantryItem::Name,
            table::PantryItem::Quantity,
            table::PantryItem::Unit,
            table::PantryItem::ExpiresOn,
            table::PantryItem::Category,
            table::PantryItem::CreatedAt,
        ])
        .values_panic([
            item.name.into(),
            item.quantity.thousandths().into(),
            item.unit.into(),
            item.expires_on.into(),
            item.category.into(),
            item.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn delete(pool: &SqlitePool, id: i64) -> pantryplan_shared::Result<bool> {
    let statement = Query::delete()
        .from_table(table::PantryItem::Table)
        .and_where(Expr::col(table::PantryItem::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}
