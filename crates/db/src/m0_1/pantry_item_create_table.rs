use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::PantryItem;

pub struct Operation;

fn create_pantry_item_table_statement() -> TableCreateStatement {
    Table::create()
        .table(PantryItem::Table)
        .col(
            ColumnDef::new(PantryItem::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(PantryItem::Name).string().not_null())
        .col(ColumnDef::new(PantryItem::Quantity).big_integer().not_null())
        .col(ColumnDef::new(PantryItem::Unit).string().not_null())
        .col(ColumnDef::new(PantryItem::ExpiresOn).string().null())
        .col(ColumnDef::new(PantryItem::Category).string().null())
        .col(ColumnDef::new(PantryItem::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_pantry_item_table_statement() -> TableDropStatement {
    Table::drop().table(PantryItem::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment =
            create_pantry_item_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_pantry_item_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
