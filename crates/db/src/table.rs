use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum PantryItem {
    Table,
    Id,
    Name,
    /// Fixed-point, thousandths of a unit.
    Quantity,
    Unit,
    ExpiresOn,
    Category,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Title,
    /// Normalized comma separated ingredient names.
    Ingredients,
    Instructions,
    CreatedAt,
}
