mod command;
mod quantity;
mod repository;

pub use command::*;
pub use quantity::*;
pub use repository::PantryItem;
