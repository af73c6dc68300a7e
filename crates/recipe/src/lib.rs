mod command;
mod repository;

pub use command::*;
pub use repository::Recipe;
