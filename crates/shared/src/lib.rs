mod error;

pub use error::*;

/// Database handles threaded through every command.
///
/// Reads go to `read_db`, inserts and deletes to `write_db`; both may point at
/// the same pool in tests.
#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}
