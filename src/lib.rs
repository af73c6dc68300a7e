pub mod assets;
pub mod config;
pub mod db;
pub mod flash;
pub mod migrate;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use routes::AppState;

/// Build the application router over already migrated pools
///
/// The server passes a read-only pool and a single-connection write pool,
/// tests can pass the same pool twice.
pub fn create_app(read_pool: sqlx::SqlitePool, write_pool: sqlx::SqlitePool) -> axum::Router {
    let state = pantryplan_shared::State {
        read_db: read_pool.clone(),
        write_db: write_pool,
    };

    let app_state = AppState {
        pantry_command: pantryplan_pantry::Command::new(state.clone()),
        recipe_command: pantryplan_recipe::Command::new(state),
        pool: read_pool,
    };

    routes::router(app_state)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
