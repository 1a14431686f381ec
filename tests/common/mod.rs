use axum_test::TestServer;
use items_api::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Builds an AppState for the tests
///
/// # Arguments
/// * `pool` - SQLite pool provided by `#[sqlx::test]`, migrations already applied
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Builds a TestServer on top of the full application router
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = items_api::create_router(create_test_state(pool));
    TestServer::new(app).expect("Failed to create test server")
}
