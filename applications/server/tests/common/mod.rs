/// Common test utilities and fixtures
use axum::Router;
use person_server::state::AppState;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test application with its own temp-file database
///
/// The temp dir must outlive the pool, so it rides along here.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

/// Create a test app with migrations applied
pub async fn create_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = person_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    person_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let router = person_server::create_router(AppState::new(pool.clone()));

    TestApp {
        router,
        pool,
        _temp_dir: temp_dir,
    }
}

/// Test fixture: a valid save request body
pub fn save_request_body(external_id: &str) -> serde_json::Value {
    serde_json::json!({
        "external_id": external_id,
        "name": "Alice",
        "email": "alice@example.com",
        "date_of_birth": "1990-01-15T00:00:00Z",
    })
}
