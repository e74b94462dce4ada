use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Once;

use crate::database::models::WardrobeItem;

static INIT: Once = Once::new();

pub struct TestContext {
    pub pool: Pool<Sqlite>,
}

pub fn init_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub async fn init_test_db() -> TestContext {
    init_logger();

    // Create an in-memory database for each test
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // Single connection to avoid locking issues in tests
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    TestContext { pool }
}

/// Minimal wardrobe item for pipeline tests.
pub fn garment(id: &str, name: &str, category: &str) -> WardrobeItem {
    WardrobeItem {
        id: id.to_string(),
        owner_id: "user-1".to_string(),
        name: name.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

/// Wardrobe item with a primary color and optional pattern.
pub fn colored(
    id: &str,
    name: &str,
    category: &str,
    color: &str,
    pattern: Option<&str>,
) -> WardrobeItem {
    WardrobeItem {
        primary_color: Some(color.to_string()),
        pattern: pattern.map(str::to_string),
        ..garment(id, name, category)
    }
}
