#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Once;

use stylespace_lib::WardrobeItem;

static INIT: Once = Once::new();

pub struct TestContext {
    pub pool: Pool<Sqlite>,
}

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub async fn init_test_db() -> TestContext {
    init_logger();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    TestContext { pool }
}

pub fn item(owner: &str, name: &str, category: &str, color: Option<&str>) -> WardrobeItem {
    WardrobeItem {
        owner_id: owner.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        primary_color: color.map(str::to_string),
        ..Default::default()
    }
}
