use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

use crate::models::PostEntry;

pub type Db = Pool<Sqlite>;

// Create connection pool, creating the database file on first start
pub async fn create_pool(url: &str) -> Result<Db, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id TEXT PRIMARY KEY,
            author TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}

// Post queries
pub async fn insert_post(
    db: &Db,
    id: &str,
    author: &str,
    title: &str,
    content: &str,
    created_at: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO posts (id, author, title, content, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(author)
    .bind(title)
    .bind(content)
    .bind(created_at)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn list_post_entries(db: &Db) -> Result<Vec<PostEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, author, title, created_at FROM posts ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(db)
    .await
}


#[cfg(test)]
pub(crate) use tests::memory_db;
