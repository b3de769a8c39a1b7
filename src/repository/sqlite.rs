//! Test backend: the same contract against an in-memory SQLite database.

use crate::error::AppError;
use crate::model::Product;
use crate::repository::ProductRepository;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = r#""Id" AS id, "Name" AS name, "Price" AS price, "Stock" AS stock"#;

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a fresh in-memory database with the Product table already
    /// created. A single connection keeps the database alive for the pool's
    /// lifetime (every `:memory:` connection is its own database).
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS "Product" (
                "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
                "Name" TEXT NOT NULL,
                "Price" REAL NOT NULL,
                "Stock" INTEGER NOT NULL
            )
            "#;
        sqlx::query(ddl).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!(r#"SELECT {} FROM "Product""#, SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!(r#"SELECT {} FROM "Product" WHERE "Id" = ?"#, SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, product: &Product) -> Result<i64, AppError> {
        let sql = r#"INSERT INTO "Product" ("Name", "Price", "Stock") VALUES (?, ?, ?)"#;
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, product: &Product) -> Result<bool, AppError> {
        let sql = r#"UPDATE "Product" SET "Name" = ?, "Price" = ?, "Stock" = ? WHERE "Id" = ?"#;
        tracing::debug!(sql = %sql, id = product.id, "query");
        let result = sqlx::query(sql)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = r#"DELETE FROM "Product" WHERE "Id" = ?"#;
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
