//! Production backend: parameterized SQL against PostgreSQL.

use crate::error::AppError;
use crate::model::Product;
use crate::repository::ProductRepository;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_COLUMNS: &str = r#""Id" AS id, "Name" AS name, "Price" AS price, "Stock" AS stock"#;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the Product table if it does not exist. Call once at startup,
    /// before serving requests.
    pub async fn ensure_product_table(pool: &PgPool) -> Result<(), AppError> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS "Product" (
                "Id" BIGSERIAL PRIMARY KEY,
                "Name" TEXT NOT NULL,
                "Price" DOUBLE PRECISION NOT NULL,
                "Stock" BIGINT NOT NULL
            )
            "#;
        sqlx::query(ddl).execute(pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!(r#"SELECT {} FROM "Product""#, SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!(r#"SELECT {} FROM "Product" WHERE "Id" = $1"#, SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, product: &Product) -> Result<i64, AppError> {
        let sql = r#"INSERT INTO "Product" ("Name", "Price", "Stock") VALUES ($1, $2, $3) RETURNING "Id""#;
        tracing::debug!(sql = %sql, "query");
        let id: i64 = sqlx::query_scalar(sql)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, product: &Product) -> Result<bool, AppError> {
        let sql = r#"UPDATE "Product" SET "Name" = $1, "Price" = $2, "Stock" = $3 WHERE "Id" = $4"#;
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
        let sql = r#"DELETE FROM "Product" WHERE "Id" = $1"#;
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
