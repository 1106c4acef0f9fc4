// SQLite CatalogRepository Implementation

use crate::error::map_sqlx_error;
use crate::store::SqliteStore;
use async_trait::async_trait;
use tally_core::domain::{Category, NewProduct, Product, RowId, UserId};
use tally_core::error::Result;
use tally_core::port::CatalogRepository;

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    user_id: i64,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) category_id: i64,
    pub(crate) name: String,
    pub(crate) price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            user_id: row.user_id,
            category_id: row.category_id,
            name: row.name,
            price: row.price,
        }
    }
}

#[async_trait]
impl CatalogRepository for SqliteStore {
    async fn insert_category(&self, user_id: UserId, name: &str) -> Result<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (user_id, name) VALUES (?, ?) RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn list_categories(&self, user_id: UserId) -> Result<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT * FROM categories WHERE user_id = ? ORDER BY name, id")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, user_id: UserId, id: RowId) -> Result<Option<Category>> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT * FROM categories WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(Category::from))
    }

    async fn list_products(&self, user_id: UserId) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> =
            sqlx::query_as("SELECT * FROM products WHERE user_id = ? ORDER BY name, id")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_product(&self, user_id: UserId, id: RowId) -> Result<Option<Product>> {
        let row: Option<ProductRow> =
            sqlx::query_as("SELECT * FROM products WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(Product::from))
    }

    async fn insert_product(&self, user_id: UserId, product: &NewProduct) -> Result<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (user_id, category_id, name, price)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(product.category_id)
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update_product(
        &self,
        user_id: UserId,
        id: RowId,
        product: &NewProduct,
    ) -> Result<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            UPDATE products
            SET name = ?, price = ?, category_id = ?
            WHERE id = ? AND user_id = ?
            RETURNING *
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Product::from))
    }

    async fn delete_product(&self, user_id: UserId, id: RowId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
