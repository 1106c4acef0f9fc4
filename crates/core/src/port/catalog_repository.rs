// Catalog Repository Port

use crate::domain::{Category, NewProduct, Product, RowId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Categories and products. Every method is scoped to the owning user.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn insert_category(&self, user_id: UserId, name: &str) -> Result<Category>;

    /// Ordered by name
    async fn list_categories(&self, user_id: UserId) -> Result<Vec<Category>>;

    async fn find_category(&self, user_id: UserId, id: RowId) -> Result<Option<Category>>;

    /// Ordered by name
    async fn list_products(&self, user_id: UserId) -> Result<Vec<Product>>;

    async fn find_product(&self, user_id: UserId, id: RowId) -> Result<Option<Product>>;

    async fn insert_product(&self, user_id: UserId, product: &NewProduct) -> Result<Product>;

    /// None when the product is not the user's
    async fn update_product(
        &self,
        user_id: UserId,
        id: RowId,
        product: &NewProduct,
    ) -> Result<Option<Product>>;

    /// False when the product is not the user's
    async fn delete_product(&self, user_id: UserId, id: RowId) -> Result<bool>;
}
