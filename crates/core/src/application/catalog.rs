// Catalog Use Cases

use crate::domain::catalog::validate_category_name;
use crate::domain::{Category, CategoryWithProducts, NewProduct, Product, RowId, UserId};
use crate::error::{AppError, Result};
use crate::port::CatalogRepository;
use std::sync::Arc;
use tracing::info;

pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_category(&self, user_id: UserId, name: &str) -> Result<Category> {
        let name = validate_category_name(name)?;
        self.repo.insert_category(user_id, &name).await
    }

    /// Categories with their products
    pub async fn list_categories(&self, user_id: UserId) -> Result<Vec<CategoryWithProducts>> {
        let categories = self.repo.list_categories(user_id).await?;
        let products = self.repo.list_products(user_id).await?;
        Ok(CategoryWithProducts::group(categories, products))
    }

    pub async fn add_product(
        &self,
        user_id: UserId,
        category_id: RowId,
        name: &str,
        price: f64,
    ) -> Result<Product> {
        let product = NewProduct::new(category_id, name, price)?;
        self.require_category(user_id, category_id).await?;

        let product = self.repo.insert_product(user_id, &product).await?;
        info!(user_id, product_id = product.id, "Product added");
        Ok(product)
    }

    pub async fn update_product(
        &self,
        user_id: UserId,
        id: RowId,
        category_id: RowId,
        name: &str,
        price: f64,
    ) -> Result<Product> {
        let product = NewProduct::new(category_id, name, price)?;
        self.require_category(user_id, category_id).await?;

        self.repo
            .update_product(user_id, id, &product)
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    /// Products referenced by sales or orders are refused with Conflict
    pub async fn delete_product(&self, user_id: UserId, id: RowId) -> Result<()> {
        if self.repo.delete_product(user_id, id).await? {
            info!(user_id, product_id = id, "Product deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Product", id))
        }
    }

    async fn require_category(&self, user_id: UserId, category_id: RowId) -> Result<Category> {
        self.repo
            .find_category(user_id, category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", category_id))
    }
}
