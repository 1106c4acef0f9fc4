// Catalog Domain Model (product categories & products)

use super::error::Result;
use super::user::UserId;
use super::validate::{self, MAX_NAME_LEN};
use super::RowId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RowId,
    pub user_id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RowId,
    pub user_id: UserId,
    pub category_id: RowId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Product as listed under its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: RowId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    pub id: RowId,
    pub name: String,
    pub products: Vec<ProductSummary>,
}

impl CategoryWithProducts {
    /// Attach products to their categories, preserving category order
    pub fn group(categories: Vec<Category>, products: Vec<Product>) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| {
                let products = products
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .map(Product::summary)
                    .collect();
                Self {
                    id: category.id,
                    name: category.name,
                    products,
                }
            })
            .collect()
    }
}

pub fn validate_category_name(value: &str) -> Result<String> {
    validate::required_text("category name", value, MAX_NAME_LEN)
}

/// Validated product fields (used for both insert and update)
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub category_id: RowId,
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(category_id: RowId, name: &str, price: f64) -> Result<Self> {
        Ok(Self {
            category_id,
            name: validate::required_text("product name", name, MAX_NAME_LEN)?,
            price: validate::non_negative_amount("price", price)?,
        })
    }
}
