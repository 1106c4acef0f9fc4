// Monthly Statistics
//
// Single-pass aggregation over one month of sales and expenses.

use crate::domain::{Expense, ExpenseCategory, MonthPeriod, RowId, SaleWithProduct, UserId};
use crate::error::Result;
use crate::port::{ExpenseRepository, SaleRepository};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// How many products the best-seller list keeps
pub const TOP_PRODUCTS: usize = 4;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// None for the uncategorized bucket
    pub category_id: Option<RowId>,
    pub category_name: String,
    pub total_expense: f64,
    pub average_expense: f64,
    pub expense_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: RowId,
    pub product_name: String,
    pub quantity: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub period: MonthPeriod,
    pub sales: Vec<SaleWithProduct>,
    pub top_products: Vec<ProductSales>,
    pub expense_summary: Vec<CategoryExpense>,
    pub total_revenue: f64,
    pub average_revenue: f64,
    pub total_expense: f64,
    /// Mean of the per-category totals; None when nothing was spent
    pub average_expense: Option<f64>,
    pub net_profit: f64,
}

/// Aggregate one month. `sales` and `expenses` must already be restricted to `period`.
pub fn compute_monthly_stats(
    period: MonthPeriod,
    sales: Vec<SaleWithProduct>,
    categories: &[ExpenseCategory],
    expenses: &[Expense],
) -> MonthlyStats {
    let total_revenue: f64 = sales.iter().map(SaleWithProduct::revenue).sum();
    let average_revenue = if sales.is_empty() {
        0.0
    } else {
        total_revenue / sales.len() as f64
    };

    let expense_summary = summarize_expenses(categories, expenses);
    let total_expense: f64 = expense_summary.iter().map(|c| c.total_expense).sum();
    let average_expense = if total_expense != 0.0 {
        Some(total_expense / expense_summary.len() as f64)
    } else {
        None
    };

    MonthlyStats {
        period,
        top_products: top_products(&sales, TOP_PRODUCTS),
        sales,
        expense_summary,
        total_revenue,
        average_revenue,
        total_expense,
        average_expense,
        net_profit: total_revenue - total_expense,
    }
}

/// One entry per category (empty ones included) plus an uncategorized bucket when needed.
/// Sorted by total descending, then name.
pub fn summarize_expenses(
    categories: &[ExpenseCategory],
    expenses: &[Expense],
) -> Vec<CategoryExpense> {
    let mut totals: HashMap<Option<RowId>, (f64, usize)> = HashMap::new();
    for expense in expenses {
        let key = expense
            .category_id
            .filter(|id| categories.iter().any(|c| c.id == *id));
        let entry = totals.entry(key).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let bucket = |category_id: Option<RowId>, name: &str| {
        let (total, count) = totals.get(&category_id).copied().unwrap_or((0.0, 0));
        CategoryExpense {
            category_id,
            category_name: name.to_string(),
            total_expense: total,
            average_expense: if count > 0 { total / count as f64 } else { 0.0 },
            expense_count: count,
        }
    };

    let mut summary: Vec<CategoryExpense> = categories
        .iter()
        .map(|c| bucket(Some(c.id), &c.name))
        .collect();
    if totals.contains_key(&None) {
        summary.push(bucket(None, UNCATEGORIZED));
    }

    summary.sort_by(|a, b| {
        b.total_expense
            .partial_cmp(&a.total_expense)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });
    summary
}

/// Group sales by product, sum quantities, keep the `limit` best sellers
pub fn top_products(sales: &[SaleWithProduct], limit: usize) -> Vec<ProductSales> {
    let mut grouped: HashMap<RowId, ProductSales> = HashMap::new();
    for sale in sales {
        let entry = grouped
            .entry(sale.product.id)
            .or_insert_with(|| ProductSales {
                product_id: sale.product.id,
                product_name: sale.product.name.clone(),
                quantity: 0,
                revenue: 0.0,
            });
        entry.quantity = entry.quantity.saturating_add(sale.sale.quantity);
        entry.revenue += sale.revenue();
    }

    let mut ranked: Vec<ProductSales> = grouped.into_values().collect();
    ranked.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    ranked.truncate(limit);
    ranked
}

pub struct StatsService {
    sales: Arc<dyn SaleRepository>,
    expenses: Arc<dyn ExpenseRepository>,
}

impl StatsService {
    pub fn new(sales: Arc<dyn SaleRepository>, expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self { sales, expenses }
    }

    pub async fn monthly_stats(
        &self,
        user_id: UserId,
        period: MonthPeriod,
    ) -> Result<MonthlyStats> {
        let (start, end) = period.bounds_millis();

        let sales = self.sales.list_sales(user_id, start, end).await?;
        let categories = self.expenses.list_expense_categories(user_id).await?;
        let expenses = self.expenses.list_expenses(user_id, start, end).await?;

        Ok(compute_monthly_stats(period, sales, &categories, &expenses))
    }
}
