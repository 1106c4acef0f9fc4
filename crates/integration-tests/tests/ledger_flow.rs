//! Sales, orders, expenses and the monthly statistics built from them

mod common;

use common::{at, Harness};
use tally_core::application::{CreateOrderRequest, OrderProductLine, SaleLine};
use tally_core::domain::validate::MAX_QUANTITY;
use tally_core::domain::{MonthPeriod, Product, UserId};
use tally_core::error::AppError;

async fn product(h: &Harness, user_id: UserId, name: &str, price: f64) -> Product {
    let category = h.catalog.add_category(user_id, "Shelf").await.unwrap();
    h.catalog
        .add_product(user_id, category.id, name, price)
        .await
        .unwrap()
}

fn line(line_id: i64, product_id: i64, quantity: i64) -> SaleLine {
    SaleLine {
        line_id,
        product_id,
        quantity,
    }
}

fn order(products: &[(i64, i64)], date: &str, time: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        products: products
            .iter()
            .map(|&(id, quantity)| OrderProductLine { id, quantity })
            .collect(),
        description: "Pickup".to_string(),
        order_date: date.to_string(),
        order_time: time.to_string(),
    }
}

fn february() -> MonthPeriod {
    MonthPeriod::new(2025, 2).unwrap()
}

#[tokio::test]
async fn test_sales_batch_is_atomic() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let theo = h.user("theo").await;
    let bread = product(&h, mira.id, "Bread", 2.0).await;
    let cake = product(&h, theo.id, "Cake", 9.0).await;

    let foreign = h
        .sales
        .record_sales(mira.id, vec![line(1, bread.id, 1), line(2, cake.id, 1)])
        .await;
    assert!(matches!(foreign, Err(AppError::NotFound(_))));

    let zero = h
        .sales
        .record_sales(mira.id, vec![line(1, bread.id, 1), line(2, bread.id, 0)])
        .await;
    assert!(matches!(zero, Err(AppError::Domain(_))));

    let empty = h.sales.record_sales(mira.id, vec![]).await;
    assert!(matches!(empty, Err(AppError::Validation(_))));

    let stats = h.stats.monthly_stats(mira.id, february()).await.unwrap();
    assert!(stats.sales.is_empty());

    let sales = h
        .sales
        .record_sales(mira.id, vec![line(10, bread.id, 2), line(11, bread.id, 1)])
        .await
        .unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0].description, "Sale of item 10");

    let stats = h.stats.monthly_stats(mira.id, february()).await.unwrap();
    assert_eq!(stats.sales.len(), 2);
}

#[tokio::test]
async fn test_oversized_quantity_rejects_batch() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let bread = product(&h, mira.id, "Bread", 2.0).await;

    let huge = i64::MAX / 2 + 1;
    let result = h
        .sales
        .record_sales(mira.id, vec![line(1, bread.id, huge), line(2, bread.id, huge)])
        .await;
    assert!(matches!(result, Err(AppError::Domain(_))));

    h.sales
        .record_sales(
            mira.id,
            vec![line(1, bread.id, MAX_QUANTITY), line(2, bread.id, MAX_QUANTITY)],
        )
        .await
        .unwrap();

    let stats = h.stats.monthly_stats(mira.id, february()).await.unwrap();
    assert_eq!(stats.sales.len(), 2);
    assert_eq!(stats.top_products[0].quantity, 2 * MAX_QUANTITY);
}

#[tokio::test]
async fn test_monthly_stats_respect_month_bounds() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let bread = product(&h, mira.id, "Bread", 2.0).await;
    let jam = product(&h, mira.id, "Jam", 4.0).await;

    for (when, product_id, quantity) in [
        (at(2025, 1, 31, 23, 59), bread.id, 100),
        (at(2025, 2, 1, 0, 0), bread.id, 3),
        (at(2025, 2, 14, 9, 0), jam.id, 1),
        (at(2025, 2, 28, 23, 59), bread.id, 5),
        (at(2025, 3, 1, 0, 0), jam.id, 100),
    ] {
        h.clock.set(when);
        h.sales
            .record_sales(mira.id, vec![line(1, product_id, quantity)])
            .await
            .unwrap();
    }

    let rent = h.expenses.add_category(mira.id, "Rent").await.unwrap();
    h.expenses.add_category(mira.id, "Supplies").await.unwrap();
    for (when, amount, category) in [
        (at(2025, 2, 1, 8, 0), 100.0, Some(rent.id)),
        (at(2025, 2, 15, 8, 0), 50.0, Some(rent.id)),
        (at(2025, 2, 20, 8, 0), 30.0, None),
        (at(2025, 3, 1, 8, 0), 999.0, Some(rent.id)),
    ] {
        h.clock.set(when);
        h.expenses
            .add_expense(mira.id, amount, "Monthly cost", category)
            .await
            .unwrap();
    }

    let stats = h.stats.monthly_stats(mira.id, february()).await.unwrap();

    assert_eq!(stats.sales.len(), 3);
    assert_eq!(stats.total_revenue, 20.0);
    assert!((stats.average_revenue - 20.0 / 3.0).abs() < 1e-9);

    let summary: Vec<(&str, f64, usize)> = stats
        .expense_summary
        .iter()
        .map(|c| (c.category_name.as_str(), c.total_expense, c.expense_count))
        .collect();
    assert_eq!(
        summary,
        vec![("Rent", 150.0, 2), ("Uncategorized", 30.0, 1), ("Supplies", 0.0, 0)]
    );
    assert_eq!(stats.expense_summary[0].average_expense, 75.0);
    assert_eq!(stats.expense_summary[2].average_expense, 0.0);
    assert_eq!(stats.total_expense, 180.0);
    assert_eq!(stats.average_expense, Some(60.0));
    assert_eq!(stats.net_profit, 20.0 - 180.0);

    assert_eq!(stats.top_products[0].product_name, "Bread");
    assert_eq!(stats.top_products[0].quantity, 8);
    assert_eq!(stats.top_products[1].revenue, 4.0);

    let expenses = h.expenses.list_expenses(mira.id, february()).await.unwrap();
    assert_eq!(expenses.len(), 3);
    assert!(expenses[0].occurred_at > expenses[2].occurred_at);
}

#[tokio::test]
async fn test_expense_category_must_be_own() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let theo = h.user("theo").await;
    let rent = h.expenses.add_category(mira.id, "Rent").await.unwrap();

    let result = h
        .expenses
        .add_expense(theo.id, 10.0, "Sneaky", Some(rent.id))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let invalid = h.expenses.add_expense(mira.id, -5.0, "Refund", None).await;
    assert!(matches!(invalid, Err(AppError::Domain(_))));
    let blank = h.expenses.add_expense(mira.id, 5.0, "   ", None).await;
    assert!(matches!(blank, Err(AppError::Domain(_))));
}

#[tokio::test]
async fn test_order_writes_items_and_notification() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let theo = h.user("theo").await;
    let cake = product(&h, mira.id, "Cake", 12.5).await;
    let bread = product(&h, mira.id, "Bread", 2.0).await;
    let foreign = product(&h, theo.id, "Pie", 7.0).await;

    let late = h
        .orders
        .create_order(mira.id, order(&[(cake.id, 2), (bread.id, 3)], "2025-02-14", "18:00"))
        .await
        .unwrap();
    assert_eq!(late.items.len(), 2);
    let total: f64 = late
        .items
        .iter()
        .map(|item| item.quantity as f64 * item.product.price)
        .sum();
    assert_eq!(total, 31.0);

    let early = h
        .orders
        .create_order(mira.id, order(&[(bread.id, 1)], "2025-02-13", "07:30"))
        .await
        .unwrap();

    let all = h.orders.list_orders(mira.id, None).await.unwrap();
    assert_eq!(
        all.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![early.id, late.id]
    );

    let valentines = h
        .orders
        .list_orders(mira.id, Some("2025-02-14"))
        .await
        .unwrap();
    assert_eq!(valentines.len(), 1);
    assert_eq!(valentines[0].items[0].product.name, "Cake");
    assert!(h.orders.list_orders(theo.id, None).await.unwrap().is_empty());

    let notifications = h.notifications.list(mira.id).await.unwrap();
    assert_eq!(notifications.len(), 2);
    assert!(notifications
        .iter()
        .any(|n| n.message == format!("New order #{} for 2025-02-14 at 18:00", late.id)));

    // A foreign product aborts the order and its notification
    let rejected = h
        .orders
        .create_order(mira.id, order(&[(bread.id, 1), (foreign.id, 1)], "2025-02-15", "10:00"))
        .await;
    assert!(matches!(rejected, Err(AppError::NotFound(_))));
    assert_eq!(h.orders.list_orders(mira.id, None).await.unwrap().len(), 2);
    assert_eq!(h.notifications.list(mira.id).await.unwrap().len(), 2);

    let bad_date = h
        .orders
        .create_order(mira.id, order(&[(bread.id, 1)], "14.02.2025", "10:00"))
        .await;
    assert!(matches!(bad_date, Err(AppError::Domain(_))));
    assert!(h.orders.list_orders(mira.id, Some("yesterday")).await.is_err());
}

#[tokio::test]
async fn test_notifications_mark_read() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let theo = h.user("theo").await;
    let cake = product(&h, mira.id, "Cake", 12.5).await;
    h.orders
        .create_order(mira.id, order(&[(cake.id, 1)], "2025-02-14", "18:00"))
        .await
        .unwrap();

    let id = h.notifications.list(mira.id).await.unwrap()[0].id;
    assert!(matches!(
        h.notifications.mark_read(theo.id, id).await,
        Err(AppError::NotFound(_))
    ));

    h.notifications.mark_read(mira.id, id).await.unwrap();
    assert!(!h.notifications.list(mira.id).await.unwrap()[0].is_new);
}

#[tokio::test]
async fn test_referenced_product_cannot_be_deleted() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let sold = product(&h, mira.id, "Bread", 2.0).await;
    let ordered = product(&h, mira.id, "Cake", 10.0).await;
    let unused = product(&h, mira.id, "Jam", 3.0).await;

    h.sales
        .record_sales(mira.id, vec![line(1, sold.id, 1)])
        .await
        .unwrap();
    h.orders
        .create_order(mira.id, order(&[(ordered.id, 1)], "2025-02-14", "18:00"))
        .await
        .unwrap();

    for id in [sold.id, ordered.id] {
        assert!(matches!(
            h.catalog.delete_product(mira.id, id).await,
            Err(AppError::Conflict(_))
        ));
    }
    h.catalog.delete_product(mira.id, unused.id).await.unwrap();
    assert!(matches!(
        h.catalog.delete_product(mira.id, unused.id).await,
        Err(AppError::NotFound(_))
    ));

    let listing = h.catalog.list_categories(mira.id).await.unwrap();
    let names: Vec<&str> = listing
        .iter()
        .flat_map(|c| c.products.iter().map(|p| p.name.as_str()))
        .collect();
    assert!(names.contains(&"Bread"));
    assert!(!names.contains(&"Jam"));
}
