// Route table

use crate::handlers::{
    account, auth, catalog, contact, customers, expenses, fallback, health, notifications, orders,
    sales, stats,
};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Request bodies above this are rejected with 413
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/contact", post(contact::submit))
        .route(
            "/categories",
            get(catalog::list_categories).post(catalog::add_category),
        )
        .route("/products", post(catalog::add_product))
        .route(
            "/products/:id",
            put(catalog::update_product).delete(catalog::delete_product),
        )
        .route(
            "/expense-categories",
            get(expenses::list_categories).post(expenses::add_category),
        )
        .route(
            "/expenses",
            get(expenses::list_expenses).post(expenses::add_expense),
        )
        .route("/sales", post(sales::record_sales))
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/stats", get(stats::monthly_stats))
        .route("/account/name", put(account::change_name))
        .route("/account/username", put(account::change_user_name))
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications/:id", patch(notifications::mark_read))
        .route(
            "/customers",
            get(customers::list_customers).post(customers::add_customer),
        )
        .route("/customers/demographics", get(customers::demographics));

    Router::new()
        .route("/healthz", get(health::healthz))
        .nest("/api", api)
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
