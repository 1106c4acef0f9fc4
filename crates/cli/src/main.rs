//! Tally CLI - Command-line client for the Tally HTTP API

mod client;
mod session;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tabled::{Table, Tabled};

use client::ApiClient;

const DEFAULT_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Tally small-business finance tracker CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL
    #[arg(long, env = "TALLY_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(short, long)]
        email: String,

        /// Password (prefer the environment variable over the flag)
        #[arg(short, long, env = "TALLY_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// End the session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// List product categories and their products
    Categories,

    /// List expenses of a month
    Expenses {
        #[arg(short, long)]
        month: Option<u32>,
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Record an expense
    Spend {
        #[arg(short, long)]
        amount: f64,
        #[arg(short, long)]
        description: String,
        /// Expense category id
        #[arg(short, long)]
        category: Option<i64>,
    },

    /// Record a sale of one product
    Sell {
        /// Product id
        product: i64,
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },

    /// List orders, optionally for one day (YYYY-MM-DD)
    Orders {
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Monthly statistics (defaults to the current month)
    Stats {
        #[arg(short, long)]
        month: Option<u32>,
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List notifications
    Notifications,

    /// Mark a notification as read
    Read {
        /// Notification id
        id: i64,
    },

    /// Customer demographics
    Demographics,
}

#[derive(Deserialize)]
struct Profile {
    email: String,
    user_name: String,
    name: String,
}

#[derive(Deserialize)]
struct LoginResult {
    token: String,
    user: Profile,
}

#[derive(Deserialize)]
struct CategoryListing {
    name: String,
    products: Vec<ProductListing>,
}

#[derive(Deserialize)]
struct ProductListing {
    id: i64,
    name: String,
    price: f64,
}

#[derive(Tabled)]
struct ProductRow {
    category: String,
    id: i64,
    product: String,
    price: String,
}

#[derive(Deserialize)]
struct ExpenseListing {
    id: i64,
    amount: f64,
    description: String,
    occurred_at: i64,
}

#[derive(Tabled)]
struct ExpenseRow {
    id: i64,
    date: String,
    amount: String,
    description: String,
}

#[derive(Deserialize)]
struct OrderListing {
    id: i64,
    description: String,
    order_date: String,
    order_time: String,
    items: Vec<OrderItemListing>,
}

#[derive(Deserialize)]
struct OrderItemListing {
    quantity: i64,
    product: ProductListing,
}

#[derive(Tabled)]
struct OrderRow {
    id: i64,
    date: String,
    time: String,
    items: String,
    total: String,
    description: String,
}

#[derive(Deserialize)]
struct NotificationListing {
    id: i64,
    message: String,
    is_new: bool,
    created_at: i64,
}

#[derive(Tabled)]
struct NotificationRow {
    id: i64,
    new: String,
    when: String,
    message: String,
}

#[derive(Deserialize)]
struct StatsResult {
    top_products: Vec<TopProduct>,
    expense_summary: Vec<CategoryExpense>,
    total_revenue: f64,
    average_revenue: f64,
    total_expense: f64,
    average_expense: Option<f64>,
    net_profit: f64,
}

#[derive(Deserialize, Tabled)]
struct TopProduct {
    product_name: String,
    quantity: i64,
    revenue: f64,
}

#[derive(Deserialize, Tabled)]
struct CategoryExpense {
    category_name: String,
    expense_count: usize,
    total_expense: f64,
    average_expense: f64,
}

#[derive(Deserialize)]
struct Demographics {
    total_customers: usize,
    by_gender: BTreeMap<String, u64>,
    by_age_group: BTreeMap<String, u64>,
    by_city: BTreeMap<String, u64>,
}

#[derive(Tabled)]
struct CountRow {
    value: String,
    customers: u64,
}

fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Fill a missing month/year from the current UTC date
fn month_or_now(month: Option<u32>, year: Option<i32>) -> (u32, i32) {
    let now = Utc::now();
    (month.unwrap_or(now.month()), year.unwrap_or(now.year()))
}

fn print_counts(title: &str, counts: BTreeMap<String, u64>) {
    println!("{}", title.cyan().bold());
    if counts.is_empty() {
        println!("  {}", "(no data)".yellow());
    } else {
        let rows: Vec<CountRow> = counts
            .into_iter()
            .map(|(value, customers)| CountRow { value, customers })
            .collect();
        println!("{}", Table::new(rows));
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let session_path = session::default_path();
    let api = ApiClient::new(&cli.url, session::load(&session_path));

    match cli.command {
        Commands::Login { email, password } => {
            let result: LoginResult = api
                .post(
                    "/api/auth/login",
                    json!({ "email": email, "password": password }),
                )
                .await?;
            session::save(&session_path, &result.token)?;

            println!(
                "{}",
                format!("✓ Logged in as {} ({})", result.user.name, result.user.email)
                    .green()
                    .bold()
            );
        }

        Commands::Logout => {
            let _: Value = api.post("/api/auth/logout", json!({})).await?;
            session::clear(&session_path)?;
            println!("{}", "✓ Logged out".green().bold());
        }

        Commands::Whoami => {
            let profile: Profile = api.get("/api/auth/me").await?;
            println!("  {} {}", "Name:".bold(), profile.name);
            println!("  {} {}", "User name:".bold(), profile.user_name);
            println!("  {} {}", "Email:".bold(), profile.email);
        }

        Commands::Categories => {
            let categories: Vec<CategoryListing> = api.get("/api/categories").await?;
            let rows: Vec<ProductRow> = categories
                .into_iter()
                .flat_map(|category| {
                    let name = category.name;
                    category.products.into_iter().map(move |p| ProductRow {
                        category: name.clone(),
                        id: p.id,
                        product: p.name,
                        price: format!("{:.2}", p.price),
                    })
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No products yet".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Expenses { month, year } => {
            let (month, year) = month_or_now(month, year);
            let expenses: Vec<ExpenseListing> = api
                .get(&format!("/api/expenses?month={}&year={}", month, year))
                .await?;
            let rows: Vec<ExpenseRow> = expenses
                .into_iter()
                .map(|e| ExpenseRow {
                    id: e.id,
                    date: format_millis(e.occurred_at),
                    amount: format!("{:.2}", e.amount),
                    description: e.description,
                })
                .collect();

            println!("{}", format!("Expenses {}-{:02}", year, month).cyan().bold());
            if rows.is_empty() {
                println!("{}", "No expenses".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Spend {
            amount,
            description,
            category,
        } => {
            let expense: ExpenseListing = api
                .post(
                    "/api/expenses",
                    json!({
                        "amount": amount,
                        "description": description,
                        "category_id": category,
                    }),
                )
                .await?;
            println!(
                "{}",
                format!("✓ Expense #{} recorded ({:.2})", expense.id, expense.amount)
                    .green()
                    .bold()
            );
        }

        Commands::Sell { product, quantity } => {
            let sales: Vec<Value> = api
                .post(
                    "/api/sales",
                    json!([{ "line_id": 1, "product_id": product, "quantity": quantity }]),
                )
                .await?;
            println!(
                "{}",
                format!("✓ {} sale(s) recorded", sales.len()).green().bold()
            );
        }

        Commands::Orders { date } => {
            let path = match &date {
                Some(date) => format!("/api/orders?date={}", date),
                None => "/api/orders".to_string(),
            };
            let orders: Vec<OrderListing> = api.get(&path).await?;
            let rows: Vec<OrderRow> = orders
                .into_iter()
                .map(|o| {
                    let total: f64 = o
                        .items
                        .iter()
                        .map(|i| i.quantity as f64 * i.product.price)
                        .sum();
                    let items = o
                        .items
                        .iter()
                        .map(|i| format!("{}x {}", i.quantity, i.product.name))
                        .collect::<Vec<_>>()
                        .join(", ");
                    OrderRow {
                        id: o.id,
                        date: o.order_date,
                        time: o.order_time,
                        items,
                        total: format!("{:.2}", total),
                        description: o.description,
                    }
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No orders".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Stats { month, year } => {
            let (month, year) = month_or_now(month, year);
            let stats: StatsResult = api
                .get(&format!("/api/stats?month={}&year={}", month, year))
                .await?;

            println!("{}", format!("Statistics {}-{:02}", year, month).cyan().bold());
            println!();
            println!("  {} {:.2}", "Revenue:".bold(), stats.total_revenue);
            println!("  {} {:.2}", "Avg per sale:".bold(), stats.average_revenue);
            println!("  {} {:.2}", "Expenses:".bold(), stats.total_expense);
            match stats.average_expense {
                Some(avg) => println!("  {} {:.2}", "Avg per category:".bold(), avg),
                None => println!("  {} -", "Avg per category:".bold()),
            }
            let profit = format!("{:.2}", stats.net_profit);
            let profit = if stats.net_profit < 0.0 {
                profit.red()
            } else {
                profit.green()
            };
            println!("  {} {}", "Net profit:".bold(), profit);
            println!();

            if !stats.top_products.is_empty() {
                println!("{}", "Top products".cyan().bold());
                println!("{}", Table::new(stats.top_products));
                println!();
            }
            if !stats.expense_summary.is_empty() {
                println!("{}", "Expenses by category".cyan().bold());
                println!("{}", Table::new(stats.expense_summary));
            }
        }

        Commands::Notifications => {
            let notifications: Vec<NotificationListing> = api.get("/api/notifications").await?;
            let rows: Vec<NotificationRow> = notifications
                .into_iter()
                .map(|n| NotificationRow {
                    id: n.id,
                    new: if n.is_new { "●".to_string() } else { String::new() },
                    when: format_millis(n.created_at),
                    message: n.message,
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No notifications".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Read { id } => {
            let _: Value = api
                .patch(&format!("/api/notifications/{}", id))
                .await
                .with_context(|| format!("Failed to mark notification {}", id))?;
            println!("{}", format!("✓ Notification {} marked as read", id).green());
        }

        Commands::Demographics => {
            let demographics: Demographics = api.get("/api/customers/demographics").await?;
            println!(
                "  {} {}",
                "Customers:".bold(),
                demographics.total_customers
            );
            println!();
            print_counts("By gender", demographics.by_gender);
            print_counts("By age group", demographics.by_age_group);
            print_counts("By city", demographics.by_city);
        }
    }

    Ok(())
}
