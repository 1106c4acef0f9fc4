// SQLite CustomerRepository & ContactRepository Implementation

use crate::error::map_sqlx_error;
use crate::store::SqliteStore;
use async_trait::async_trait;
use tally_core::domain::{ContactRequest, Customer, NewContactRequest, NewCustomer, UserId};
use tally_core::error::Result;
use tally_core::port::{ContactRepository, CustomerRepository};

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    user_id: i64,
    gender: Option<String>,
    age_group: Option<String>,
    city: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            user_id: row.user_id,
            gender: row.gender,
            age_group: row.age_group,
            city: row.city,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    message: String,
    created_at: i64,
}

#[async_trait]
impl CustomerRepository for SqliteStore {
    async fn insert_customer(&self, user_id: UserId, customer: &NewCustomer) -> Result<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (user_id, gender, age_group, city)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&customer.gender)
        .bind(&customer.age_group)
        .bind(&customer.city)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn list_customers(&self, user_id: UserId) -> Result<Vec<Customer>> {
        let rows: Vec<CustomerRow> =
            sqlx::query_as("SELECT * FROM customers WHERE user_id = ? ORDER BY id")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[async_trait]
impl ContactRepository for SqliteStore {
    async fn insert_contact_request(&self, request: &NewContactRequest) -> Result<ContactRequest> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contact_requests (first_name, last_name, phone, email, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.message)
        .bind(request.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(ContactRequest {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        })
    }
}
