// Customer & Contact Repository Ports

use crate::domain::{ContactRequest, Customer, NewContactRequest, NewCustomer, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert_customer(&self, user_id: UserId, customer: &NewCustomer) -> Result<Customer>;

    async fn list_customers(&self, user_id: UserId) -> Result<Vec<Customer>>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert_contact_request(&self, request: &NewContactRequest) -> Result<ContactRequest>;
}
