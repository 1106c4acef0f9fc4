// Customer Demographics Use Cases

use crate::domain::{Customer, CustomerProfile, Demographics, NewCustomer, UserId};
use crate::error::Result;
use crate::port::CustomerRepository;
use std::sync::Arc;

pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_customer(
        &self,
        user_id: UserId,
        gender: Option<&str>,
        age_group: Option<&str>,
        city: Option<&str>,
    ) -> Result<Customer> {
        let customer = NewCustomer::new(gender, age_group, city)?;
        self.repo.insert_customer(user_id, &customer).await
    }

    pub async fn list_profiles(&self, user_id: UserId) -> Result<Vec<CustomerProfile>> {
        let customers = self.repo.list_customers(user_id).await?;
        Ok(customers.iter().map(Customer::profile).collect())
    }

    pub async fn demographics(&self, user_id: UserId) -> Result<Demographics> {
        let profiles = self.list_profiles(user_id).await?;
        Ok(Demographics::from_profiles(&profiles))
    }
}
