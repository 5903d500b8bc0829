use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::{Customer, CustomerId};
use crate::repository::{Collection, RecordError};
use crate::storage::RecordStore;

#[derive(Clone)]
pub struct CustomerManager {
    customers: Collection<Customer>,
}

impl CustomerManager {
    pub fn new(store: Arc<dyn RecordStore<Customer>>) -> Self {
        Self {
            customers: Collection::new(store),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            customers: Collection::from_path(path),
        }
    }

    pub fn create(&self, customer: Customer) -> Result<(), RecordError> {
        self.customers.create(customer)
    }

    pub fn delete(&self, customer_id: &CustomerId) -> Result<Customer, RecordError> {
        self.customers.delete(customer_id.as_str())
    }

    pub fn display(&self, customer_id: &CustomerId) -> Result<Customer, RecordError> {
        let customer = self.customers.find(customer_id.as_str())?;
        info!(
            customer_id = %customer.customer_id,
            name = %customer.name,
            email = %customer.email,
            "customer"
        );
        Ok(customer)
    }

    pub fn modify(
        &self,
        customer_id: &CustomerId,
        field: &str,
        new_value: &str,
    ) -> Result<Customer, RecordError> {
        self.customers.modify(customer_id.as_str(), field, new_value)
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.list()
    }

    pub fn exists(&self, customer_id: &CustomerId) -> bool {
        self.list()
            .iter()
            .any(|customer| &customer.customer_id == customer_id)
    }
}
