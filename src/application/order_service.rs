use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{OrderView, PlacedOrder};
use crate::domain::ports::OrderRepository;

#[derive(Clone)]
pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn place_order(&self, customer_id: Uuid) -> Result<PlacedOrder, DomainError> {
        self.repo.place_order(customer_id)
    }

    pub fn cancel_order(&self, customer_id: Uuid, order_id: Uuid) -> Result<(), DomainError> {
        self.repo.cancel_order(customer_id, order_id)
    }

    pub fn my_orders(&self, customer_id: Uuid) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list_for_customer(customer_id)
    }

    pub fn all_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list_all()
    }
}
