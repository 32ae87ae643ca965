use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::CartLineView;
use crate::domain::ports::CartRepository;

#[derive(Clone)]
pub struct CartService<R> {
    repo: R,
}

impl<R: CartRepository> CartService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn view(&self, customer_id: Uuid) -> Result<Vec<CartLineView>, DomainError> {
        self.repo.view(customer_id)
    }

    pub fn add_item(
        &self,
        customer_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<(), DomainError> {
        self.repo.add_item(customer_id, menu_item_id, quantity)
    }

    pub fn set_quantity(
        &self,
        customer_id: Uuid,
        line_id: Uuid,
        quantity: i32,
    ) -> Result<(), DomainError> {
        self.repo.set_quantity(customer_id, line_id, quantity)
    }

    pub fn remove_line(&self, customer_id: Uuid, line_id: Uuid) -> Result<(), DomainError> {
        self.repo.remove_line(customer_id, line_id)
    }
}
