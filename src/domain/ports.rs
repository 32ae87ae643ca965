use uuid::Uuid;

use super::errors::DomainError;
use super::order::{CartLineView, OrderView, PlacedOrder};

pub trait OrderRepository: Send + Sync + 'static {
    /// Convert the customer's cart into an order, atomically: either the
    /// order and all its lines exist and the cart is empty, or nothing
    /// changed. An empty cart fails with `EmptyCart` before any mutation.
    fn place_order(&self, customer_id: Uuid) -> Result<PlacedOrder, DomainError>;

    /// Cancel a pending order owned by the customer.
    fn cancel_order(&self, customer_id: Uuid, order_id: Uuid) -> Result<(), DomainError>;

    fn list_for_customer(&self, customer_id: Uuid) -> Result<Vec<OrderView>, DomainError>;

    fn list_all(&self) -> Result<Vec<OrderView>, DomainError>;
}

pub trait CartRepository: Send + Sync + 'static {
    fn view(&self, customer_id: Uuid) -> Result<Vec<CartLineView>, DomainError>;

    /// Add `quantity` of an item to the cart: inserts a new line, or
    /// accumulates onto the existing line for the same item.
    fn add_item(
        &self,
        customer_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<(), DomainError>;

    fn set_quantity(
        &self,
        customer_id: Uuid,
        line_id: Uuid,
        quantity: i32,
    ) -> Result<(), DomainError>;

    fn remove_line(&self, customer_id: Uuid, line_id: Uuid) -> Result<(), DomainError>;
}
