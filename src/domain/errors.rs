use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("not found")]
    NotFound,
    #[error("order cannot be cancelled")]
    InvalidState,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal error: {0}")]
    Internal(String),
}
