use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::CartLineView;
use crate::errors::AppError;
use crate::identity::Principal;
use crate::Carts;

use super::orders::MessageResponse;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    pub menu_item_id: Uuid,
    /// Defaults to 1 when omitted.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineResponse {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub food_name: String,
    pub quantity: i32,
    /// Current catalog price; the snapshot is taken at placement time.
    pub unit_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
}

impl From<CartLineView> for CartLineResponse {
    fn from(line: CartLineView) -> Self {
        CartLineResponse {
            id: line.id,
            menu_item_id: line.menu_item_id,
            food_name: line.food_name,
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /cart
#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "The caller's cart", body = CartResponse),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn view_cart(
    carts: web::Data<Carts>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    let svc = carts.get_ref().clone();
    let lines = web::block(move || svc.view(principal.id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CartResponse {
        items: lines.into_iter().map(Into::into).collect(),
    }))
}

/// POST /cart/items
///
/// Adds an item to the cart; adding an item that is already in the cart
/// accumulates onto the existing line.
#[utoipa::path(
    post,
    path = "/cart/items",
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Item added", body = MessageResponse),
        (status = 400, description = "Unknown item or invalid quantity"),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn add_item(
    carts: web::Data<Carts>,
    principal: Principal,
    body: web::Json<AddCartItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let svc = carts.get_ref().clone();
    web::block(move || svc.add_item(principal.id, body.menu_item_id, body.quantity))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Item added".to_string(),
    }))
}

/// PATCH /cart/items/{id}
#[utoipa::path(
    patch,
    path = "/cart/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart line UUID"),
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity updated", body = MessageResponse),
        (status = 400, description = "Line missing, not owned, or invalid quantity"),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn update_item(
    carts: web::Data<Carts>,
    principal: Principal,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCartItemRequest>,
) -> Result<HttpResponse, AppError> {
    let line_id = path.into_inner();
    let quantity = body.into_inner().quantity;
    let svc = carts.get_ref().clone();
    web::block(move || svc.set_quantity(principal.id, line_id, quantity))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Item updated".to_string(),
    }))
}

/// DELETE /cart/items/{id}
#[utoipa::path(
    delete,
    path = "/cart/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart line UUID"),
    ),
    responses(
        (status = 200, description = "Line removed", body = MessageResponse),
        (status = 400, description = "Line missing or not owned"),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn remove_item(
    carts: web::Data<Carts>,
    principal: Principal,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let line_id = path.into_inner();
    let svc = carts.get_ref().clone();
    web::block(move || svc.remove_line(principal.id, line_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Item removed".to_string(),
    }))
}
