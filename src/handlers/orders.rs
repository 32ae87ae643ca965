use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::{OrderLineView, OrderView};
use crate::errors::AppError;
use crate::identity::Principal;
use crate::Orders;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: Uuid,
    /// Decimal total as a string to avoid floating-point issues, e.g. "32.99"
    pub total_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: Uuid,
    /// Null when the catalog item was deleted after the order was placed.
    pub menu_item_id: Option<Uuid>,
    pub food_name: Option<String>,
    pub quantity: i32,
    pub unit_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_price: String,
    pub created_at: String,
    pub items: Vec<OrderLineResponse>,
}

impl From<OrderLineView> for OrderLineResponse {
    fn from(line: OrderLineView) -> Self {
        OrderLineResponse {
            id: line.id,
            menu_item_id: line.menu_item_id,
            food_name: line.food_name,
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status.as_str().to_string(),
            total_price: order.total_price.to_string(),
            created_at: order.created_at.to_rfc3339(),
            items: order.lines.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders/place
///
/// Converts the caller's cart into an order. The cart read, the order and
/// line inserts, the total update and the cart clear all commit in one
/// database transaction; an empty cart is rejected before anything mutates.
#[utoipa::path(
    post,
    path = "/orders/place",
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Cart is empty"),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    orders: web::Data<Orders>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    let svc = orders.get_ref().clone();
    let placed = web::block(move || svc.place_order(principal.id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!(
        "customer {} placed order {} (total {})",
        principal.id,
        placed.id,
        placed.total_price
    );

    Ok(HttpResponse::Created().json(PlaceOrderResponse {
        message: "Order placed".to_string(),
        order_id: placed.id,
        total_price: placed.total_price.to_string(),
    }))
}

/// GET /orders/my
///
/// The caller's orders, newest first, each with its lines.
#[utoipa::path(
    get,
    path = "/orders/my",
    responses(
        (status = 200, description = "Orders owned by the caller", body = [OrderResponse]),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn my_orders(
    orders: web::Data<Orders>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    let svc = orders.get_ref().clone();
    let views = web::block(move || svc.my_orders(principal.id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = views.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /orders/{id}/cancel
///
/// Cancels a pending order owned by the caller. Orders already preparing,
/// delivered or cancelled cannot be cancelled.
#[utoipa::path(
    post,
    path = "/orders/{id}/cancel",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 202, description = "Order cancelled", body = MessageResponse),
        (status = 400, description = "Order missing, not owned, or not pending"),
        (status = 401, description = "No authenticated principal"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn cancel_order(
    orders: web::Data<Orders>,
    principal: Principal,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let svc = orders.get_ref().clone();
    web::block(move || svc.cancel_order(principal.id, order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("customer {} cancelled order {}", principal.id, order_id);

    Ok(HttpResponse::Accepted().json(MessageResponse {
        message: "Order cancelled".to_string(),
    }))
}

/// GET /orders/admin/all
///
/// Every order across all customers. Requires the admin role claim.
#[utoipa::path(
    get,
    path = "/orders/admin/all",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 401, description = "No authenticated principal"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn all_orders(
    orders: web::Data<Orders>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    principal.require_admin()?;

    let svc = orders.get_ref().clone();
    let views = web::block(move || svc.all_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = views.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}
