use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::{cart_lines, menu_items, order_lines, orders};

// Catalog writes are admin tooling outside this service; the insertable
// exists so tests can seed the menu.
#[derive(Debug, Insertable)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub available: bool,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = cart_lines)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartLineRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cart_lines)]
pub struct NewCartLineRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_price: BigDecimal,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}
