//! Order-placement backend for the fomo food-ordering system.
//!
//! The core is the cart → order conversion: snapshot catalog prices, fix the
//! total, create the order with its lines and clear the cart, all inside one
//! database transaction. Everything else (cart maintenance, listings,
//! cancellation) exists in service of that workflow. Authentication is
//! delegated to an upstream gateway (see `identity`).

pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod identity;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::cart_service::CartService;
use application::order_service::OrderService;
use infrastructure::cart_repo::DieselCartRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbPool};

/// Concrete service types the handlers are wired against.
pub type Orders = OrderService<DieselOrderRepository>;
pub type Carts = CartService<DieselCartRepository>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::place_order,
        handlers::orders::my_orders,
        handlers::orders::cancel_order,
        handlers::orders::all_orders,
        handlers::cart::view_cart,
        handlers::cart::add_item,
        handlers::cart::update_item,
        handlers::cart::remove_item,
    ),
    components(schemas(
        handlers::orders::PlaceOrderResponse,
        handlers::orders::MessageResponse,
        handlers::orders::OrderLineResponse,
        handlers::orders::OrderResponse,
        handlers::cart::AddCartItemRequest,
        handlers::cart::UpdateCartItemRequest,
        handlers::cart::CartLineResponse,
        handlers::cart::CartResponse,
    ))
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let orders: Orders = OrderService::new(DieselOrderRepository::new(pool.clone()));
        let carts: Carts = CartService::new(DieselCartRepository::new(pool.clone()));

        App::new()
            .app_data(web::Data::new(orders))
            .app_data(web::Data::new(carts))
            .wrap(Logger::default())
            .service(
                web::scope("/orders")
                    .route("/place", web::post().to(handlers::orders::place_order))
                    .route("/my", web::get().to(handlers::orders::my_orders))
                    .route("/admin/all", web::get().to(handlers::orders::all_orders))
                    .route("/{id}/cancel", web::post().to(handlers::orders::cancel_order)),
            )
            .service(
                web::scope("/cart")
                    .route("", web::get().to(handlers::cart::view_cart))
                    .route("/items", web::post().to(handlers::cart::add_item))
                    .route("/items/{id}", web::patch().to(handlers::cart::update_item))
                    .route("/items/{id}", web::delete().to(handlers::cart::remove_item)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
