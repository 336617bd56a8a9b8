use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{admin, auth, contact, order, product, reference, review, stats};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    // The browser client is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        // Auth
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        // Products
        .route(
            "/api/products",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/api/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/api/farmer/{farmer_id}/products", get(product::farmer_products))
        // Orders
        .route("/api/orders", post(order::create_order))
        .route("/api/orders/{id}", put(order::update_order))
        .route("/api/buyer/{buyer_id}/orders", get(order::buyer_orders))
        .route("/api/farmer/{farmer_id}/orders", get(order::farmer_orders))
        // Reviews
        .route("/api/reviews", post(review::create_review))
        .route("/api/products/{id}/reviews", get(review::product_reviews))
        .route("/api/products/{id}/rating", get(review::product_rating))
        // Contacts
        .route("/api/contacts", post(contact::create_contact))
        .route("/api/contacts/{id}", put(contact::update_contact))
        .route("/api/farmer/{farmer_id}/contacts", get(contact::farmer_contacts))
        // Admin
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/products", get(admin::list_products))
        .route(
            "/api/admin/products/{id}/approve",
            put(admin::approve_product),
        )
        // Stats and reference data
        .route("/api/stats", get(stats::get_stats))
        .route("/api/categories", get(reference::categories))
        .route("/api/provinces", get(reference::provinces))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn index() -> &'static str {
    "Agri-Connect RDC API"
}
