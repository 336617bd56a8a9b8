use axum::{Json, http::StatusCode, response::IntoResponse};

/// Product categories offered on the marketplace
pub const CATEGORIES: [&str; 10] = [
    "Légumes",
    "Fruits",
    "Céréales",
    "Légumineuses",
    "Tubercules",
    "Épices",
    "Produits laitiers",
    "Viandes",
    "Poissons",
    "Autres",
];

/// DRC provinces selectable for a listing
pub const PROVINCES: [&str; 24] = [
    "Kinshasa",
    "Haut-Katanga",
    "Lualaba",
    "Kasaï-Oriental",
    "Kasaï",
    "Kasaï-Central",
    "Lomami",
    "Sankuru",
    "Maniema",
    "Sud-Kivu",
    "Nord-Kivu",
    "Ituri",
    "Haut-Uele",
    "Bas-Uele",
    "Tshopo",
    "Mongala",
    "Sud-Ubangi",
    "Nord-Ubangi",
    "Équateur",
    "Tshuapa",
    "Mai-Ndombe",
    "Kwilu",
    "Kwango",
    "Kongo-Central",
];

/// Handler for GET /api/categories
pub async fn categories() -> impl IntoResponse {
    (StatusCode::OK, Json(CATEGORIES))
}

/// Handler for GET /api/provinces
pub async fn provinces() -> impl IntoResponse {
    (StatusCode::OK, Json(PROVINCES))
}
