use crate::db::{
    DbPool, contact_store::ContactStore, order_store::OrderStore, product_store::ProductStore,
    review_store::ReviewStore, stats_store::StatsStore, user_store::UserStore,
};

/// Shared application state: one store per entity, all over the same pool
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub products: ProductStore,
    pub orders: OrderStore,
    pub reviews: ReviewStore,
    pub contacts: ContactStore,
    pub stats: StatsStore,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            products: ProductStore::new(pool.clone()),
            orders: OrderStore::new(pool.clone()),
            reviews: ReviewStore::new(pool.clone()),
            contacts: ContactStore::new(pool.clone()),
            stats: StatsStore::new(pool),
        }
    }
}
