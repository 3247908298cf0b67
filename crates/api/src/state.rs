use infra::db::Db;

/// Shared state injected into the GraphQL context and the HTTP router.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}
