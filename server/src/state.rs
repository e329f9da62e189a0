use std::sync::Arc;

use redis::aio::ConnectionManager;

use crate::config::Config;
use crate::db::DbPool;

/// Application state shared across all handlers
pub struct AppContext {
    pub pool: DbPool,
    pub cache: ConnectionManager,
    pub config: Config,
}

pub type AppState = Arc<AppContext>;
