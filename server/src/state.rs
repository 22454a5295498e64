use std::sync::Arc;

use redis::aio::ConnectionManager;

use super::{config::Config, database::init_redis};

pub struct AppState {
    pub config: Config,
    pub redis_connection: ConnectionManager,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis_connection = init_redis(&config.redis_url).await;

        Arc::new(Self {
            config,
            redis_connection,
        })
    }
}
