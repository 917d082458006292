use std::sync::Arc;

use listings::{Listing, get_listings};
use redis::aio::ConnectionManager;
use tokio::sync::RwLock;
use tracing::info;

use super::{config::Config, database::init_redis};

pub struct AppState {
    pub config: Config,
    /// The catalog snapshot. Replaced or appended to wholesale; the shop
    /// core does all filtering on its own copy.
    pub listings: RwLock<Vec<Listing>>,
    pub redis_connection: ConnectionManager,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let listings = get_listings(&config.bank_path).expect("Bank misconfigured!");
        info!("Loaded {} listings from the bank", listings.len());

        let redis_connection = init_redis(&config.redis_url).await;

        Arc::new(Self {
            config,
            listings: RwLock::new(listings),
            redis_connection,
        })
    }
}
