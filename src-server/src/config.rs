use std::{net::SocketAddr, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub feed_url: String,
    pub store: StoreKind,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("RF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid RF_LISTEN_ADDR");
        let db_path = std::env::var("RF_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let feed_url = std::env::var("RF_FEED_URL").unwrap_or_default();
        let store = match std::env::var("RF_STORE").as_deref() {
            Ok("memory") => StoreKind::Memory,
            _ => StoreKind::Sqlite,
        };
        let timeout_ms: u64 = std::env::var("RF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            db_path,
            feed_url,
            store,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
