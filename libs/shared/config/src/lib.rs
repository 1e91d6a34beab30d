use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("PORT is not a valid port number, using default 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("SEED_DEMO_DATA is not a boolean, defaulting to true");
                true
            }),
            Err(_) => true,
        };

        Self {
            port,
            seed_demo_data,
        }
    }
}
