//! Runtime settings for the server and the startup gate.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/characters";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Delay between connection attempts while waiting for the database.
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub retry_delay: Duration,
}
