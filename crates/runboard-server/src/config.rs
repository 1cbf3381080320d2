//! Server configuration, read from flags or the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use runboard_store::DEFAULT_DATABASE;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Clone)]
#[command(name = "runboard-server", version, about = "Game run leaderboard API")]
pub struct ServerConfig {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", hide_env_values = true)]
    pub mongo_uri: String,

    /// Database holding the `runs` collection
    #[arg(long, env = "RUNBOARD_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Interface to listen on
    #[arg(long, env = "RUNBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Seconds to wait for the store at startup before giving up
    #[arg(long, env = "RUNBOARD_CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

// The connection string carries credentials; keep it out of logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("mongo_uri", &"<redacted>")
            .field("database", &self.database)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
