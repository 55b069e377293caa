//! Server configuration from command-line flags and environment variables.

use clap::Parser;

/// Default log filter when neither `--log-filter` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "hextodo=debug,tower_http=debug";

/// Runtime settings for the task server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "hextodo")]
#[command(about = "TODO-list server exposing tasks over REST and GraphQL")]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "HEXTODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP listener.
    #[arg(short, long, env = "HEXTODO_PORT", default_value_t = 3000)]
    pub port: u16,

    /// `tracing` filter directives.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl ServerConfig {
    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
