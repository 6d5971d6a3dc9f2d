use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::gateway::BackendKind;

/// Server configuration, from CLI flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "duelhub", about = "Deck building and online play backend")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "DUELHUB_BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind_addr: SocketAddr,

    /// Storage engine behind the persistence gateway.
    #[arg(long, value_enum, env = "DUELHUB_BACKEND", default_value = "memory")]
    pub backend: BackendKind,

    /// Directory for snapshots and saved sessions.
    #[arg(long, env = "DUELHUB_DATA_DIR", default_value = ".data")]
    pub data_dir: PathBuf,

    /// Third-party card catalog endpoint.
    #[arg(
        long,
        env = "DUELHUB_CATALOG_URL",
        default_value = "https://db.ygoprodeck.com/api/v7/cardinfo.php"
    )]
    pub catalog_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = Config::parse_from(["duelhub"]);
        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn backend_flag_selects_durable() {
        let config = Config::parse_from(["duelhub", "--backend", "durable"]);
        assert_eq!(config.backend, BackendKind::Durable);
    }
}
