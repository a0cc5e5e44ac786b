use std::net::{IpAddr, SocketAddr};

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-points")]
#[command(about = "Scores purchase receipts with loyalty points")]
#[command(version)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "RECEIPTS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, short = 'p', env = "RECEIPTS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "RECEIPTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one line per event
    Compact,
    /// One JSON object per event
    Json,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
