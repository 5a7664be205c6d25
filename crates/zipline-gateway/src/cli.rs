use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "ZIPLINE_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "ZIPLINE_GATEWAY_PUBLIC_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "ZIPLINE_GATEWAY_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "ZIPLINE_GATEWAY_MYSQL_DSN";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5050";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:5050";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "zipline-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL short links are minted under, e.g. `https://sho.rt`.
    #[arg(
        long,
        env = PUBLIC_BASE_URL_ENV,
        default_value = DEFAULT_PUBLIC_BASE_URL,
    )]
    pub public_base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,
}
