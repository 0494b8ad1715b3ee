use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::http::encoding::ContentEncoding;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";
pub const DEFAULT_DATA_DIR: &str = "/tmp/data/codecrafters.io/http-server-tester/";
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 1024 * 1024;

/// Server settings.
///
/// The binary always runs with [`Config::default`]; the loaders exist so the
/// listener, file store and encoder set can be injected by tests or embedders.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the acceptor binds to.
    pub listen_addr: String,
    /// Directory backing the `/files/*` routes.
    pub data_dir: PathBuf,
    /// Bytes requested from the socket per read.
    pub read_buffer_size: usize,
    /// Upper bound on a buffered request before the connection is dropped.
    pub max_request_size: usize,
    /// Content encodings the server may apply, in no particular order.
    pub encodings: Vec<ContentEncoding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            max_request_size: DEFAULT_MAX_REQUEST_SIZE,
            encodings: vec![ContentEncoding::Gzip],
        }
    }
}

impl Config {
    pub fn from_yaml(src: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(src).context("invalid config")?;

        if cfg.read_buffer_size == 0 {
            anyhow::bail!("read_buffer_size must be greater than zero");
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&src)
    }
}
