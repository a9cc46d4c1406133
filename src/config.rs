//! Startup configuration for the HTTP service.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the dataset expected next to the executable.
pub const DEFAULT_DATASET_FILE: &str = "faculty_feedback_2000.csv";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Fills in the defaults for anything not given on the command line.
    pub fn resolve(data: Option<PathBuf>, host: IpAddr, port: u16) -> Result<Self> {
        let dataset_path = match data {
            Some(path) => path,
            None => default_dataset_path()?,
        };

        Ok(Self {
            dataset_path,
            bind_addr: SocketAddr::new(host, port),
        })
    }
}

/// The dataset path used when none is given: [`DEFAULT_DATASET_FILE`] in the
/// directory holding the running executable.
pub fn default_dataset_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    Ok(dataset_beside(&exe))
}

fn dataset_beside(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or(Path::new("."))
        .join(DEFAULT_DATASET_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_beside_executable() {
        let path = dataset_beside(Path::new("/opt/feedback/bin/faculty_feedback"));
        assert_eq!(
            path,
            PathBuf::from("/opt/feedback/bin/faculty_feedback_2000.csv")
        );
    }

    #[test]
    fn test_resolve_explicit_path() {
        let config =
            ServerConfig::resolve(Some(PathBuf::from("data.csv")), DEFAULT_HOST, 8080).unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("data.csv"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_resolve_default_path() {
        let config = ServerConfig::resolve(None, DEFAULT_HOST, DEFAULT_PORT).unwrap();
        assert!(config.dataset_path.ends_with(DEFAULT_DATASET_FILE));
        assert_eq!(config.bind_addr.port(), 5000);
    }
}
