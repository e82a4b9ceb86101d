use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("{0} has no index.html, build the frontend first (trunk build --release)")]
    MissingDist(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_DIST_DIR: &'static str = "frontend/dist";

    /// Reads HOST_PORT and DIST_DIR from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("HOST_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => Self::DEFAULT_PORT,
        };
        let dist_dir = get("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DIST_DIR));
        Ok(Self { port, dist_dir })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dist_dir.join("index.html").is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingDist(self.dist_dir.clone()))
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = HostConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.addr().port(), 8080);
    }

    #[test]
    fn reads_port_and_dist_dir() {
        let config =
            HostConfig::from_vars(vars(&[("HOST_PORT", " 3100 "), ("DIST_DIR", "/srv/spllit")]))
                .unwrap();
        assert_eq!(config.port, 3100);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/spllit"));
    }

    #[test]
    fn rejects_a_bad_port() {
        let err = HostConfig::from_vars(vars(&[("HOST_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn validate_requires_an_index() {
        let config = HostConfig {
            port: 8080,
            dist_dir: PathBuf::from("/definitely/not/here"),
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingDist(_))));
    }
}
