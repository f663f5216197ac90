use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOST value {0:?} is not an IP address or \"localhost\"")]
    InvalidHost(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub chatbot_rules_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            chatbot_rules_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. A `HOST` that cannot be parsed is
    /// an error so a typo never widens the listening scope.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => parse_host(&raw)?,
            None => {
                warn!("HOST not set, using {}", defaults.host);
                defaults.host
            }
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("PORT value {:?} is not a valid port, using {}", raw, defaults.port);
                defaults.port
            }),
            None => {
                warn!("PORT not set, using {}", defaults.port);
                defaults.port
            }
        };

        let chatbot_rules_path = lookup("CHATBOT_RULES_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            chatbot_rules_path,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidHost(raw.to_string()))
}
