use crate::error::{CarsError, Result};
use serde::Deserialize;
use std::path::Path;
use std::{fmt, str::FromStr};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cars.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarsConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub registry: RegistrySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,

    #[serde(default)]
    pub cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
            cors: false,
        }
    }
}

/// How the registry assigns ids to newly added cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Monotonic counter, never reuses an id.
    #[default]
    Sequential,
    /// `len + 1`. Can collide with an existing id after a delete.
    Length,
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdMode::Sequential => write!(f, "sequential"),
            IdMode::Length => write!(f, "length"),
        }
    }
}

impl FromStr for IdMode {
    type Err = CarsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(IdMode::Sequential),
            "length" => Ok(IdMode::Length),
            _ => Err(CarsError::Config(format!("Invalid id mode: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub id_mode: IdMode,
}

fn default_seed() -> bool {
    true
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_mode: IdMode::default(),
        }
    }
}

impl CarsConfig {
    /// Loads the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads `path` if given, otherwise `cars.toml` in the working directory
    /// when it exists, otherwise the defaults.
    ///
    /// An explicitly given path that does not exist is an error.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(CarsError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Self::load(p)
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
