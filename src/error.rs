//! Error types for ltss-webui

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingRouteParam { route: String, param: String },

    #[error("component '{0}' is already registered")]
    DuplicateComponent(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
