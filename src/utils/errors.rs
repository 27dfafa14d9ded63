use std::io;
use thiserror::Error;

use crate::components::aircraft::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Protocol error: {0}")]
    ProtocolError(#[from] serde_json::Error),
}
