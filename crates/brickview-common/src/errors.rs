use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("message serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("message sink error: {0}")]
    Sink(String),

    #[error("message channel closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("unknown node reference: {0}")]
    UnknownNode(String),

    #[error("node {0} would become its own ancestor")]
    Cycle(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BrickviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
