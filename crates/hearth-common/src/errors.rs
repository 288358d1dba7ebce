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
pub enum WidgetError {
    #[error("unknown timezone: {0}")]
    Timezone(String),

    #[error("preference storage error: {0}")]
    Storage(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("presence error: {0}")]
    Presence(String),
}
