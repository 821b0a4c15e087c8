use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read session config from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid session config: {0}")]
    Invalid(String),

    #[error("Unknown game mode: '{0}' (expected man_vs_man, bot_vs_man or bot_vs_bot)")]
    UnknownMode(String),
}

impl ConfigError {
    /// Errors caused by the file contents rather than its location
    pub fn is_content_error(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
