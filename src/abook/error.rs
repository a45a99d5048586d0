use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    /// Bad argument count or content. The message is shown to the user as-is.
    #[error("{0}")]
    Parse(String),

    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    #[error("Command '{0}' not supported, try help")]
    UnsupportedCommand(String),

    #[error("Malformed store data: {0}")]
    MalformedStoreData(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Execution(String),
}

impl AbookError {
    /// Errors caused by what the user typed, as opposed to runtime faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AbookError::Parse(_)
                | AbookError::ContactNotFound(_)
                | AbookError::UnsupportedCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
