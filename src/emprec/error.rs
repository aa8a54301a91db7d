use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmprecError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No ids left to assign: highest stored id is {0}")]
    IdsExhausted(u64),

    #[error("Input closed")]
    InputClosed,
}

impl EmprecError {
    /// Errors the menu loop reports and survives. Everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidId(_) | Self::EmployeeNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EmprecError>;
