use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not parse interpreter version from output: {output:?}")]
    VersionParseError { output: String },

    #[error("No Python interpreter found (tried: {})", tried.join(", "))]
    InterpreterNotFound { tried: Vec<String> },
}

pub type Result<T> = std::result::Result<T, SmokeError>;

impl SmokeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::IoError(e) => {
                format!("Failed to run the Python interpreter: {}", e)
            }
            SmokeError::VersionParseError { output } => {
                format!(
                    "The Python interpreter reported an unrecognized version: {}",
                    output.trim()
                )
            }
            SmokeError::InterpreterNotFound { tried } => {
                format!("No Python interpreter found on this system (tried: {})", tried.join(", "))
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SmokeError::IoError(_) => {
                "Check that the interpreter binary is executable and not corrupted".to_string()
            }
            SmokeError::VersionParseError { .. } => {
                "Run `python3 --version` yourself to see what the interpreter prints".to_string()
            }
            SmokeError::InterpreterNotFound { .. } => {
                "Install Python 3 or make sure it is on your PATH".to_string()
            }
        }
    }
}
