//! Errors raised while driving the interactive menu

use thiserror::Error;

use crate::application::ApplicationError;

/// Directory failures plus the menu's own terminal I/O.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Reading a menu answer or writing a prompt failed.
    #[error("menu terminal failed: {action}")]
    Terminal {
        action: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn terminal(action: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            action: action.into(),
            source,
        }
    }
}

pub type InfraResult<T> = Result<T, InfraError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn given_failed_prompt_read_when_displaying_then_names_action_and_keeps_cause() {
        let err = InfraError::terminal(
            "read menu input",
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );

        assert_eq!(err.to_string(), "menu terminal failed: read menu input");
        assert_eq!(
            err.source().map(|cause| cause.to_string()),
            Some("stream did not contain valid UTF-8".to_string())
        );
    }
}
