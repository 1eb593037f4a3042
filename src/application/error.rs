use thiserror::Error;

use crate::{domain::error::DomainError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn infra_errors_stay_transparent() {
        let err = AppError::from(InfraError::io(
            "/tmp/en/about/about.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(
            err.to_string(),
            "io error at `/tmp/en/about/about.json`: denied"
        );
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = AppError::validation("2 layout issues");
        assert_eq!(err.to_string(), "validation failed: 2 layout issues");
    }
}
