/// Error type for prompt operations.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User cancelled the prompt (Ctrl+C, Escape, closed input).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal not available, exhausted script, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl PromptError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_message() {
        let err = PromptError::Cancelled;
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "Prompt cancelled by user");
    }

    #[test]
    fn backend_wraps_any_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err = PromptError::backend(io);
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "Backend error: no tty");
    }
}
