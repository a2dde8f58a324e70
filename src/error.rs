use thiserror::Error;

/// reelscript's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// reelscript's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// The post record is missing fields every script needs.
    #[error("invalid post data: {0}")]
    InvalidPostData(String),

    /// An unknown output length class was requested.
    #[error("invalid format: {0} (expected one of: short, medium, long, story, compilation)")]
    InvalidFormat(String),

    /// An unknown narration style was requested.
    #[error("invalid narration style: {0} (expected one of: casual, formal, dramatic, comedic)")]
    InvalidStyle(String),

    /// The template catalog has no template with this name.
    #[error("template not found: {name} (available templates: {available})")]
    TemplateNotFound { name: String, available: String },

    #[error("unsupported export format: {0} (expected one of: json, txt, srt, vtt)")]
    UnsupportedExportFormat(String),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_lists_available_names() {
        let err = Error::TemplateNotFound {
            name: "epic".to_owned(),
            available: "short, medium".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("epic"));
        assert!(msg.contains("short, medium"));
    }

    #[test]
    fn io_errors_pass_through_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "read-only");
    }
}
