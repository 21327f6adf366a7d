use thiserror::Error;

/// Result type alias using VersionerError
pub type Result<T> = std::result::Result<T, VersionerError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging. Built from [`VersionerError`] at reporting boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    version_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            version_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add version ID context
    pub fn with_version_id(mut self, id: impl Into<String>) -> Self {
        self.version_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(version_id) = &self.version_id {
            write!(f, " (version_id: {})", version_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for versioner operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VersionerError {
    /// Content holds a value that cannot be rendered losslessly
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A version source has no version with this id
    #[error("Version not found: {version_id}")]
    VersionNotFound { version_id: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Reading an input document failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl VersionerError {
    pub(crate) fn serialization(message: impl Into<String>) -> Self {
        VersionerError::Serialization {
            message: message.into(),
        }
    }
}

impl From<VersionerError> for ExError {
    fn from(err: VersionerError) -> Self {
        match err {
            VersionerError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            VersionerError::VersionNotFound { version_id } => ExError::new(ExErrorKind::NotFound)
                .with_version_id(version_id)
                .with_message("Version not found"),
            VersionerError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
            VersionerError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<serde_yaml::Error> for VersionerError {
    fn from(err: serde_yaml::Error) -> Self {
        VersionerError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VersionerError {
    fn from(err: serde_json::Error) -> Self {
        VersionerError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for VersionerError {
    fn from(err: std::io::Error) -> Self {
        VersionerError::Io {
            message: err.to_string(),
        }
    }
}
