//! Error types for repository operations.
//!
//! Every failure carries an [`ErrorContext`] naming the operation and, where
//! relevant, the dataset involved.

use std::fmt;

use crate::parsing::SchemaError;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load_datasets", "fetch_filtered")
    pub operation: Option<String>,
    /// The dataset involved (e.g., "daily_hours")
    pub dataset: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the dataset name.
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref dataset) = self.dataset {
            parts.push(format!("dataset={}", dataset));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested data was not found (e.g. an extract file is missing).
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// An extract broke its column contract at load time.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// Internal/unexpected errors.
    #[error("Internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Classify a failure raised while loading the extracts.
    ///
    /// Schema violations become [`RepositoryError::ValidationError`] tagged
    /// with the dataset; unreadable files become
    /// [`RepositoryError::NotFound`]; anything else is internal.
    pub fn from_load_error(err: anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        let context = ErrorContext::new("load_datasets");

        if let Some(schema_err) = err.downcast_ref::<SchemaError>() {
            return Self::ValidationError {
                message,
                context: context
                    .with_dataset(schema_err.dataset())
                    .with_details(format!("column={}", schema_err.column())),
            };
        }

        let io_not_found = err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        });
        if io_not_found {
            return Self::NotFound { message, context };
        }

        Self::InternalError { message, context }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::NotFound { context, .. } => context,
            Self::ValidationError { context, .. } => context,
            Self::ConfigurationError { context, .. } => context,
            Self::InternalError { context, .. } => context,
        }
    }
}
