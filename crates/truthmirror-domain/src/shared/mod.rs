use serde::{Deserialize, Serialize};

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1xxx)
    Unauthorized = 1001,
    MissingAccessToken = 1002,

    // Resource Not Found (2xxx)
    NotFound = 2001,

    // Journal & Mood (3xxx)
    EntryRejected = 3001,
    AnalysisUnavailable = 3002,
    RecordingUnavailable = 3003,

    // Data (4xxx)
    SerializationError = 4004,
    MalformedPayload = 4005,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    NetworkError = 5002,
    TimeoutError = 5003,
    ExternalServiceError = 5004,
    ConfigurationError = 5005,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::Unauthorized
            | ErrorCode::MissingAccessToken
            | ErrorCode::NetworkError
            | ErrorCode::TimeoutError
            | ErrorCode::ExternalServiceError
            | ErrorCode::AnalysisUnavailable => ErrorSeverity::Warning,

            ErrorCode::NotFound
            | ErrorCode::EntryRejected
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::MalformedPayload
            | ErrorCode::SerializationError
            | ErrorCode::ConfigurationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,

            ErrorCode::RecordingUnavailable => ErrorSeverity::Warning,
        }
    }

    /// Transient failures; callers keep their last-known state and try again later
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NetworkError
                | ErrorCode::TimeoutError
                | ErrorCode::ExternalServiceError
                | ErrorCode::AnalysisUnavailable
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("Recording unavailable: {0}")]
    RecordingUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::NotFound(_) => ErrorCode::NotFound,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::AnalysisUnavailable(_) => ErrorCode::AnalysisUnavailable,
            DomainError::RecordingUnavailable(_) => ErrorCode::RecordingUnavailable,
            DomainError::Network(_) => ErrorCode::NetworkError,
            DomainError::Timeout(_) => ErrorCode::TimeoutError,
            DomainError::ExternalService(_) => ErrorCode::ExternalServiceError,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Deserialization(_) => ErrorCode::MalformedPayload,
            DomainError::Configuration(_) => ErrorCode::ConfigurationError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Unauthorized(msg)
            | DomainError::NotFound(msg)
            | DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::AnalysisUnavailable(msg)
            | DomainError::RecordingUnavailable(msg)
            | DomainError::Network(msg)
            | DomainError::Timeout(msg)
            | DomainError::ExternalService(msg)
            | DomainError::Serialization(msg)
            | DomainError::Deserialization(msg)
            | DomainError::Configuration(msg)
            | DomainError::Infrastructure(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
