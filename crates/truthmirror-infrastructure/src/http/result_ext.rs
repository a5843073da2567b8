use truthmirror_domain::shared::DomainError;

/// Extension trait mapping transport errors onto DomainError
pub trait ResultExt<T> {
    /// Classify a reqwest failure: timeouts, connection problems, bad status, bad body.
    /// Usage: `request.send().await.to_transport_err("Fetch streak")?`
    fn to_transport_err(self, operation: &str) -> Result<T, DomainError>;

    /// Convert error to DomainError::Deserialization
    fn to_decode_err(self, operation: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, reqwest::Error> {
    fn to_transport_err(self, operation: &str) -> Result<T, DomainError> {
        self.map_err(|e| classify_reqwest_error(operation, &e))
    }

    fn to_decode_err(self, operation: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Deserialization(format!("{}: {}", operation, e)))
    }
}

impl<T> ResultExt<T> for Result<T, serde_json::Error> {
    fn to_transport_err(self, operation: &str) -> Result<T, DomainError> {
        self.to_decode_err(operation)
    }

    fn to_decode_err(self, operation: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Deserialization(format!("{}: {}", operation, e)))
    }
}

fn classify_reqwest_error(operation: &str, error: &reqwest::Error) -> DomainError {
    let message = format!("{}: {}", operation, error);

    if error.is_timeout() {
        DomainError::Timeout(message)
    } else if error.is_connect() || error.is_request() {
        DomainError::Network(message)
    } else if error.is_decode() {
        DomainError::Deserialization(message)
    } else if error.is_status() {
        DomainError::ExternalService(message)
    } else if error.is_builder() {
        DomainError::InvalidInput(message)
    } else {
        DomainError::Network(message)
    }
}
