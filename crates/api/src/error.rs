use thiserror::Error;

/// Failure of the remote-call capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("SOAP fault ({code}): {message}")]
    Fault { code: String, message: String },

    #[error("Malformed SOAP envelope: {message}")]
    MalformedEnvelope { message: String },

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

impl TransportError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Create an HTTP status error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a SOAP fault error.
    pub fn fault(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fault {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a malformed envelope error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedEnvelope { message: message.into() }
    }

    /// Create a runtime error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime { message: message.into() }
    }
}
