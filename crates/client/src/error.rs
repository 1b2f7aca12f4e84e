//! Error type for client operations.

use promostandards_api::TransportError;
use promostandards_types::{ServiceKind, ToServiceKindInfo};
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Classification of a [`ClientError`], stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingEndpoint,
    Transport,
    MalformedReply,
    Configuration,
}

/// Errors raised by the client.
///
/// Failures inside a public operation carry the operation name as `context`;
/// attaching it never changes the variant.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{} service URL not set!{}", .service.display_name(), context_suffix(.context))]
    MissingEndpoint {
        service: ServiceKind,
        context: Option<String>,
    },

    #[error("{source}{}", context_suffix(.context))]
    Transport {
        source: TransportError,
        context: Option<String>,
    },

    #[error("Malformed reply: {message}{}", context_suffix(.context))]
    MalformedReply { message: String, context: Option<String> },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn context_suffix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|operation| format!(" - {operation} failed!"))
        .unwrap_or_default()
}

impl From<TransportError> for ClientError {
    fn from(source: TransportError) -> Self {
        Self::Transport { source, context: None }
    }
}

impl ClientError {
    /// Create a missing endpoint error.
    pub fn missing_endpoint(service: ServiceKind) -> Self {
        Self::MissingEndpoint { service, context: None }
    }

    /// Create a malformed reply error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedReply {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingEndpoint { .. } => ErrorKind::MissingEndpoint,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::MalformedReply { .. } => ErrorKind::MalformedReply,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// Name of the operation the failure occurred in, when attached.
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::MissingEndpoint { context, .. } | Self::Transport { context, .. } | Self::MalformedReply { context, .. } => {
                context.as_deref()
            }
            Self::Configuration { .. } => None,
        }
    }

    /// Underlying transport failure, if this is a transport error.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Transport { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Attach the failing operation's name, keeping the variant.
    pub fn with_context(self, operation: impl Into<String>) -> Self {
        let operation = Some(operation.into());
        match self {
            Self::MissingEndpoint { service, .. } => Self::MissingEndpoint {
                service,
                context: operation,
            },
            Self::Transport { source, .. } => Self::Transport {
                source,
                context: operation,
            },
            Self::MalformedReply { message, .. } => Self::MalformedReply {
                message,
                context: operation,
            },
            configuration @ Self::Configuration { .. } => configuration,
        }
    }
}
