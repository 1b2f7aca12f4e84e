//! Remote-call capability for PromoStandards services.
//!
//! This crate provides the transport the client core depends on:
//!
//! - [`RemoteCall`]: the synchronous capability of sending one request to a
//!   service and returning its structured reply
//! - [`SoapTransport`]: the default implementation, posting a SOAP 1.1
//!   envelope with `reqwest` and reading the reply with `quick-xml`
//! - [`TransportError`]: network failures, HTTP errors, SOAP faults and
//!   unreadable envelopes
//!
//! Replies are returned as a [`serde_json::Value`] tree whose keys are the
//! snake-cased local names of the reply elements, rooted at the SOAP body.
//!
//! # Example
//!
//! ```ignore
//! use promostandards_api::{RemoteCall, SoapRequest, SoapTransport};
//! use promostandards_types::{Message, ServiceConfig, ServiceKind};
//!
//! let transport = SoapTransport::new()?;
//! let service = ServiceConfig::new(ServiceKind::ProductData, "https://supplier.example.com/pds".parse()?);
//! let message = Message::new();
//! let body = transport.call(&SoapRequest {
//!     service: &service,
//!     operation: "GetProductSellableRequest",
//!     action: "getProductSellable",
//!     message: &message,
//! })?;
//! ```

mod async_runtime;
mod envelope;
mod error;
mod reply;
mod transport;

pub use async_runtime::block_on_future;
pub use envelope::{ENVELOPE_PREFIX, NAMESPACE_PREFIX, SHARED_PREFIX, build_envelope};
pub use error::TransportError;
pub use reply::parse_reply;
pub use transport::{DEFAULT_TIMEOUT, SoapTransport};

use promostandards_types::{Message, ServiceConfig};
use serde_json::Value;

/// A single call against a remote service operation.
#[derive(Debug, Clone, Copy)]
pub struct SoapRequest<'a> {
    pub service: &'a ServiceConfig,
    /// Request element name, e.g. `GetProductRequest`.
    pub operation: &'a str,
    /// SOAP action identifier, e.g. `getProduct`.
    pub action: &'a str,
    pub message: &'a Message,
}

/// Send one request and return the reply body.
///
/// Implementations perform exactly one exchange per call and never retry.
pub trait RemoteCall {
    fn call(&self, request: &SoapRequest<'_>) -> Result<Value, TransportError>;
}

impl<T: RemoteCall + ?Sized> RemoteCall for &T {
    fn call(&self, request: &SoapRequest<'_>) -> Result<Value, TransportError> {
        (**self).call(request)
    }
}

impl<T: RemoteCall + ?Sized> RemoteCall for Box<T> {
    fn call(&self, request: &SoapRequest<'_>) -> Result<Value, TransportError> {
        (**self).call(request)
    }
}
