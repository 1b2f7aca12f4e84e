use promostandards_api::{RemoteCall, SoapRequest};
use promostandards_types::{Message, Operation, ServiceConfig, ServiceKind};
use serde_json::Value;
use tracing::debug;

use crate::{ClientConfig, ClientError, Result};

/// Issues single calls against the configured services.
///
/// Service configurations are built per call from the client configuration.
/// Transport failures are returned as-is; the dispatcher never retries.
pub struct RequestDispatcher<'a, T> {
    config: &'a ClientConfig,
    transport: &'a T,
}

impl<'a, T: RemoteCall> RequestDispatcher<'a, T> {
    pub fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self { config, transport }
    }

    /// Resolve the endpoint and namespaces of `service`.
    pub fn service_config(&self, service: ServiceKind) -> Result<ServiceConfig> {
        let endpoint = self
            .config
            .endpoint(service)
            .ok_or_else(|| ClientError::missing_endpoint(service))?;
        Ok(ServiceConfig::new(service, endpoint.clone()))
    }

    /// Invoke `operation_name` on `service` once and return the reply body.
    pub fn call(&self, service: ServiceKind, operation_name: &str, message: &Message, action: &str) -> Result<Value> {
        let service_config = self.service_config(service)?;
        debug!(
            service = %service,
            operation = operation_name,
            action,
            field_count = message.len(),
            "dispatching remote call"
        );
        let reply = self.transport.call(&SoapRequest {
            service: &service_config,
            operation: operation_name,
            action,
            message,
        })?;
        Ok(reply)
    }

    /// [`RequestDispatcher::call`] using the names registered for `operation`.
    pub fn call_operation(&self, operation: Operation, message: &Message) -> Result<Value> {
        self.call(operation.service(), operation.request_name(), message, operation.action())
    }
}
