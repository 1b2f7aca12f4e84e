//! Client configuration: credentials and per-service endpoints.

use std::{env, fmt};

use promostandards_types::{ServiceKind, ToServiceKindInfo};
use url::Url;

use crate::{ClientError, Result};

/// Environment variable holding the access identifier.
pub const ACCESS_ID_ENV: &str = "PROMOSTANDARDS_ACCESS_ID";
/// Environment variable holding the shared secret.
pub const PASSWORD_ENV: &str = "PROMOSTANDARDS_PASSWORD";

/// Credentials and endpoints for one supplier.
///
/// The product data endpoint is required; each optional endpoint enables the
/// operations of one service.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    access_id: String,
    password: Option<String>,
    product_data_url: Url,
    media_content_url: Option<Url>,
    pricing_url: Option<Url>,
    inventory_url: Option<Url>,
}

impl ClientConfig {
    pub fn new(access_id: impl Into<String>, product_data_url: Url) -> Self {
        Self {
            access_id: access_id.into(),
            password: None,
            product_data_url,
            media_content_url: None,
            pricing_url: None,
            inventory_url: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the endpoint of `service`, replacing any previous one.
    pub fn with_endpoint(mut self, service: ServiceKind, url: Url) -> Self {
        match service {
            ServiceKind::ProductData => self.product_data_url = url,
            ServiceKind::Media => self.media_content_url = Some(url),
            ServiceKind::PricingAndConfiguration => self.pricing_url = Some(url),
            ServiceKind::Inventory => self.inventory_url = Some(url),
        }
        self
    }

    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn endpoint(&self, service: ServiceKind) -> Option<&Url> {
        match service {
            ServiceKind::ProductData => Some(&self.product_data_url),
            ServiceKind::Media => self.media_content_url.as_ref(),
            ServiceKind::PricingAndConfiguration => self.pricing_url.as_ref(),
            ServiceKind::Inventory => self.inventory_url.as_ref(),
        }
    }

    /// Build a configuration from `PROMOSTANDARDS_*` environment variables.
    ///
    /// See [`ClientConfig::from_lookup`] for the variables read.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from a variable lookup.
    ///
    /// Reads [`ACCESS_ID_ENV`], [`PASSWORD_ENV`] and one URL variable per
    /// service ([`ToServiceKindInfo::env_var`]). Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let access_id = read(ACCESS_ID_ENV).ok_or_else(|| ClientError::configuration(format!("{ACCESS_ID_ENV} is not set")))?;
        let product_data_env = ServiceKind::ProductData.env_var();
        let product_data_url = read(product_data_env)
            .ok_or_else(|| ClientError::configuration(format!("{product_data_env} is not set")))
            .and_then(|raw| parse_endpoint(ServiceKind::ProductData, &raw))?;

        let mut config = Self::new(access_id, product_data_url);
        if let Some(password) = read(PASSWORD_ENV) {
            config = config.with_password(password);
        }
        for service in [ServiceKind::Media, ServiceKind::PricingAndConfiguration, ServiceKind::Inventory] {
            if let Some(raw) = read(service.env_var()) {
                config = config.with_endpoint(service, parse_endpoint(service, &raw)?);
            }
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_id", &self.access_id)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("product_data_url", &self.product_data_url.as_str())
            .field("media_content_url", &self.media_content_url.as_ref().map(Url::as_str))
            .field("pricing_url", &self.pricing_url.as_ref().map(Url::as_str))
            .field("inventory_url", &self.inventory_url.as_ref().map(Url::as_str))
            .finish()
    }
}

/// Parse and check a service endpoint URL.
///
/// Rules: the URL must parse, use `http` or `https`, and include a host.
pub fn parse_endpoint(service: ServiceKind, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|error| ClientError::configuration(format!("invalid {} URL '{}': {}", service.env_var(), raw, error)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::configuration(format!(
            "{} must use http or https; got '{}://'",
            service.env_var(),
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(ClientError::configuration(format!("{} must include a host", service.env_var())));
    }
    Ok(url)
}
