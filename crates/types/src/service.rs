use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

/// The four PromoStandards services a supplier may expose.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ServiceKind {
    ProductData,
    Inventory,
    Media,
    PricingAndConfiguration,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::ProductData,
        ServiceKind::Inventory,
        ServiceKind::Media,
        ServiceKind::PricingAndConfiguration,
    ];
}

pub trait ToServiceKindInfo {
    /// Environment variable holding the endpoint URL.
    fn env_var(&self) -> &'static str;
    /// Target namespace of the service WSDL.
    fn namespace(&self) -> &'static str;
    /// Namespace of the service's shared objects schema.
    fn shared_namespace(&self) -> &'static str;
    /// Human readable name used in error messages.
    fn display_name(&self) -> &'static str;
}

impl ToServiceKindInfo for ServiceKind {
    fn env_var(&self) -> &'static str {
        match self {
            Self::ProductData => "PROMOSTANDARDS_PRODUCT_DATA_URL",
            Self::Inventory => "PROMOSTANDARDS_INVENTORY_URL",
            Self::Media => "PROMOSTANDARDS_MEDIA_CONTENT_URL",
            Self::PricingAndConfiguration => "PROMOSTANDARDS_PRICING_URL",
        }
    }

    fn namespace(&self) -> &'static str {
        match self {
            Self::ProductData => "http://www.promostandards.org/WSDL/ProductDataService/1.0.0/",
            Self::Inventory => "http://www.promostandards.org/WSDL/Inventory/2.0.0/",
            Self::Media => "http://www.promostandards.org/WSDL/MediaService/1.0.0/",
            Self::PricingAndConfiguration => "http://www.promostandards.org/WSDL/PricingAndConfiguration/1.0.0/",
        }
    }

    fn shared_namespace(&self) -> &'static str {
        match self {
            Self::ProductData => "http://www.promostandards.org/WSDL/ProductDataService/1.0.0/SharedObjects/",
            Self::Inventory => "http://www.promostandards.org/WSDL/Inventory/2.0.0/SharedObjects/",
            Self::Media => "http://www.promostandards.org/WSDL/MediaService/1.0.0/SharedObjects/",
            Self::PricingAndConfiguration => "http://www.promostandards.org/WSDL/PricingAndConfiguration/1.0.0/SharedObjects/",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::ProductData => "Product data",
            Self::Inventory => "Inventory",
            Self::Media => "Media content",
            Self::PricingAndConfiguration => "Product pricing and configuration",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Self::ProductData => "product-data",
            Self::Inventory => "inventory",
            Self::Media => "media-content",
            Self::PricingAndConfiguration => "pricing-and-configuration",
        };
        f.write_str(slug)
    }
}

impl FromStr for ServiceKind {
    type Err = ParseServiceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product-data" => Ok(Self::ProductData),
            "inventory" => Ok(Self::Inventory),
            "media-content" => Ok(Self::Media),
            "pricing-and-configuration" => Ok(Self::PricingAndConfiguration),
            _ => Err(ParseServiceKindError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseServiceKindError;

impl fmt::Display for ParseServiceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid service kind; expected 'product-data', 'inventory', 'media-content' or 'pricing-and-configuration'")
    }
}

impl Error for ParseServiceKindError {}

/// Endpoint and namespace metadata for one service.
///
/// Built from a [`ServiceKind`] and the endpoint configured for it; the
/// namespaces are fixed per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub kind: ServiceKind,
    pub endpoint: Url,
    pub namespace: &'static str,
    pub shared_namespace: &'static str,
}

impl ServiceConfig {
    pub fn new(kind: ServiceKind, endpoint: Url) -> Self {
        Self {
            kind,
            endpoint,
            namespace: kind.namespace(),
            shared_namespace: kind.shared_namespace(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_kind_round_trips_through_display() {
        for kind in ServiceKind::ALL {
            let parsed: ServiceKind = kind.to_string().parse().expect("parse kind");
            assert_eq!(parsed, kind);
        }
        assert!("catalog".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn shared_namespace_extends_service_namespace() {
        for kind in ServiceKind::ALL {
            assert!(kind.shared_namespace().starts_with(kind.namespace()));
            assert!(kind.shared_namespace().ends_with("SharedObjects/"));
        }
    }

    #[test]
    fn service_config_takes_namespaces_from_kind() {
        let endpoint = Url::parse("https://supplier.example.com/inventory").expect("url");
        let config = ServiceConfig::new(ServiceKind::Inventory, endpoint.clone());
        assert_eq!(config.endpoint, endpoint);
        assert_eq!(config.namespace, "http://www.promostandards.org/WSDL/Inventory/2.0.0/");
    }
}
