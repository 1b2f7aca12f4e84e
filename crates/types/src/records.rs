//! Normalized reply records.
//!
//! Each record names the fields the client reads and keeps everything else the
//! supplier sent in `attributes`, untouched.

use std::{error::Error, fmt, str::FromStr};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as returned by the product data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Always a single string; multi-part descriptions are joined by the normalizer.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Inventory of a single part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartInventory {
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A fulfillment origin used for location-dependent pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FobPoint {
    #[serde(default)]
    pub fob_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A priced part of a product configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePart {
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A rejection reported inside a reply body rather than as a transport fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

/// A media content entry tagged with class codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub class_codes: IndexSet<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MediaEntry {
    pub fn has_class_code(&self, code: &str) -> bool {
        self.class_codes.contains(code)
    }
}

/// Pricing mode sent as `configurationType`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationType {
    #[default]
    Decorated,
    Blank,
}

impl ConfigurationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decorated => "Decorated",
            Self::Blank => "Blank",
        }
    }
}

impl fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationType {
    type Err = ParseConfigurationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("decorated") {
            Ok(Self::Decorated)
        } else if s.eq_ignore_ascii_case("blank") {
            Ok(Self::Blank)
        } else {
            Err(ParseConfigurationTypeError)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfigurationTypeError;

impl fmt::Display for ParseConfigurationTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid configuration type; expected 'Decorated' or 'Blank'")
    }
}

impl Error for ParseConfigurationTypeError {}

/// Pricing reply for one configuration type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceConfiguration {
    /// The configuration type of the request that produced this reply.
    pub configuration_type: ConfigurationType,
    pub parts: Vec<PricePart>,
    /// Rejection reported by the service, if any.
    pub error: Option<ServiceMessage>,
}

impl PriceConfiguration {
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().and_then(|message| message.code.as_deref())
    }
}
