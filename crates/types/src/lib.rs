//! Shared type definitions for the PromoStandards client crates.
//!
//! - [`ServiceKind`] and [`ServiceConfig`] describe the four remote services.
//! - [`Operation`] is the static table of remote operations with their
//!   accepted protocol versions.
//! - The record types model normalized replies.

mod operation;
mod records;
mod service;

pub use operation::{Operation, VersionSpec};
pub use records::{
    ConfigurationType, FobPoint, MediaEntry, ParseConfigurationTypeError, PartInventory, PriceConfiguration, PricePart,
    ProductRecord, ServiceMessage,
};
pub use service::{ParseServiceKindError, ServiceConfig, ServiceKind, ToServiceKindInfo};

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered request fields for a single remote call.
///
/// Keys carry their namespace prefix (`shar:productId`); values are written
/// into the request envelope in insertion order.
pub type Message = IndexMap<String, Value>;
