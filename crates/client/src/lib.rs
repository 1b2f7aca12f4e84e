//! PromoStandards catalog client.
//!
//! Retrieves sellable product ids, product data, inventory, media and pricing
//! from a supplier's PromoStandards services and normalizes the replies.
//!
//! Modules:
//! - `version`: clamps requested protocol versions to supported ones
//! - `dispatcher`: single calls against a configured service
//! - `normalizer`: reshapes reply multiplicity into flat records
//! - `primary_image`: tiered primary image selection
//! - `pricing`: one-step Decorated to Blank pricing fallback
//! - `client`: the [`PromoStandardsClient`] facade
//!
//! # Example
//!
//! ```ignore
//! use promostandards_client::{ClientConfig, PromoStandardsClient};
//!
//! let client = PromoStandardsClient::from_config(ClientConfig::from_env()?)?;
//! for product_id in client.get_sellable_product_ids(None)? {
//!     println!("{product_id}");
//! }
//! ```

mod client;
mod config;
mod dispatcher;
mod error;
pub mod normalizer;
mod pricing;
mod primary_image;
mod version;

pub use client::PromoStandardsClient;
pub use config::{ACCESS_ID_ENV, ClientConfig, PASSWORD_ENV, parse_endpoint};
pub use dispatcher::RequestDispatcher;
pub use error::{ClientError, ErrorKind, Result};
pub use pricing::{CONFIGURATION_NOT_SUPPORTED_CODE, with_blank_fallback};
pub use primary_image::{PRIMARY_IMAGE_PRECEDENCE, PrecedenceTier, PrimaryImageSelector};
pub use version::negotiate;

pub use promostandards_api::{RemoteCall, SoapRequest, SoapTransport, TransportError};
pub use promostandards_types::*;
