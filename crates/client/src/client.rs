//! The public client facade.

use promostandards_api::{RemoteCall, SHARED_PREFIX, SoapTransport};
use promostandards_types::{
    ConfigurationType, FobPoint, MediaEntry, Message, Operation, PartInventory, PriceConfiguration, ProductRecord, ServiceKind,
};
use serde_json::{Value, json};
use tracing::debug;

use crate::normalizer::{self, dig, records, require};
use crate::primary_image::{PrecedenceTier, PrimaryImageSelector};
use crate::{ClientConfig, ClientError, RequestDispatcher, Result, negotiate, pricing};

const LOCALIZATION_COUNTRY: &str = "US";
const LOCALIZATION_LANGUAGE: &str = "en";
const CURRENCY: &str = "USD";
const PRICE_TYPE: &str = "List";
const MEDIA_TYPE: &str = "Image";

fn shared(field: &str) -> String {
    format!("{SHARED_PREFIX}:{field}")
}

/// Client for one supplier's PromoStandards services.
///
/// Every operation checks that its service endpoint is configured before any
/// remote call, negotiates the protocol version, dispatches, and normalizes
/// the reply. Failures after the endpoint check are returned with the
/// operation name attached as context.
pub struct PromoStandardsClient<T = SoapTransport> {
    config: ClientConfig,
    transport: T,
    image_selector: PrimaryImageSelector<'static>,
}

impl PromoStandardsClient<SoapTransport> {
    /// Build a client using the default SOAP transport.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(config, SoapTransport::new()?))
    }
}

impl<T: RemoteCall> PromoStandardsClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            image_selector: PrimaryImageSelector::default(),
        }
    }

    /// Replace the precedence table used by [`PromoStandardsClient::get_primary_image`].
    pub fn with_image_precedence(mut self, tiers: &'static [PrecedenceTier<'static>]) -> Self {
        self.image_selector = PrimaryImageSelector::new(tiers);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Identifiers of all sellable products, without duplicates, in reply order.
    pub fn get_sellable_product_ids(&self, version: Option<&str>) -> Result<Vec<String>> {
        self.require_endpoint(ServiceKind::ProductData)?;
        self.fetch_sellable_product_ids(version.unwrap_or_default())
            .map_err(|error| error.with_context("get_sellable_product_ids"))
    }

    /// Inventory per part, via the filter values then inventory levels calls.
    pub fn get_inventory_levels(&self, product_id: &str, version: Option<&str>) -> Result<Vec<PartInventory>> {
        self.require_endpoint(ServiceKind::Inventory)?;
        self.fetch_inventory_levels(product_id, version.unwrap_or_default())
            .map_err(|error| error.with_context("get_inventory_levels"))
    }

    /// Product data with a single-string description.
    pub fn get_product_data(&self, product_id: &str, version: Option<&str>) -> Result<ProductRecord> {
        self.require_endpoint(ServiceKind::ProductData)?;
        self.fetch_product_data(product_id, version.unwrap_or_default())
            .map_err(|error| error.with_context("get_product_data"))
    }

    /// All image entries of a product.
    pub fn get_media_content(&self, product_id: &str, version: Option<&str>) -> Result<Vec<MediaEntry>> {
        self.require_endpoint(ServiceKind::Media)?;
        self.fetch_media_content(product_id, version.unwrap_or_default())
            .map_err(|error| error.with_context("get_media_content"))
    }

    /// The single primary image of a product, if any entry qualifies.
    pub fn get_primary_image(&self, product_id: &str, version: Option<&str>) -> Result<Option<MediaEntry>> {
        self.require_endpoint(ServiceKind::Media)?;
        let entries = self
            .fetch_media_content(product_id, version.unwrap_or_default())
            .map_err(|error| error.with_context("get_primary_image"))?;
        let primary = self.image_selector.select(&entries).cloned();
        debug!(
            product_id,
            candidates = entries.len(),
            found = primary.is_some(),
            "primary image selected"
        );
        Ok(primary)
    }

    pub fn get_fob_points(&self, product_id: &str, version: Option<&str>) -> Result<Vec<FobPoint>> {
        self.require_endpoint(ServiceKind::PricingAndConfiguration)?;
        self.fetch_fob_points(product_id, version.unwrap_or_default())
            .map_err(|error| error.with_context("get_fob_points"))
    }

    /// Price parts for a product shipped from `fob_id`.
    ///
    /// A `Decorated` request rejected with code 406 is retried once as `Blank`.
    pub fn get_prices(
        &self,
        product_id: &str,
        fob_id: &str,
        configuration_type: ConfigurationType,
        version: Option<&str>,
    ) -> Result<PriceConfiguration> {
        self.require_endpoint(ServiceKind::PricingAndConfiguration)?;
        let version = version.unwrap_or_default();
        pricing::with_blank_fallback(configuration_type, |attempt| {
            self.fetch_price_configuration(product_id, fob_id, attempt, version)
        })
        .map_err(|error| error.with_context("get_prices"))
    }

    fn require_endpoint(&self, service: ServiceKind) -> Result<()> {
        match self.config.endpoint(service) {
            Some(_) => Ok(()),
            None => Err(ClientError::missing_endpoint(service)),
        }
    }

    fn dispatcher(&self) -> RequestDispatcher<'_, T> {
        RequestDispatcher::new(&self.config, &self.transport)
    }

    fn identity(&self, operation: Operation, version: &str) -> Message {
        let mut message = Message::new();
        message.insert(shared("wsVersion"), json!(negotiate(operation, version)));
        message.insert(shared("id"), json!(self.config.access_id()));
        message.insert(shared("password"), self.config.password().map_or(Value::Null, |password| json!(password)));
        message
    }

    fn fetch_sellable_product_ids(&self, version: &str) -> Result<Vec<String>> {
        let operation = Operation::ProductSellable;
        let mut message = self.identity(operation, version);
        message.insert(shared("isSellable"), json!(true));

        let reply = self.dispatcher().call_operation(operation, &message)?;
        let root = require(&reply, &[operation.response_key()])?;
        let sellable = records(dig(root, &["product_sellable_array", "product_sellable"]));
        Ok(normalizer::unique_texts(&sellable, "product_id"))
    }

    fn fetch_inventory_levels(&self, product_id: &str, version: &str) -> Result<Vec<PartInventory>> {
        let dispatcher = self.dispatcher();

        let mut message = self.identity(Operation::FilterValues, version);
        message.insert(shared("productId"), json!(product_id));
        let filter_reply = dispatcher.call_operation(Operation::FilterValues, &message)?;
        if let Some(filter) = dig(
            &filter_reply,
            &[Operation::FilterValues.response_key(), "filter_values", "filter"],
        ) {
            message.insert(shared("filter"), filter.clone());
        }

        let reply = dispatcher.call_operation(Operation::InventoryLevels, &message)?;
        let root = require(&reply, &[Operation::InventoryLevels.response_key()])?;
        normalizer::decode_records(
            dig(root, &["inventory", "part_inventory_array", "part_inventory"]),
            "part inventory",
        )
    }

    fn fetch_product_data(&self, product_id: &str, version: &str) -> Result<ProductRecord> {
        let operation = Operation::Product;
        let mut message = self.identity(operation, version);
        message.insert(shared("localizationCountry"), json!(LOCALIZATION_COUNTRY));
        message.insert(shared("localizationLanguage"), json!(LOCALIZATION_LANGUAGE));
        message.insert(shared("productId"), json!(product_id));

        let reply = self.dispatcher().call_operation(operation, &message)?;
        let mut product = require(&reply, &[operation.response_key(), "product"])?.clone();
        normalizer::join_text_list(&mut product, "description");
        normalizer::decode(product, "product")
    }

    fn fetch_media_content(&self, product_id: &str, version: &str) -> Result<Vec<MediaEntry>> {
        let operation = Operation::MediaContent;
        let mut message = self.identity(operation, version);
        message.insert(shared("mediaType"), json!(MEDIA_TYPE));
        message.insert(shared("productId"), json!(product_id));

        let reply = self.dispatcher().call_operation(operation, &message)?;
        let root = require(&reply, &[operation.response_key()])?;
        records(dig(root, &["media_content_array", "media_content"]))
            .into_iter()
            .map(normalizer::media_entry)
            .collect()
    }

    fn fetch_fob_points(&self, product_id: &str, version: &str) -> Result<Vec<FobPoint>> {
        let operation = Operation::FobPoints;
        let mut message = self.identity(operation, version);
        message.insert(shared("productId"), json!(product_id));
        message.insert(shared("localizationCountry"), json!(LOCALIZATION_COUNTRY));
        message.insert(shared("localizationLanguage"), json!(LOCALIZATION_LANGUAGE));

        let reply = self.dispatcher().call_operation(operation, &message)?;
        let root = require(&reply, &[operation.response_key()])?;
        normalizer::decode_records(dig(root, &["fob_point_array", "fob_point"]), "FOB point")
    }

    fn fetch_price_configuration(
        &self,
        product_id: &str,
        fob_id: &str,
        configuration_type: ConfigurationType,
        version: &str,
    ) -> Result<PriceConfiguration> {
        let operation = Operation::ConfigurationAndPricing;
        let mut message = self.identity(operation, version);
        message.insert(shared("productId"), json!(product_id));
        message.insert(shared("currency"), json!(CURRENCY));
        message.insert(shared("fobId"), json!(fob_id));
        message.insert(shared("priceType"), json!(PRICE_TYPE));
        message.insert(shared("localizationCountry"), json!(LOCALIZATION_COUNTRY));
        message.insert(shared("localizationLanguage"), json!(LOCALIZATION_LANGUAGE));
        message.insert(shared("configurationType"), json!(configuration_type.as_str()));

        let reply = self.dispatcher().call_operation(operation, &message)?;
        let root = require(&reply, &[operation.response_key()])?;
        Ok(PriceConfiguration {
            configuration_type,
            parts: normalizer::decode_records(dig(root, &["configuration", "part_array", "part"]), "price part")?,
            error: normalizer::service_message(dig(root, &["error_message"]))?,
        })
    }
}
