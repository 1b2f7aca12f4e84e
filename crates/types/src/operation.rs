use std::fmt;

use crate::ServiceKind;

/// Protocol versions one remote operation accepts.
///
/// `default` is always a member of `accepted` and is the most recent version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpec {
    pub accepted: &'static [&'static str],
    pub default: &'static str,
}

impl VersionSpec {
    pub fn accepts(&self, version: &str) -> bool {
        self.accepted.contains(&version)
    }
}

const PRODUCT_DATA_VERSIONS: VersionSpec = VersionSpec {
    accepted: &["1.0.0", "2.0.0"],
    default: "2.0.0",
};
const INVENTORY_VERSIONS: VersionSpec = VersionSpec {
    accepted: &["1.2.1", "2.0.0"],
    default: "2.0.0",
};
const MEDIA_VERSIONS: VersionSpec = VersionSpec {
    accepted: &["1.1.0"],
    default: "1.1.0",
};
const PRICING_VERSIONS: VersionSpec = VersionSpec {
    accepted: &["1.0.0"],
    default: "1.0.0",
};

/// Remote operations the client issues.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Operation {
    ProductSellable,
    FilterValues,
    InventoryLevels,
    Product,
    MediaContent,
    FobPoints,
    ConfigurationAndPricing,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::ProductSellable,
        Operation::FilterValues,
        Operation::InventoryLevels,
        Operation::Product,
        Operation::MediaContent,
        Operation::FobPoints,
        Operation::ConfigurationAndPricing,
    ];

    /// Request element name, e.g. `GetProductRequest`.
    pub fn request_name(self) -> &'static str {
        match self {
            Self::ProductSellable => "GetProductSellableRequest",
            Self::FilterValues => "GetFilterValuesRequest",
            Self::InventoryLevels => "GetInventoryLevelsRequest",
            Self::Product => "GetProductRequest",
            Self::MediaContent => "GetMediaContentRequest",
            Self::FobPoints => "GetFobPointsRequest",
            Self::ConfigurationAndPricing => "GetConfigurationAndPricingRequest",
        }
    }

    /// SOAP action identifier.
    pub fn action(self) -> &'static str {
        match self {
            Self::ProductSellable => "getProductSellable",
            Self::FilterValues => "getFilterValues",
            Self::InventoryLevels => "getInventoryLevels",
            Self::Product => "getProduct",
            Self::MediaContent => "getMediaContent",
            Self::FobPoints => "getFobPoints",
            Self::ConfigurationAndPricing => "getConfigurationAndPricing",
        }
    }

    /// Snake-cased key of the response element inside the reply body.
    pub fn response_key(self) -> &'static str {
        match self {
            Self::ProductSellable => "get_product_sellable_response",
            Self::FilterValues => "get_filter_values_response",
            Self::InventoryLevels => "get_inventory_levels_response",
            Self::Product => "get_product_response",
            Self::MediaContent => "get_media_content_response",
            Self::FobPoints => "get_fob_points_response",
            Self::ConfigurationAndPricing => "get_configuration_and_pricing_response",
        }
    }

    pub fn service(self) -> ServiceKind {
        match self {
            Self::ProductSellable | Self::Product => ServiceKind::ProductData,
            Self::FilterValues | Self::InventoryLevels => ServiceKind::Inventory,
            Self::MediaContent => ServiceKind::Media,
            Self::FobPoints | Self::ConfigurationAndPricing => ServiceKind::PricingAndConfiguration,
        }
    }

    pub fn versions(self) -> VersionSpec {
        match self.service() {
            ServiceKind::ProductData => PRODUCT_DATA_VERSIONS,
            ServiceKind::Inventory => INVENTORY_VERSIONS,
            ServiceKind::Media => MEDIA_VERSIONS,
            ServiceKind::PricingAndConfiguration => PRICING_VERSIONS,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.request_name())
    }
}
