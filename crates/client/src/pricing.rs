use promostandards_types::{ConfigurationType, PriceConfiguration};
use tracing::debug;

use crate::Result;

/// Reply code meaning the requested configuration type is not supported.
pub const CONFIGURATION_NOT_SUPPORTED_CODE: &str = "406";

/// Run a pricing request, degrading `Decorated` to `Blank` at most once.
///
/// `request` is invoked with `configuration_type`. If that was `Decorated` and
/// the reply carries code 406, `request` is invoked exactly once more with
/// `Blank` and its outcome is returned as-is. Every other reply, including a
/// 406 for `Blank`, is returned without retrying. Errors are never retried.
pub fn with_blank_fallback<F>(configuration_type: ConfigurationType, mut request: F) -> Result<PriceConfiguration>
where
    F: FnMut(ConfigurationType) -> Result<PriceConfiguration>,
{
    let reply = request(configuration_type)?;
    if configuration_type == ConfigurationType::Decorated && reply.error_code() == Some(CONFIGURATION_NOT_SUPPORTED_CODE) {
        debug!(
            code = CONFIGURATION_NOT_SUPPORTED_CODE,
            "decorated configuration rejected; retrying as blank"
        );
        return request(ConfigurationType::Blank);
    }
    Ok(reply)
}
