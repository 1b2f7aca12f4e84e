use promostandards_types::Operation;
use tracing::debug;

/// Clamp a requested protocol version to one `operation` accepts.
///
/// An exact match is returned unchanged; anything else, including an empty
/// string, yields the operation's default version.
pub fn negotiate(operation: Operation, requested: &str) -> &'static str {
    let versions = operation.versions();
    match versions.accepted.iter().copied().find(|accepted| *accepted == requested) {
        Some(accepted) => accepted,
        None => {
            if !requested.is_empty() {
                debug!(
                    operation = %operation,
                    requested,
                    version = versions.default,
                    "unsupported version requested; using default"
                );
            }
            versions.default
        }
    }
}
