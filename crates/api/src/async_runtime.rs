//! Async runtime helpers for the blocking [`RemoteCall`](crate::RemoteCall) surface.

use std::future::Future;
use tokio::{runtime::Handle, task};

use crate::TransportError;

/// Execute an async future from synchronous code.
///
/// Reuses the current multi-threaded Tokio runtime when one is running and
/// otherwise drives the future on a fresh single-threaded runtime.
pub fn block_on_future<F, T>(future: F) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>> + Send + 'static,
    T: Send + 'static,
{
    if let Ok(handle) = Handle::try_current() {
        task::block_in_place(|| handle.block_on(future))
    } else {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| TransportError::runtime(error.to_string()))?
            .block_on(future)
    }
}
