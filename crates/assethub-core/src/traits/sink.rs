//! Event sink trait for the notification side channel.

use async_trait::async_trait;

use crate::events::AssetEvent;
use crate::result::AppResult;

/// Receiver for domain events emitted after successful operations.
///
/// Delivery is best-effort: services log a sink failure and carry on, so an
/// implementation must never be relied on for consistency. The default
/// implementation in `assethub-service` writes events to the tracing log.
#[async_trait]
pub trait EventSink: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a single event.
    async fn publish(&self, event: AssetEvent) -> AppResult<()>;
}
