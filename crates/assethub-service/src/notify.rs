//! Best-effort event delivery for the notification side channel.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use assethub_core::events::AssetEvent;
use assethub_core::result::AppResult;
use assethub_core::traits::sink::EventSink;

/// Default event sink that writes events to the tracing log.
#[derive(Debug, Clone, Default)]
pub struct LogEventSink;

#[async_trait]
impl EventSink for LogEventSink {
    async fn publish(&self, event: AssetEvent) -> AppResult<()> {
        info!(event = ?event, "Asset event");
        Ok(())
    }
}

/// Deliver an event without letting a sink failure reach the caller.
///
/// Notifications are secondary to the operation that produced them; a
/// failure here is logged and otherwise ignored.
pub(crate) async fn emit(sink: &Arc<dyn EventSink>, event: AssetEvent) {
    if let Err(err) = sink.publish(event).await {
        warn!(error = %err, "Event sink delivery failed");
    }
}
