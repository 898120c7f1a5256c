//! Outbound application events.
//!
//! The [`RoofService`](super::service::RoofService) emits these through
//! the [`EventSink`](super::ports::EventSink) port from the polling
//! context.  The tick itself never emits: it runs inside a critical
//! section and must stay short.

use crate::control::RoofStatus;
use crate::protocol::HostCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The polling loop has started.
    Started,

    /// A host command byte was applied.
    Command(HostCommand),

    /// A heartbeat refresh arrived while the fail-safe was latched.
    HeartbeatIgnored(u8),

    /// The reported roof status changed between two telemetry lines.
    StatusChanged { from: RoofStatus, to: RoofStatus },

    /// The heartbeat expired and a forced close began.
    WatchdogTriggered,

    /// The host cleared the fail-safe latch.
    WatchdogCleared,

    /// A telemetry line could not be written and was dropped.
    TelemetryDropped,
}
