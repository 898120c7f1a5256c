//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (the ESP-IDF logger on the board, which goes to the USB-CDC
//! console rather than the host link UART).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | roof controller polling");
            }
            AppEvent::Command(cmd) => {
                debug!("CMD   | {}", cmd);
            }
            AppEvent::HeartbeatIgnored(ticks) => {
                debug!("CMD   | heartbeat {} ignored, fail-safe latched", ticks);
            }
            AppEvent::StatusChanged { from, to } => {
                info!("ROOF  | {} -> {}", from, to);
            }
            AppEvent::WatchdogTriggered => {
                warn!("WDOG  | heartbeat expired, forcing close");
            }
            AppEvent::WatchdogCleared => {
                info!("WDOG  | fail-safe cleared by host");
            }
            AppEvent::TelemetryDropped => {
                debug!("TELEM | line dropped");
            }
        }
    }
}
