//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                 | Connects to            |
//! |-------------|----------------------------|------------------------|
//! | `hardware`  | LimitSwitchPort, MotorPort | relay and switch GPIOs |
//! | `log_sink`  | EventSink                  | serial log output      |
//! | `uart_link` | Transport                  | host PC over UART      |

pub mod hardware;
pub mod log_sink;
#[cfg(feature = "espidf")]
pub mod uart_link;

pub use hardware::HardwareAdapter;
pub use log_sink::LogEventSink;
