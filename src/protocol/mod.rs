//! Host link protocol.
//!
//! ```text
//!   host ──bytes──▶ Transport ──▶ HostCommand::decode ──▶ shared state
//!   host ◀─line──── Transport ◀── StatusFrame::format ◀── shared state
//! ```
//!
//! Inbound traffic is single-byte commands; outbound traffic is one
//! fixed-width ASCII line per tick.

pub mod command;
pub mod telemetry;
pub mod transport;

pub use command::HostCommand;
pub use telemetry::StatusFrame;
pub use transport::Transport;
