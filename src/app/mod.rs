//! Application core: roof logic with no direct I/O.
//!
//! [`state`] holds the pure state machine, [`shared`] puts it behind a
//! critical section for the two execution contexts, and [`service`] is
//! the polling loop.  All interaction with hardware happens through the
//! **port traits** in [`ports`], so the whole layer runs on the host
//! against mocks.

pub mod events;
pub mod ports;
pub mod service;
pub mod shared;
pub mod state;

pub use service::{PollReport, RoofService};
pub use shared::SharedRoof;
pub use state::RoofState;
