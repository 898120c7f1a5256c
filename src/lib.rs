//! Observatory roof controller firmware library.
//!
//! Exposes the pure-logic modules for integration testing and host-side
//! tooling.  All ESP-IDF-specific code is guarded by the `espidf`
//! feature or `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;
pub mod protocol;
pub mod watchdog;

pub mod adapters;
pub mod drivers;
pub mod sensors;

#[cfg(target_os = "espidf")]
mod esp_link_shims;
