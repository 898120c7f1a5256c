//! GPIO / peripheral pin assignments for the roof controller board
//! (ESP32-S3).
//!
//! Single source of truth: `main` builds every driver from these numbers
//! rather than hard-coding pins.

// ---------------------------------------------------------------------------
// Motor relays (active LOW, external pull-ups hold them off at reset)
// ---------------------------------------------------------------------------

/// Digital output: LOW runs the roof towards open.
pub const OPEN_ENABLE_GPIO: i32 = 4;
/// Digital output: LOW runs the roof towards closed.
pub const CLOSE_ENABLE_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// End-stop switches (active LOW, internal pull-ups)
// ---------------------------------------------------------------------------

pub const OPEN_LIMIT_GPIO: i32 = 6;
pub const CLOSED_LIMIT_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Activity LED
// ---------------------------------------------------------------------------

pub const ACTIVITY_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// MCP3201 voltage ADC (SPI2)
// ---------------------------------------------------------------------------

pub const ADC_SCLK_GPIO: i32 = 12;
pub const ADC_MISO_GPIO: i32 = 13;
/// Unused by the MCP3201 but required by the SPI driver.
pub const ADC_MOSI_GPIO: i32 = 11;
pub const ADC_CS_GPIO: i32 = 10;
/// The MCP3201 tops out at 800 kHz at 2.7 V; stay well under it.
pub const ADC_SPI_FREQ_HZ: u32 = 250_000;

// ---------------------------------------------------------------------------
// Host link (UART1)
// ---------------------------------------------------------------------------

pub const HOST_TX_GPIO: i32 = 17;
pub const HOST_RX_GPIO: i32 = 18;
