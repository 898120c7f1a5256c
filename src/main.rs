//! Roof controller firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter        Mcp3201      UartLink   LogEventSink │
//! │  (limits + motor + LED) (AdcPort)    (Transport) (EventSink) │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │   esp_timer 0.5 s ──▶ SharedRoof::tick                       │
//! │   main task loop  ──▶ RoofService::poll                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use core::cell::RefCell;

use anyhow::Result;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::spi::{self, SpiDeviceDriver, SpiDriver, SpiDriverConfig};
use esp_idf_hal::units::Hertz;
use log::info;

use roofcontrol::adapters::uart_link::UartLink;
use roofcontrol::adapters::{HardwareAdapter, LogEventSink};
use roofcontrol::app::{RoofService, SharedRoof};
use roofcontrol::config::RoofConfig;
use roofcontrol::drivers::hw_timer;
use roofcontrol::drivers::motor::RoofMotor;
use roofcontrol::drivers::status_led::ActivityLed;
use roofcontrol::error::Error;
use roofcontrol::pins;
use roofcontrol::sensors::{LimitSwitches, Mcp3201};

type OutPin = PinDriver<'static, AnyOutputPin, Output>;
type InPin = PinDriver<'static, AnyIOPin, Input>;
type TickHardware = HardwareAdapter<OutPin, InPin>;

const CONFIG: RoofConfig = RoofConfig::standard();

/// State shared by the tick and the polling loop.
static ROOF: SharedRoof = SharedRoof::new(CONFIG);

/// Peripherals owned by the tick, installed once before the timer starts.
static TICK_HW: Mutex<CriticalSectionRawMutex, RefCell<Option<TickHardware>>> =
    Mutex::new(RefCell::new(None));

/// Timer-task callback: one step of the roof state machine.
fn on_tick() {
    TICK_HW.lock(|cell| {
        if let Some(hw) = cell.borrow_mut().as_mut() {
            ROOF.tick(hw);
            hw.blink();
        }
    });
}

fn output(gpio: i32) -> Result<OutPin> {
    // SAFETY: every GPIO number in `pins` is claimed exactly once, here.
    let pin = unsafe { AnyOutputPin::new(gpio) };
    Ok(PinDriver::output(pin)?)
}

fn limit_input(gpio: i32) -> Result<InPin> {
    // SAFETY: as for `output`.
    let pin = unsafe { AnyIOPin::new(gpio) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("roofcontrol v{}", env!("CARGO_PKG_VERSION"));

    CONFIG.validate().map_err(Error::from)?;

    // ── 2. Tick-context hardware ──────────────────────────────
    let motor = RoofMotor::new(
        output(pins::OPEN_ENABLE_GPIO)?,
        output(pins::CLOSE_ENABLE_GPIO)?,
    );
    let limits = LimitSwitches::new(
        limit_input(pins::OPEN_LIMIT_GPIO)?,
        limit_input(pins::CLOSED_LIMIT_GPIO)?,
    );
    let led = ActivityLed::new(output(pins::ACTIVITY_LED_GPIO)?);
    TICK_HW.lock(|cell| {
        *cell.borrow_mut() = Some(HardwareAdapter::new(motor, limits, led));
    });

    // ── 3. Polling-context peripherals ────────────────────────
    let peripherals = Peripherals::take()?;

    // SAFETY: the SPI and UART GPIOs below are not claimed anywhere else.
    let (sclk, mosi, miso, cs, tx, rx) = unsafe {
        (
            AnyIOPin::new(pins::ADC_SCLK_GPIO),
            AnyIOPin::new(pins::ADC_MOSI_GPIO),
            AnyIOPin::new(pins::ADC_MISO_GPIO),
            AnyIOPin::new(pins::ADC_CS_GPIO),
            AnyIOPin::new(pins::HOST_TX_GPIO),
            AnyIOPin::new(pins::HOST_RX_GPIO),
        )
    };
    let spi_bus = SpiDriver::new(
        peripherals.spi2,
        sclk,
        mosi,
        Some(miso),
        &SpiDriverConfig::new(),
    )?;
    let spi_config = spi::config::Config::new()
        .baudrate(Hertz(pins::ADC_SPI_FREQ_HZ))
        .data_mode(spi::config::MODE_0);
    let mut adc = Mcp3201::new(SpiDeviceDriver::new(spi_bus, Some(cs), &spi_config)?);

    let mut link = UartLink::open(peripherals.uart1, tx, rx, CONFIG.link_baud).map_err(Error::from)?;
    let mut sink = LogEventSink::new();

    // ── 4. Start the tick ─────────────────────────────────────
    hw_timer::start_tick_timer(CONFIG.tick_interval_ms, on_tick).map_err(Error::from)?;

    // ── 5. Polling loop ───────────────────────────────────────
    let mut service = RoofService::new(&ROOF, &CONFIG);
    service.start(&mut sink);

    loop {
        service.poll(&mut adc, &mut link, &mut sink);
        // Yield so the idle task can feed the task watchdog.
        FreeRtos::delay_ms(1);
    }
}
