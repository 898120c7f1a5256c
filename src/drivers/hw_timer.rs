//! Periodic tick timer.
//!
//! On ESP-IDF this is a raw `esp_timer` dispatched from the timer task
//! (not an ISR), so the callback may take the critical section and write
//! GPIOs.  On simulation targets a background thread sleeps between
//! calls to approximate the period.
//!
//! Only one tick timer exists per process; a second start is rejected.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::TimerError;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

static RUNNING: AtomicBool = AtomicBool::new(false);

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the `fn()` stored by `start_tick_timer`, which
    // lives for the whole program.
    let callback: fn() = unsafe { core::mem::transmute::<*mut core::ffi::c_void, fn()>(arg) };
    callback();
}

/// Call `callback` every `period_ms` milliseconds from the timer task.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(period_ms: u32, callback: fn()) -> Result<(), TimerError> {
    if RUNNING.swap(true, Ordering::AcqRel) {
        return Err(TimerError::AlreadyRunning);
    }

    // SAFETY: TICK_TIMER is written once here, guarded by RUNNING, before
    // the timer is started; the callback never touches it.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: callback as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"roof_tick".as_ptr(),
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            RUNNING.store(false, Ordering::Release);
            return Err(TimerError::CreateFailed(ret));
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, u64::from(period_ms) * 1000);
        if ret != ESP_OK {
            esp_timer_delete(TICK_TIMER);
            TICK_TIMER = core::ptr::null_mut();
            RUNNING.store(false, Ordering::Release);
            return Err(TimerError::StartFailed(ret));
        }
    }

    info!("hw_timer: tick every {} ms", period_ms);
    Ok(())
}

/// Simulation: a detached thread calls `callback` every `period_ms`.
#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(period_ms: u32, callback: fn()) -> Result<(), TimerError> {
    if RUNNING.swap(true, Ordering::AcqRel) {
        return Err(TimerError::AlreadyRunning);
    }
    let period = std::time::Duration::from_millis(u64::from(period_ms));
    std::thread::Builder::new()
        .name("roof_tick".into())
        .spawn(move || {
            while RUNNING.load(Ordering::Acquire) {
                std::thread::sleep(period);
                callback();
            }
        })
        .map_err(|_| {
            RUNNING.store(false, Ordering::Release);
            TimerError::CreateFailed(-1)
        })?;
    log::info!("hw_timer(sim): tick every {} ms", period_ms);
    Ok(())
}

/// Stop the tick timer.  No-op if it was never started.
#[cfg(target_os = "espidf")]
pub fn stop_tick_timer() {
    if !RUNNING.swap(false, Ordering::AcqRel) {
        return;
    }
    // SAFETY: RUNNING was set, so start_tick_timer stored a valid handle.
    unsafe {
        esp_timer_stop(TICK_TIMER);
        esp_timer_delete(TICK_TIMER);
        TICK_TIMER = core::ptr::null_mut();
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_tick_timer() {
    RUNNING.store(false, Ordering::Release);
}
