//! `critical-section` 1.x implementation for the ESP-IDF runtime.
//!
//! `embassy-sync`'s `CriticalSectionRawMutex` needs a process-wide
//! critical section.  The tick runs in the `esp_timer` task and the
//! polling loop in the main task, so a FreeRTOS-backed std mutex is
//! enough: neither context is an ISR.  Nesting within one task is
//! tracked per thread so re-entry does not deadlock.

use core::cell::{Cell, RefCell};
use std::sync::{Mutex, MutexGuard, PoisonError};

static SECTION: Mutex<()> = Mutex::new(());

thread_local! {
    static DEPTH: Cell<u8> = const { Cell::new(0) };
    static HELD: RefCell<Option<MutexGuard<'static, ()>>> = const { RefCell::new(None) };
}

#[unsafe(no_mangle)]
pub extern "C" fn _critical_section_1_0_acquire() -> u8 {
    DEPTH.with(|depth| {
        let d = depth.get();
        if d == 0 {
            let guard = SECTION.lock().unwrap_or_else(PoisonError::into_inner);
            HELD.with(|held| *held.borrow_mut() = Some(guard));
        }
        let d = d.saturating_add(1);
        depth.set(d);
        d
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn _critical_section_1_0_release(_token: u8) {
    // The token is not trusted; the restore-state width depends on the
    // features other crates enable on `critical-section`.
    DEPTH.with(|depth| {
        let d = depth.get();
        if d == 0 {
            return;
        }
        depth.set(d - 1);
        if d == 1 {
            HELD.with(|held| *held.borrow_mut() = None);
        }
    });
}
