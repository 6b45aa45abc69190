//! Shared reading cell: one value behind one lock.
//!
//! Each sensor publishes through its own [`ReadingCell`]; the reporter
//! copies values out.  Access is copy-in / copy-out only, so the lock is
//! held for an O(1) copy and never across a bus transaction.
//!
//! ```text
//!  LightSampler ──write──▶ ReadingCell<LightReading>   ──read──▶ Reporter
//!  ClimateSampler ─write─▶ ReadingCell<ClimateReading> ──read──▶ Reporter
//! ```
//!
//! ## Lock semantics
//!
//! The lock is an `embassy-sync` blocking mutex over
//! [`CriticalSectionRawMutex`].  Acquisition never times out.  On ESP-IDF
//! the critical section is the FreeRTOS spinlock provided by `esp-idf-hal`;
//! on the host it is the `std` implementation of `critical-section`.
//! Fairness is unspecified (whoever wins the spinlock goes first).  Nothing
//! in the protocol relies on a single writer, so additional readers can be
//! added without changing the cell.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// A `Copy` value guarded by a mutual-exclusion lock.
pub struct ReadingCell<T> {
    inner: Mutex<CriticalSectionRawMutex, Cell<T>>,
}

impl<T: Copy> ReadingCell<T> {
    /// Create a cell holding `initial`.  `const` so a cell can live in a
    /// `static` as well as behind an `Arc`.
    pub const fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Replace the held value in full.
    pub fn write(&self, value: T) {
        self.inner.lock(|cell| cell.set(value));
    }

    /// Copy of the held value.
    pub fn read(&self) -> T {
        self.inner.lock(Cell::get)
    }
}

impl<T: Copy + Default> Default for ReadingCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for ReadingCell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ReadingCell").field(&self.read()).finish()
    }
}
