// Library-Root: Firmware-Module für den Bit-Banging WS2812 Treiber
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Der CPU-Takt ist ein Build-Parameter: genau ein Schedule muss gewählt sein
#[cfg(all(feature = "cpu-80mhz", feature = "cpu-160mhz"))]
compile_error!("Features `cpu-80mhz` and `cpu-160mhz` are mutually exclusive");

#[cfg(not(any(feature = "cpu-80mhz", feature = "cpu-160mhz")))]
compile_error!("Select the CPU clock: enable feature `cpu-80mhz` or `cpu-160mhz`");

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ws2812-core
pub use ws2812_core::{
    ClockSchedule, CriticalSectionGuard, LedController, LedError, PulseEmitter, next_chase_offset,
    rotate_color,
};
