//! WS2812 Core - Platform-agnostic Bit-Banging Logic
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das Datenmodell, die Takt-Schedules, die Traits für
//! Pin/Interrupts/Uhr und die komplette Frame-Logik. Die Firmware liefert
//! nur noch die zyklengenauen Implementierungen der Traits.

#![no_std]

pub mod controller;
pub mod emitter;
pub mod guard;
pub mod latch;
pub mod logic;
pub mod sequencer;
pub mod timing;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::LedController;
pub use emitter::{SoftwareEmitter, bits_msb_first};
pub use guard::CriticalSectionGuard;
pub use latch::LatchTimer;
pub use logic::{next_chase_offset, rotate_color};
pub use sequencer::FrameLayout;
pub use timing::{ClockSchedule, Mhz80, Mhz160, PulseWidths, nop_padding, try_nop_padding};
pub use traits::{InterruptGuard, LedError, MicrosClock, PulseEmitter};
pub use types::{DEFAULT_TOTAL_LEDS, GrbColor, RenderRequest, StripConfig};
