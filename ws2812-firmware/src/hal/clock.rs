// Mikrosekunden-Uhr für den Latch Timer

use esp_hal::time::Instant;
use ws2812_core::MicrosClock;

/// Monotone Systemzeit seit dem Boot (esp-hal SYSTIMER)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMicros;

impl MicrosClock for SystemMicros {
    fn now_micros(&self) -> u64 {
        Instant::now().duration_since_epoch().as_micros()
    }
}
