// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus ws2812-core für den ESP32-C6.
// Die Logik selbst bleibt in ws2812-core und ist dort auf dem Host testbar.

pub mod clock;
pub mod pulse;

pub use clock::SystemMicros;
pub use pulse::{AsmSchedule, RiscvPulseEmitter};
