//! Latch Timer - erzwingt die Ruhezeit nach dem letzten Bit

use core::hint::spin_loop;

use crate::timing::LATCH_MICROS;
use crate::traits::MicrosClock;

/// Busy-Wait bis der Strip die Daten übernommen hat
///
/// Absichtlich kein Sleep/Yield: nichts, was den Aufrufer umplanen könnte.
/// Garantiert ist nur die Mindestdauer, eine Obergrenze gibt es nicht.
pub struct LatchTimer<C> {
    clock: C,
}

impl<C: MicrosClock> LatchTimer<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Wartet mindestens `LATCH_MICROS` ab dem ersten Zeitstempel nach der
    /// Übertragung und gibt diesen Zeitstempel zurück
    ///
    /// Die Uhr schneidet auf ganze Mikrosekunden ab: der erste Zeitstempel
    /// kann bis zu einem Tick zu früh liegen, daher ein Tick Zuschlag.
    pub fn wait(&self) -> u64 {
        let start = self.clock.now_micros();
        while self.clock.now_micros().wrapping_sub(start) <= LATCH_MICROS {
            spin_loop();
        }
        start
    }
}
