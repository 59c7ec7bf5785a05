//! LED Controller - verbindet Sequencer, Guard, Timing Engine und Latch
//!
//! Ablauf eines `render()`:
//! 1. `FrameLayout` aus Strip-Länge und Anfrage berechnen
//! 2. Interrupts sperren
//! 3. Pro LED drei Bytes (G, R, B) über den `PulseEmitter` senden
//! 4. Interrupts freigeben
//! 5. Busy-Wait bis die Latch-Zeit abgelaufen ist

use crate::latch::LatchTimer;
use crate::sequencer::FrameLayout;
use crate::traits::{InterruptGuard, LedError, MicrosClock, PulseEmitter};
use crate::types::{RenderRequest, StripConfig};

/// Steuert genau einen Strip an genau einem Pin
///
/// Alle Operationen brauchen `&mut self`; eine Konfigurationsänderung oder
/// ein zweiter Render während einer laufenden Übertragung ist damit
/// statisch ausgeschlossen.
pub struct LedController<E, G, C> {
    config: StripConfig,
    emitter: E,
    guard: G,
    latch: LatchTimer<C>,
}

impl<E, G, C> LedController<E, G, C>
where
    E: PulseEmitter,
    G: InterruptGuard,
    C: MicrosClock,
{
    pub fn new(total_leds: u32, emitter: E, guard: G, clock: C) -> Self {
        Self {
            config: StripConfig::new(total_leds),
            emitter,
            guard,
            latch: LatchTimer::new(clock),
        }
    }

    /// Datenleitung auf LOW setzen; einmal vor dem ersten `render()` aufrufen
    pub fn init(&mut self) -> Result<(), LedError> {
        self.emitter.idle()
    }

    pub fn set_total_leds(&mut self, total_leds: u32) {
        self.config = StripConfig::new(total_leds);
    }

    pub fn total_leds(&self) -> u32 {
        self.config.total_leds
    }

    pub fn config(&self) -> StripConfig {
        self.config
    }

    /// Zeigt `leading_dark` dunkle LEDs, dann `colored` LEDs in (r, g, b),
    /// den Rest des Strips dunkel
    ///
    /// Kehrt erst zurück, wenn die Latch-Zeit abgelaufen ist.
    pub fn render(
        &mut self,
        leading_dark: u8,
        colored: u8,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), LedError> {
        self.render_request(RenderRequest::from_rgb(leading_dark, colored, r, g, b))
    }

    pub fn render_request(&mut self, request: RenderRequest) -> Result<(), LedError> {
        let layout = FrameLayout::new(self.config.total_leds, &request);

        if layout.is_clamped(self.config.total_leds) {
            warn_clamped(&request, self.config.total_leds);
        }

        let Self { emitter, guard, .. } = self;
        let sent = guard.exclusive(|| transmit(emitter, &layout));

        if sent.is_err() {
            // Abgebrochener Frame: Leitung trotzdem in Ruhe bringen und latchen
            if let Err(e) = self.emitter.idle() {
                warn_idle_failed(e);
            }
        }
        self.latch.wait();
        sent
    }
}

/// Ein Aufruf der Timing Engine pro LED
fn transmit<E: PulseEmitter>(emitter: &mut E, layout: &FrameLayout) -> Result<(), LedError> {
    for record in layout.records() {
        emitter.emit(&record.as_bytes())?;
    }
    Ok(())
}

#[cfg(feature = "defmt")]
fn warn_clamped(request: &RenderRequest, total_leds: u32) {
    defmt::warn!(
        "Render request {} exceeds strip of {} LEDs, trailing dark clamped",
        request,
        total_leds
    );
}

#[cfg(not(feature = "defmt"))]
fn warn_clamped(_request: &RenderRequest, _total_leds: u32) {}

/// Der Fehler aus der Übertragung wird zurückgegeben, dieser nur geloggt
#[cfg(feature = "defmt")]
fn warn_idle_failed(error: LedError) {
    defmt::warn!("Failed to idle data line after aborted frame: {}", error);
}

#[cfg(not(feature = "defmt"))]
fn warn_idle_failed(_error: LedError) {}
