// Strip Chase Task - Lauflicht über den Bit-Banging Controller
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use rgb::RGB8;

use crate::config::{ActiveSchedule, CHASE_RUN_LENGTH, FRAME_INTERVAL_MS, LED_BRIGHTNESS, LED_COUNT};
use crate::hal::{RiscvPulseEmitter, SystemMicros};
use crate::{CriticalSectionGuard, LedController, next_chase_offset, rotate_color};
use ws2812_core::{InterruptGuard, MicrosClock, PulseEmitter};

/// Lauflicht-Logik - ohne Hardware-Abhängigkeit
///
/// Ein Block von `CHASE_RUN_LENGTH` LEDs wandert über den Strip, bis er
/// am Ende anliegt; der Frame passt damit immer in den Strip.
/// Nach jedem Durchlauf rotiert die Farbe (Rot → Grün → Blau).
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (RiscvPulseEmitter, SystemMicros) im Production-Code
/// - Mock Implementierungen in Tests
pub async fn strip_chase_logic<E, G, C>(mut controller: LedController<E, G, C>)
where
    E: PulseEmitter,
    G: InterruptGuard,
    C: MicrosClock,
{
    if let Err(e) = controller.init() {
        error!("Failed to idle LED data line: {}", e);
    }

    info!(
        "Strip: {} LEDs, chase run of {}",
        controller.total_leds(),
        CHASE_RUN_LENGTH
    );

    let mut color = RGB8 {
        r: LED_BRIGHTNESS,
        g: 0,
        b: 0,
    };
    let mut offset: u8 = 0;

    loop {
        if let Err(e) = controller.render(offset, CHASE_RUN_LENGTH, color.r, color.g, color.b) {
            error!("Failed to render frame at offset {}: {}", offset, e);
        }

        offset = next_chase_offset(offset, CHASE_RUN_LENGTH, controller.total_leds());
        if offset == 0 {
            color = rotate_color(color);
            info!("Chase wrapped, next color ({}, {}, {})", color.r, color.g, color.b);
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
    }
}

/// Strip Chase Task - Embassy Task
///
/// Übernimmt die Hardware-Initialisierung (Pin als Ausgang, LOW) und ruft
/// dann `strip_chase_logic()` auf.
#[embassy_executor::task]
pub async fn strip_chase_task(gpio8: esp_hal::peripherals::GPIO8<'static>) {
    let emitter = RiscvPulseEmitter::<ActiveSchedule>::new(gpio8);
    let controller = LedController::new(LED_COUNT, emitter, CriticalSectionGuard, SystemMicros);

    strip_chase_logic(controller).await;
}
