// Zyklengenaue Timing Engine für den ESP32-C6 (RISC-V)
//
// Die Pulse entstehen in einer asm-Schleife, deren Laufzeit nur aus
// gezählten Instruktionen besteht. Die nop-Polster werden zur Compile-Zeit
// aus dem Schedule berechnet. Die Schleife liegt im IRAM (#[esp_hal::ram]),
// damit kein Flash-Cache-Miss die Zyklen verschiebt.

use core::arch::asm;
use core::marker::PhantomData;

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};
use ws2812_core::{ClockSchedule, LedError, Mhz80, Mhz160, PulseEmitter, nop_padding};

/// GPIO_OUT_W1TS_REG: Bits setzen (ESP32-C6 TRM, GPIO Base 0x6009_1000)
const GPIO_OUT_W1TS: u32 = 0x6009_1008;
/// GPIO_OUT_W1TC_REG: Bits löschen
const GPIO_OUT_W1TC: u32 = 0x6009_100C;

// Zyklen-Modell und Schleifen-Layout: ws2812_core::timing::nop_padding

/// Schedule mit eigener asm-Schleife
///
/// asm!-Konstanten dürfen nicht von generischen Parametern abhängen,
/// daher erzeugt `asm_schedule!` pro Schedule eine eigene Funktion.
pub trait AsmSchedule: ClockSchedule {
    /// Schiebt die obersten `bits` Bits von `word` hinaus, MSB zuerst
    ///
    /// # Safety
    /// `mask` muss genau einen als Ausgang konfigurierten GPIO adressieren,
    /// `bits` muss zwischen 1 und 32 liegen. Interrupts sollten gesperrt sein.
    unsafe fn shift_out(word: u32, bits: u32, mask: u32);
}

macro_rules! asm_schedule {
    ($schedule:ty, $module:ident) => {
        mod $module {
            use super::*;

            const PADS: [u32; 3] = nop_padding(<$schedule as ClockSchedule>::CYCLES);

            #[esp_hal::ram]
            #[inline(never)]
            pub(super) unsafe fn shift_out(word: u32, bits: u32, mask: u32) {
                unsafe {
                    asm!(
                        "2:",
                        "sw {mask}, 0({set})",
                        "srai {t}, {word}, 31",
                        "not {t}, {t}",
                        "and {t}, {t}, {mask}",
                        ".rept {pad_t0h}",
                        "nop",
                        ".endr",
                        "sw {t}, 0({clear})",
                        "slli {word}, {word}, 1",
                        "addi {bits}, {bits}, -1",
                        ".rept {pad_t1h}",
                        "nop",
                        ".endr",
                        "sw {mask}, 0({clear})",
                        ".rept {pad_tail}",
                        "nop",
                        ".endr",
                        "bnez {bits}, 2b",
                        word = inout(reg) word => _,
                        bits = inout(reg) bits => _,
                        mask = in(reg) mask,
                        set = in(reg) GPIO_OUT_W1TS,
                        clear = in(reg) GPIO_OUT_W1TC,
                        t = out(reg) _,
                        pad_t0h = const PADS[0],
                        pad_t1h = const PADS[1],
                        pad_tail = const PADS[2],
                        options(nostack),
                    );
                }
            }
        }

        impl AsmSchedule for $schedule {
            unsafe fn shift_out(word: u32, bits: u32, mask: u32) {
                unsafe { $module::shift_out(word, bits, mask) }
            }
        }
    };
}

asm_schedule!(Mhz80, mhz80);
asm_schedule!(Mhz160, mhz160);

/// Timing Engine über direkte Schreibzugriffe auf W1TS/W1TC
///
/// Der `Output` bleibt im Emitter, damit Pin-Konfiguration und Ownership
/// erhalten bleiben; die asm-Schleife schreibt nur die Set/Clear-Register.
pub struct RiscvPulseEmitter<'d, S> {
    pin: Output<'d>,
    mask: u32,
    _schedule: PhantomData<S>,
}

impl<'d, S: AsmSchedule> RiscvPulseEmitter<'d, S> {
    /// Konfiguriert `pin` als Ausgang mit Pegel LOW
    pub fn new(pin: impl OutputPin + 'd) -> Self {
        let () = S::ASSERT_VALID;
        let mask = 1u32 << pin.number();
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
            mask,
            _schedule: PhantomData,
        }
    }
}

impl<S: AsmSchedule> PulseEmitter for RiscvPulseEmitter<'_, S> {
    fn idle(&mut self) -> Result<(), LedError> {
        self.pin.set_low();
        Ok(())
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<(), LedError> {
        // Bis zu 4 Bytes pro asm-Aufruf: innerhalb eines Wortes (also
        // innerhalb eines LED-Records) gibt es keine Lücke an Byte-Grenzen
        for chunk in bytes.chunks(4) {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            // SAFETY: mask stammt von self.pin, der als Ausgang konfiguriert
            // ist; chunk.len() liegt zwischen 1 und 4
            unsafe {
                S::shift_out(u32::from_be_bytes(word), chunk.len() as u32 * 8, self.mask);
            }
        }
        Ok(())
    }
}
