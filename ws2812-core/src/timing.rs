//! WS2812B Protokoll-Timing und Takt-Schedules
//!
//! Ein Schedule legt fest, wie viele CPU-Zyklen jedes der vier Puls-Segmente
//! bei einer bestimmten Taktfrequenz dauert. Es gibt genau zwei Schedules
//! (80 MHz und 160 MHz); welcher aktiv ist, entscheidet der Build.
//!
//! ```text
//!  Bit 1:  ┌────── T1H ──────┐
//!          │                 └─── T1L ───┐
//!  Bit 0:  ┌─ T0H ─┐
//!          │       └─────── T0L ─────────┐
//!          |<-------- BIT_PERIOD -------->|
//! ```

/// Nominale Dauer eines Bits in Nanosekunden
pub const BIT_PERIOD_NS: u32 = 1250;

/// Erlaubte Abweichung der Bit-Periode in Nanosekunden
pub const PERIOD_TOLERANCE_NS: u32 = 150;

/// Minimale Ruhezeit nach dem letzten Bit, bevor der Strip latcht
pub const LATCH_MICROS: u64 = 50;

/// Bits pro LED (3 Kanäle à 8 Bit)
pub const BITS_PER_LED: u32 = 24;

/// Längen der vier Puls-Segmente
///
/// Die Einheit hängt vom Kontext ab: `ClockSchedule::CYCLES` enthält
/// CPU-Zyklen, `ClockSchedule::NANOS` Nanosekunden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseWidths {
    pub t0h: u32,
    pub t0l: u32,
    pub t1h: u32,
    pub t1l: u32,
}

impl PulseWidths {
    pub const fn high(&self, bit: bool) -> u32 {
        if bit { self.t1h } else { self.t0h }
    }

    pub const fn low(&self, bit: bool) -> u32 {
        if bit { self.t1l } else { self.t0l }
    }

    pub const fn period(&self, bit: bool) -> u32 {
        self.high(bit) + self.low(bit)
    }

    /// Rechnet Zyklen bei `cpu_hz` in Nanosekunden um (abgerundet)
    pub const fn to_nanos(&self, cpu_hz: u32) -> Self {
        Self {
            t0h: cycles_to_nanos(self.t0h, cpu_hz),
            t0l: cycles_to_nanos(self.t0l, cpu_hz),
            t1h: cycles_to_nanos(self.t1h, cpu_hz),
            t1l: cycles_to_nanos(self.t1l, cpu_hz),
        }
    }

    /// Prüft die Zyklen-Werte gegen das WS2812B Protokoll
    ///
    /// - beide Bitwerte haben exakt dieselbe Periode
    /// - die Periode liegt innerhalb `BIT_PERIOD_NS ± PERIOD_TOLERANCE_NS`
    /// - Bit 1: HIGH länger als LOW, Bit 0: HIGH kürzer als LOW
    pub const fn is_valid_at(&self, cpu_hz: u32) -> bool {
        if cpu_hz == 0 {
            return false;
        }
        let nanos = self.to_nanos(cpu_hz);
        self.period(false) == self.period(true)
            && nanos.period(true).abs_diff(BIT_PERIOD_NS) <= PERIOD_TOLERANCE_NS
            && self.t1h > self.t1l
            && self.t0h < self.t0l
    }
}

pub const fn cycles_to_nanos(cycles: u32, cpu_hz: u32) -> u32 {
    ((cycles as u64 * 1_000_000_000) / cpu_hz as u64) as u32
}

// ============================================================================
// Zyklen-Modell der Bit-Schleife (RISC-V, Ausführung aus dem IRAM)
// ============================================================================

pub const STORE_CYCLES: u32 = 1;
pub const ALU_CYCLES: u32 = 1;
pub const BRANCH_TAKEN_CYCLES: u32 = 2;

/// Feste Instruktionen zwischen steigender Flanke und T0H-Store
pub const T0H_OVERHEAD: u32 = STORE_CYCLES + 3 * ALU_CYCLES;
/// Feste Instruktionen zwischen T0H-Store und T1H-Store
pub const T1H_OVERHEAD: u32 = STORE_CYCLES + 2 * ALU_CYCLES;
/// Feste Instruktionen zwischen T1H-Store und der nächsten steigenden Flanke
pub const TAIL_OVERHEAD: u32 = STORE_CYCLES + BRANCH_TAKEN_CYCLES;

/// nop-Polster [bis T0H, bis T1H, bis Periodenende]
///
/// Schleifen-Layout pro Bit (T = Zyklen seit der steigenden Flanke):
///
/// ```text
/// sw   mask -> W1TS        T = 0      HIGH
/// srai / not / and         t = mask wenn Bit 0, sonst 0
/// nop × pad[0]
/// sw   t -> W1TC           T = T0H    LOW bei Bit 0, sonst wirkungslos
/// slli / addi              nächstes Bit, Zähler
/// nop × pad[1]
/// sw   mask -> W1TC        T = T1H    LOW bei Bit 1
/// nop × pad[2]
/// bnez                     T = T0H + T0L = T1H + T1L
/// ```
///
/// Beide Bitwerte laufen durch exakt dieselben Instruktionen; nur der
/// Zeitpunkt der fallenden Flanke hängt vom Bit ab. `None`, wenn ein
/// Segment kürzer als die festen Instruktionen davor ist.
pub const fn try_nop_padding(cycles: PulseWidths) -> Option<[u32; 3]> {
    let Some(to_t1h) = cycles.t1h.checked_sub(cycles.t0h) else {
        return None;
    };
    let Some(t0h) = cycles.t0h.checked_sub(T0H_OVERHEAD) else {
        return None;
    };
    let Some(t1h) = to_t1h.checked_sub(T1H_OVERHEAD) else {
        return None;
    };
    let Some(tail) = cycles.t1l.checked_sub(TAIL_OVERHEAD) else {
        return None;
    };
    Some([t0h, t1h, tail])
}

/// Wie `try_nop_padding`, bricht in const-Kontext den Build ab
pub const fn nop_padding(cycles: PulseWidths) -> [u32; 3] {
    match try_nop_padding(cycles) {
        Some(pads) => pads,
        None => panic!("pulse schedule is shorter than the loop overhead"),
    }
}

/// Zyklen-Schedule für genau eine CPU-Taktfrequenz
///
/// Strategy-Abstraktion für die Timing Engine: jede Implementierung
/// erfüllt denselben Bit-Kontrakt mit frequenzspezifischen Zyklenzahlen.
pub trait ClockSchedule {
    /// CPU-Takt, für den die Zyklenzahlen gelten
    const CPU_HZ: u32;

    /// Segmentlängen in CPU-Zyklen
    const CYCLES: PulseWidths;

    /// Segmentlängen in Nanosekunden
    const NANOS: PulseWidths = Self::CYCLES.to_nanos(Self::CPU_HZ);

    /// Build-Fehler, sobald ein Emitter mit ungültigem Schedule erzeugt wird
    const ASSERT_VALID: () = assert!(
        Self::CYCLES.is_valid_at(Self::CPU_HZ),
        "pulse schedule violates WS2812B timing"
    );
}

/// 80 MHz: 12.5 ns pro Zyklus, 100 Zyklen pro Bit
#[derive(Debug, Clone, Copy, Default)]
pub struct Mhz80;

impl ClockSchedule for Mhz80 {
    const CPU_HZ: u32 = 80_000_000;
    const CYCLES: PulseWidths = PulseWidths {
        t0h: 32, // 400 ns
        t0l: 68, // 850 ns
        t1h: 64, // 800 ns
        t1l: 36, // 450 ns
    };
}

/// 160 MHz: 6.25 ns pro Zyklus, 200 Zyklen pro Bit
#[derive(Debug, Clone, Copy, Default)]
pub struct Mhz160;

impl ClockSchedule for Mhz160 {
    const CPU_HZ: u32 = 160_000_000;
    const CYCLES: PulseWidths = PulseWidths {
        t0h: 64,  // 400 ns
        t0l: 136, // 850 ns
        t1h: 128, // 800 ns
        t1l: 72,  // 450 ns
    };
}
