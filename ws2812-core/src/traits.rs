//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu Pin, Interrupt-Steuerung
//! und Mikrosekunden-Uhr ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `RiscvPulseEmitter`, `SystemMicros` (ws2812-firmware)
//! - **Portabel:** `SoftwareEmitter` über embedded-hal, `CriticalSectionGuard`
//! - **Testing:** Mocks in ws2812-tests

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Der Pin hat einen Pegelwechsel abgelehnt
    PinFault,
}

/// Timing Engine: erzeugt die Pulsfolge für eine Byte-Sequenz
///
/// Pro Bit genau ein HIGH/LOW-Paar, MSB zuerst, Bytes von links nach rechts.
/// Die Periode pro Bit ist unabhängig vom Bitwert konstant.
pub trait PulseEmitter {
    /// Setzt die Datenleitung auf den Ruhepegel (LOW)
    fn idle(&mut self) -> Result<(), LedError>;

    /// Sendet `bytes` als Pulsfolge
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::PinFault` zurück wenn ein Pegelwechsel fehlschlägt.
    /// Ob das Timing stimmt, ist in Software nicht prüfbar.
    fn emit(&mut self, bytes: &[u8]) -> Result<(), LedError>;
}

/// Scoped Sperre aller Interrupts
///
/// `f` läuft ohne Unterbrechung; der vorherige Interrupt-Zustand wird auf
/// jedem Ausgangspfad wiederhergestellt.
pub trait InterruptGuard {
    fn exclusive<R>(&mut self, f: impl FnOnce() -> R) -> R;
}

/// Monotone Mikrosekunden-Uhr
pub trait MicrosClock {
    fn now_micros(&self) -> u64;
}
