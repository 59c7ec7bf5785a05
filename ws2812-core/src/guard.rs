//! Critical Section Guard
//!
//! Während einer Übertragung dürfen keine Interrupts laufen, sonst stimmen
//! die gezählten Zyklen nicht mehr. Die Sperre ist scoped: `critical_section`
//! stellt den vorherigen Interrupt-Zustand beim Verlassen der Closure wieder
//! her, auch bei frühem Return oder Panic.
//!
//! Verzögerte Interrupts werden erst nach der Freigabe bedient. Die maximale
//! Verzögerung ist `LEDs × 24 × BIT_PERIOD_NS`.

use crate::traits::InterruptGuard;

/// Guard über die globale `critical-section` Implementierung
///
/// Auf dem ESP32-C6 liefert esp-hal die Implementierung, auf dem Host
/// das `std` Feature der critical-section Crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalSectionGuard;

impl InterruptGuard for CriticalSectionGuard {
    fn exclusive<R>(&mut self, f: impl FnOnce() -> R) -> R {
        critical_section::with(|_cs| f())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_returns_closure_value() {
        let mut guard = CriticalSectionGuard;
        assert_eq!(guard.exclusive(|| 42), 42);
    }

    #[test]
    fn test_guard_can_be_acquired_again_after_release() {
        let mut guard = CriticalSectionGuard;
        let first: Result<(), ()> = guard.exclusive(|| Err(()));
        assert!(first.is_err());
        assert_eq!(guard.exclusive(|| 7), 7);
    }
}
