//! Portable Timing Engine über embedded-hal
//!
//! `SoftwareEmitter` setzt den Bit-Kontrakt mit einem `OutputPin` und einem
//! `DelayNs` um. Zyklengenau ist das nur, wenn die Delay-Implementierung es
//! ist; auf dem ESP32-C6 nutzt die Firmware deshalb eine eigene asm-Schleife.
//! Auf dem Host dient dieser Emitter als Referenz für die Waveform-Tests.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::timing::ClockSchedule;
use crate::traits::{LedError, PulseEmitter};

/// Liefert die 8 Bits eines Bytes, höchstwertiges Bit zuerst
///
/// ```
/// # use ws2812_core::bits_msb_first;
/// let bits: Vec<bool> = bits_msb_first(0b1000_0001).collect();
/// assert_eq!(bits, [true, false, false, false, false, false, false, true]);
/// ```
pub fn bits_msb_first(byte: u8) -> impl Iterator<Item = bool> {
    (0..8).rev().map(move |shift| byte & (1 << shift) != 0)
}

/// Timing Engine über generischen Pin + Delay
pub struct SoftwareEmitter<P, D, S> {
    pin: P,
    delay: D,
    _schedule: PhantomData<S>,
}

impl<P, D, S> SoftwareEmitter<P, D, S>
where
    P: OutputPin,
    D: DelayNs,
    S: ClockSchedule,
{
    /// Erstellt den Emitter; ein ungültiger Schedule bricht den Build ab
    pub fn new(pin: P, delay: D) -> Self {
        let () = S::ASSERT_VALID;
        Self {
            pin,
            delay,
            _schedule: PhantomData,
        }
    }

    /// Gibt Pin und Delay wieder frei
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    #[inline(always)]
    fn write_bit(&mut self, bit: bool) -> Result<(), LedError> {
        let widths = S::NANOS;
        self.pin.set_high().map_err(|_| LedError::PinFault)?;
        self.delay.delay_ns(widths.high(bit));
        self.pin.set_low().map_err(|_| LedError::PinFault)?;
        self.delay.delay_ns(widths.low(bit));
        Ok(())
    }
}

impl<P, D, S> PulseEmitter for SoftwareEmitter<P, D, S>
where
    P: OutputPin,
    D: DelayNs,
    S: ClockSchedule,
{
    fn idle(&mut self) -> Result<(), LedError> {
        self.pin.set_low().map_err(|_| LedError::PinFault)
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<(), LedError> {
        for &byte in bytes {
            for bit in bits_msb_first(byte) {
                self.write_bit(bit)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_msb_first_order() {
        let mut bits = [false; 8];
        for (slot, bit) in bits.iter_mut().zip(bits_msb_first(0b1010_0011)) {
            *slot = bit;
        }
        assert_eq!(bits, [true, false, true, false, false, false, true, true]);
    }

    #[test]
    fn test_bits_msb_first_yields_eight_bits() {
        assert_eq!(bits_msb_first(0x00).count(), 8);
        assert_eq!(bits_msb_first(0xFF).filter(|bit| *bit).count(), 8);
    }
}
