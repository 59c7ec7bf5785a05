//! Frame Sequencer
//!
//! Übersetzt eine `RenderRequest` in die geordnete Folge von Farb-Records:
//! dunkel - Farbe - dunkel. Pro Record folgt genau ein Aufruf der
//! Timing Engine.

use core::iter::repeat_n;

use crate::timing::BITS_PER_LED;
use crate::types::{GrbColor, RenderRequest};

/// Aufteilung eines Frames in die drei Abschnitte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameLayout {
    pub leading_dark: u32,
    pub colored: u32,
    pub trailing_dark: u32,
    pub color: GrbColor,
}

impl FrameLayout {
    /// Berechnet die dunklen LEDs am Ende aus der Strip-Länge
    ///
    /// Überschreiten `leading_dark + colored` die Strip-Länge, wird der
    /// Rest auf 0 begrenzt statt unsigned überzulaufen. Die angefragten
    /// LEDs werden trotzdem alle gesendet.
    pub fn new(total_leds: u32, request: &RenderRequest) -> Self {
        let leading_dark = u32::from(request.leading_dark);
        let colored = u32::from(request.colored);
        Self {
            leading_dark,
            colored,
            trailing_dark: total_leds.saturating_sub(leading_dark + colored),
            color: request.color,
        }
    }

    /// Anzahl der LEDs, die tatsächlich gesendet werden
    pub fn led_count(&self) -> u32 {
        self.leading_dark + self.colored + self.trailing_dark
    }

    /// Anzahl der HIGH/LOW-Pulse für den ganzen Frame
    pub fn bit_count(&self) -> u64 {
        u64::from(self.led_count()) * u64::from(BITS_PER_LED)
    }

    /// true wenn die Anfrage länger war als der Strip
    pub fn is_clamped(&self, total_leds: u32) -> bool {
        self.leading_dark + self.colored > total_leds
    }

    /// Alle Records in Sende-Reihenfolge
    pub fn records(&self) -> impl Iterator<Item = GrbColor> {
        repeat_n(GrbColor::BLACK, self.leading_dark as usize)
            .chain(repeat_n(self.color, self.colored as usize))
            .chain(repeat_n(GrbColor::BLACK, self.trailing_dark as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_dark_fills_strip() {
        let request = RenderRequest::from_rgb(3, 2, 255, 0, 0);
        let layout = FrameLayout::new(12, &request);
        assert_eq!(layout.trailing_dark, 7);
        assert_eq!(layout.led_count(), 12);
        assert_eq!(layout.bit_count(), 12 * 24);
        assert!(!layout.is_clamped(12));
    }

    #[test]
    fn test_records_are_dark_color_dark() {
        let red = GrbColor::new(255, 0, 0);
        let layout = FrameLayout::new(6, &RenderRequest::new(1, 2, red));
        let mut records = layout.records();
        assert_eq!(records.next(), Some(GrbColor::BLACK));
        assert_eq!(records.next(), Some(red));
        assert_eq!(records.next(), Some(red));
        assert_eq!(records.next(), Some(GrbColor::BLACK));
        assert_eq!(records.next(), Some(GrbColor::BLACK));
        assert_eq!(records.next(), Some(GrbColor::BLACK));
        assert_eq!(records.next(), None);
    }

    #[test]
    fn test_overlong_request_clamps_trailing_dark() {
        let layout = FrameLayout::new(10, &RenderRequest::from_rgb(10, 5, 0, 0, 255));
        assert_eq!(layout.trailing_dark, 0);
        assert_eq!(layout.led_count(), 15);
        assert_eq!(layout.bit_count(), 15 * 24);
        assert!(layout.is_clamped(10));
    }

    #[test]
    fn test_maximum_counts_do_not_overflow() {
        let layout = FrameLayout::new(0, &RenderRequest::from_rgb(255, 255, 1, 1, 1));
        assert_eq!(layout.trailing_dark, 0);
        assert_eq!(layout.led_count(), 510);
    }

    #[test]
    fn test_empty_strip_sends_nothing() {
        let layout = FrameLayout::new(0, &RenderRequest::from_rgb(0, 0, 9, 9, 9));
        assert_eq!(layout.records().count(), 0);
        assert_eq!(layout.bit_count(), 0);
    }

    #[test]
    fn test_long_strip_beyond_u8_range() {
        let layout = FrameLayout::new(300, &RenderRequest::from_rgb(0, 255, 9, 9, 9));
        assert_eq!(layout.trailing_dark, 45);
        assert_eq!(layout.records().count(), 300);
    }
}
