//! Core Types für die LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Anzahl LEDs, mit der ein Controller ohne explizite Konfiguration startet
pub const DEFAULT_TOTAL_LEDS: u32 = 12;

/// Farb-Record in Leitungs-Reihenfolge (Grün, Rot, Blau)
///
/// WS2812B erwartet pro LED drei Bytes in der Reihenfolge G, R, B.
/// Konstruiert wird trotzdem in der gewohnten Reihenfolge r, g, b;
/// nach der Konstruktion ist der Record unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrbColor {
    g: u8,
    r: u8,
    b: u8,
}

impl GrbColor {
    /// Alle Kanäle 0 (LED dunkel)
    pub const BLACK: Self = Self { g: 0, r: 0, b: 0 };

    /// Erstellt einen Record aus Kanalwerten in Anzeige-Reihenfolge
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// Die drei Bytes exakt so, wie sie auf die Leitung gehen
    ///
    /// ```
    /// # use ws2812_core::GrbColor;
    /// let red = GrbColor::new(255, 0, 0);
    /// assert_eq!(red.as_bytes(), [0, 255, 0]);
    /// ```
    pub const fn as_bytes(&self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn is_dark(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl From<RGB8> for GrbColor {
    fn from(color: RGB8) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<GrbColor> for RGB8 {
    fn from(color: GrbColor) -> Self {
        RGB8 {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Strip-Konfiguration
///
/// Lebt so lange wie der Controller; ändern nur über
/// `LedController::set_total_leds()`, nie während einer Übertragung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    pub total_leds: u32,
}

impl StripConfig {
    pub const fn new(total_leds: u32) -> Self {
        Self { total_leds }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_LEDS)
    }
}

/// Render-Anfrage: dunkle LEDs vorne, farbiger Block, Rest dunkel
///
/// Die Anzahl der dunklen LEDs am Ende wird nicht gespeichert,
/// sondern von `FrameLayout` aus der Strip-Länge berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderRequest {
    pub leading_dark: u8,
    pub colored: u8,
    pub color: GrbColor,
}

impl RenderRequest {
    pub const fn new(leading_dark: u8, colored: u8, color: GrbColor) -> Self {
        Self {
            leading_dark,
            colored,
            color,
        }
    }

    /// Erstellt eine Anfrage direkt aus r/g/b Kanalwerten
    pub const fn from_rgb(leading_dark: u8, colored: u8, r: u8, g: u8, b: u8) -> Self {
        Self::new(leading_dark, colored, GrbColor::new(r, g, b))
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for GrbColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "GrbColor {{ r: {}, g: {}, b: {} }}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_order_is_grb() {
        let color = GrbColor::new(1, 2, 3);
        assert_eq!(color.as_bytes(), [2, 1, 3]);
        assert_eq!(color.red(), 1);
        assert_eq!(color.green(), 2);
        assert_eq!(color.blue(), 3);
    }

    #[test]
    fn test_black_is_dark() {
        assert!(GrbColor::BLACK.is_dark());
        assert_eq!(GrbColor::default(), GrbColor::BLACK);
        assert!(!GrbColor::new(0, 0, 1).is_dark());
    }

    #[test]
    fn test_rgb8_roundtrip_keeps_channels() {
        let rgb = RGB8 { r: 10, g: 20, b: 30 };
        let grb = GrbColor::from(rgb);
        assert_eq!(grb.as_bytes(), [20, 10, 30]);
        assert_eq!(RGB8::from(grb), rgb);
    }

    #[test]
    fn test_default_strip_has_twelve_leds() {
        assert_eq!(StripConfig::default().total_leds, 12);
    }
}
