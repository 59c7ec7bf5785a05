//! Pure Business Logic Functions für das Demo-Muster der Firmware
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Rotiert RGB-Farbwerte zyklisch: Rot → Grün → Blau → Rot
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use ws2812_core::rotate_color;
/// let mut color = RGB8 { r: 10, g: 0, b: 0 };  // Rot
/// color = rotate_color(color);                  // → Grün
/// assert_eq!(color, RGB8 { r: 0, g: 10, b: 0 });
/// ```
pub fn rotate_color(color: RGB8) -> RGB8 {
    RGB8 {
        r: color.b,
        g: color.r,
        b: color.g,
    }
}

/// Nächste Startposition für den laufenden Farbblock der Länge `run_length`
///
/// Läuft, bis der Block am Strip-Ende anliegt, und springt dann auf 0
/// zurück; kein Frame ragt damit über den Strip hinaus. Da die Anzahl
/// dunkler LEDs vorne ein `u8` ist, endet der Lauf spätestens bei 255.
/// Ist der Block länger als der Strip, bleibt er bei 0.
///
/// ```
/// # use ws2812_core::next_chase_offset;
/// assert_eq!(next_chase_offset(3, 3, 12), 4);
/// assert_eq!(next_chase_offset(9, 3, 12), 0);
/// ```
pub fn next_chase_offset(offset: u8, run_length: u8, total_leds: u32) -> u8 {
    let positions = total_leds.saturating_sub(u32::from(run_length)) + 1;
    let limit = positions.min(u32::from(u8::MAX) + 1);
    let next = u32::from(offset) + 1;
    if next >= limit { 0 } else { next as u8 }
}
