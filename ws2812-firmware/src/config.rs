// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use esp_hal::clock::CpuClock;

// ============================================================================
// Takt-Konfiguration
// ============================================================================

/// CPU-Takt, mit dem esp_hal::init() die CPU startet
#[cfg(feature = "cpu-80mhz")]
pub const CPU_CLOCK: CpuClock = CpuClock::_80MHz;

/// Zyklen-Schedule passend zu `CPU_CLOCK`
#[cfg(feature = "cpu-80mhz")]
pub type ActiveSchedule = ws2812_core::Mhz80;

/// CPU-Takt, mit dem esp_hal::init() die CPU startet
#[cfg(feature = "cpu-160mhz")]
pub const CPU_CLOCK: CpuClock = CpuClock::_160MHz;

/// Zyklen-Schedule passend zu `CPU_CLOCK`
#[cfg(feature = "cpu-160mhz")]
pub type ActiveSchedule = ws2812_core::Mhz160;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin der WS2812 Datenleitung (On-Board LED des ESP32-C6 DevKit)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Strip
/// Wird zur Build-Zeit aus LED_COUNT geladen (build.rs, Default 12)
pub const LED_COUNT: u32 = parse_u32(env!("LED_COUNT"));

/// Länge des farbigen Blocks im Lauflicht
pub const CHASE_RUN_LENGTH: u8 = 3;

/// Helligkeits-Level für das Lauflicht (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// Pause zwischen zwei Frames in Millisekunden
pub const FRAME_INTERVAL_MS: u64 = 100;

/// Dezimal-Parser für Werte aus build.rs (dort bereits validiert)
const fn parse_u32(text: &str) -> u32 {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "LED_COUNT is empty");
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "LED_COUNT is not a decimal number");
        value = match value.checked_mul(10) {
            Some(v) => v,
            None => panic!("LED_COUNT overflows u32"),
        };
        value = match value.checked_add((digit - b'0') as u32) {
            Some(v) => v,
            None => panic!("LED_COUNT overflows u32"),
        };
        i += 1;
    }
    value
}
