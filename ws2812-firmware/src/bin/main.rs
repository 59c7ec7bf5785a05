// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use ws2812_bitbang::ClockSchedule;
use ws2812_bitbang::config::{ActiveSchedule, CPU_CLOCK, LED_COUNT, LED_GPIO_PIN};
use ws2812_bitbang::tasks::strip_chase_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Startet die CPU mit dem Takt, für den der Zyklen-Schedule gebaut wurde,
/// startet die Embassy Runtime und spawnt den Strip-Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // CPU-Takt MUSS zum Schedule passen, sonst stimmen alle Pulsbreiten nicht
    let config = esp_hal::Config::default().with_cpu_clock(CPU_CLOCK);
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "WS2812 bit-bang: {} LEDs on GPIO{}, schedule for {} Hz",
        LED_COUNT,
        LED_GPIO_PIN,
        <ActiveSchedule as ClockSchedule>::CPU_HZ
    );

    // Spawn Strip Task (GPIO8 = LED_GPIO_PIN)
    spawner.spawn(strip_chase_task(peripherals.GPIO8)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Strip-Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
