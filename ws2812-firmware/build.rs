// Build-Script: Wird vor dem Kompilieren ausgeführt
// Reicht die Strip-Länge an den Compiler weiter und konfiguriert den Linker

/// Strip-Länge, wenn weder .env noch Environment etwas vorgeben
const DEFAULT_LED_COUNT: &str = "12";

fn main() {
    // Lade .env file für die Strip-Konfiguration
    // Fehlt die Datei, gelten Environment-Variablen bzw. Defaults
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env file not loaded ({e}), using environment/defaults");
    }

    // LED_COUNT wird zur Compile-Zeit eingebacken; ungültige Werte
    // brechen den Build ab statt zur Laufzeit falsch zu rendern
    let led_count = std::env::var("LED_COUNT").unwrap_or_else(|_| DEFAULT_LED_COUNT.into());
    if let Err(e) = led_count.trim().parse::<u32>() {
        panic!("LED_COUNT must be an unsigned integer, got {led_count:?}: {e}");
    }
    println!("cargo:rustc-env=LED_COUNT={}", led_count.trim());
    println!("cargo:rerun-if-env-changed=LED_COUNT");
    println!("cargo:rerun-if-changed=.env");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // 1. defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name

        if kind.as_str() != "undefined-symbol" {
            std::process::exit(1);
        }

        match what.as_str() {
            what if what.starts_with("_defmt_") => {
                eprintln!();
                eprintln!("💡 `defmt` not found - make sure `defmt.x` is added as a linker script");
                eprintln!();
            }
            "_stack_start" => {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            }
            what if what.starts_with("esp_rtos_") => {
                eprintln!();
                eprintln!("💡 `esp-rtos` was not started - call `esp_rtos::start()` in main");
                eprintln!();
            }
            _ => (),
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => println!("cargo:warning=linker hints disabled: {e}"),
    }
}
