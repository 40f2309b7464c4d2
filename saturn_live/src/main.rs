//! saturn_live — interactive entry point.

use saturn_live::app::{run, AppConfig};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Saturn Live — Gesture-Controlled Particle Planet      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Mode: keyboard simulation (hold O=open hand, C=fist, H=half)");
    println!("  Camera: arrows orbit, +/- zoom.  B toggles HUD, Q quits.");
    println!();
    println!("  Opening visualizer window…");
    println!();

    if let Err(e) = run(AppConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
