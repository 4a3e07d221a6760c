/// Whirl Terminal - Interactive 3D Fan Simulator
///
/// Renders a procedurally generated fan in the terminal.
/// Controls:
///   - Up/Down: Adjust fan speed
///   - Space: Toggle oscillation
///   - O: Turn fan on/off
///   - L: Cycle lighting modes
///   - 1-5: Switch fan types
///   - A/D or Left/Right: Orbit the view
///   - Q/ESC: Quit
use anyhow::Context;
use whirl_core::Archetype;
use whirl_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Whirl 3D Fan Simulator");
    println!("======================");
    println!("Controls:");
    println!("  Up/Down Arrows  : Increase/Decrease Speed");
    println!("  Space Bar       : Toggle Oscillation");
    println!("  O               : Turn Fan On/Off");
    println!("  L               : Cycle Lighting Modes");
    println!("  1-5             : Switch Fan Types");
    println!("                    1: Ceiling  2: Table  3: Tower");
    println!("                    4: Industrial  5: Desk");
    println!("  A/D, Left/Right : Orbit View");
    println!("  Q/ESC           : Quit");
    println!();
    println!("Starting terminal renderer...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(Archetype::Ceiling).context("failed to set up terminal")?;
    app.run().context("renderer failed")?;

    println!("Thanks for using the Whirl fan simulator!");
    Ok(())
}
