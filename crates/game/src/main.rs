//! heliscape - a helicopter over a scattered landscape, driven as a headless
//! scripted flight.
//!
//! The interactive windowing shell (context setup, shaders, real key events)
//! lives outside this workspace; it drives exactly the same `tick`/`render`
//! entry points this binary does. Here a scripted key sequence flies one
//! demo circuit and the draw stream goes to a recorder instead of a GPU.

mod config;
mod flight;
mod scene;
mod state;
mod supply;
mod update;

use anyhow::{Context, Result};
use engine_core::MatrixStack;
use input::Key;
use log::info;
use renderer::DrawRecorder;

use config::SimConfig;
use state::SimState;

/// Frames to simulate (15 seconds at the 60 Hz base step).
const DEMO_FRAMES: u64 = 900;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                      heliscape                       ║");
    println!("╠══════════════════════════════════════════════════════╣");
    println!("║  CONTROLS (interactive shell):                       ║");
    println!("║    Up/Down    - Climb / Descend                      ║");
    println!("║    Left       - Accelerate along the ring            ║");
    println!("║    Space      - Drop supply crate                    ║");
    println!("║    W / S      - Wireframe / Solid                    ║");
    println!("║    P, + , -   - Pause, speed up, slow down           ║");
    println!("║    1-5        - Camera (axono/front/top/side/chase)  ║");
    println!("║    B          - Toggle buildings                     ║");
    println!("╚══════════════════════════════════════════════════════╝");

    let config = SimConfig::load();
    info!(
        "seed {} | {} trees, {} buildings, {} clouds | wind {}",
        config.seed,
        config.tree_count,
        config.building_count,
        config.cloud_count,
        config.wind_strength
    );

    let mut state = SimState::from_config(&config).context("scattering the world")?;
    let mut stack = MatrixStack::new();
    let mut recorder = DrawRecorder::new();
    let mut total_draws: usize = 0;

    for frame in 0..DEMO_FRAMES {
        script_events(&mut state, frame);
        update::tick(&mut state);

        recorder.clear();
        scene::render(&state, &mut stack, &mut recorder);
        total_draws += recorder.draw_count();

        if frame % 60 == 0 {
            let heli = &state.helicopter;
            info!(
                "t={:5.1}s alt={:5.2} speed={:4.2} heading={:5.1}° crates={} draws={}",
                state.clock.elapsed_seconds(),
                heli.position.y,
                heli.forward_speed,
                heli.heading(),
                state.crates.len(),
                recorder.draw_count()
            );
        }
    }

    let heli = &state.helicopter;
    info!(
        "demo complete: {} frames, {} total draw calls, final pose ({:.1}, {:.1}, {:.1}), {}",
        DEMO_FRAMES,
        total_draws,
        heli.position.x,
        heli.position.y,
        heli.position.z,
        if heli.airborne { "airborne" } else { "grounded" }
    );
    Ok(())
}

/// The demo's key script: take off, switch to the chase camera, cruise,
/// drop two crates, slow down and land.
fn script_events(state: &mut SimState, frame: u64) {
    let input = &mut state.input;
    match frame {
        10 => input.key_down(Key::S),
        11 => input.key_up(Key::S),
        30 => input.key_down(Key::ArrowUp),
        90 => input.key_down(Key::ArrowLeft),
        150 => input.key_up(Key::ArrowUp),
        180 => input.key_down(Key::Digit5),
        181 => input.key_up(Key::Digit5),
        300 | 420 => input.key_down(Key::Space),
        301 | 421 => input.key_up(Key::Space),
        540 => input.key_up(Key::ArrowLeft),
        600 => input.key_down(Key::ArrowDown),
        870 => input.key_up(Key::ArrowDown),
        _ => {}
    }
}
