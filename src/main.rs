use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dyebox::solver::{self, diagnostics};
use dyebox::{config, grid_size_for, render_into, RenderConfig, SimState};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Frames between periodic diagnostics lines.
const DIAG_INTERVAL: u64 = 300;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cfg = config::load();
    let params = cfg.solver_params();
    let mut injector = cfg.injector();
    let display = &cfg.display;
    let grid_for = |w: usize, h: usize| grid_size_for(w, h, display.pixels_per_cell, display.max_grid);

    let (mut w, mut h) = (display.width, display.height);
    let mut state = SimState::new(grid_for(w, h));
    let mut render_cfg = RenderConfig::fit(w, h, state.n);

    let mut window = Window::new(
        "dyebox",
        w,
        h,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(display.target_fps);

    // Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))?;

    log::info!(
        "grid {}x{}, dt={}, visc={}, diff={}, sweeps={}/{}",
        state.n, state.n, params.dt, params.visc, params.diff, params.diffuse_iter, params.project_iter
    );

    let mut framebuf: Vec<u32> = Vec::new();
    let mut frame = 0u64;
    let mut frame_count = 0u32;
    let mut last_fps_time = Instant::now();

    while window.is_open() && running.load(Ordering::SeqCst) {
        // --- Keyboard handling ---
        if window.is_key_pressed(Key::Escape, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            state.clear();
            log::info!("cleared");
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            let on = injector.toggle_rainbow();
            log::info!("rainbow dye {}", if on { "on" } else { "off" });
        }

        // --- Check for window resize ---
        let (new_w, new_h) = window.get_size();
        if (new_w, new_h) != (w, h) && new_w > 0 && new_h > 0 {
            w = new_w;
            h = new_h;
            let n = grid_for(w, h);
            if n != state.n {
                state.resize(n);
                injector.pointer_up();
            }
            render_cfg = RenderConfig::fit(w, h, state.n);
        }

        // --- Pointer ---
        if window.get_mouse_down(MouseButton::Left) {
            if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Discard) {
                injector.pointer_move(&mut state, mx as f64, my as f64, w, h);
            }
        } else if injector.is_dragging() {
            injector.pointer_up();
        }

        solver::fluid_step(&mut state, &params);

        if !diagnostics::all_finite(&state) {
            log::warn!("non-finite values in the fluid; clearing");
            state.clear();
        }

        frame += 1;
        if frame % DIAG_INTERVAL == 0 && log::log_enabled!(log::Level::Debug) {
            log::debug!("frame {frame}: {}", diagnostics::summary(&state));
        }

        render_into(&mut framebuf, &state, &render_cfg);
        window.update_with_buffer(&framebuf, render_cfg.frame_width, render_cfg.frame_height)?;

        frame_count += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            window.set_title(&format!("dyebox - {frame_count} fps"));
            frame_count = 0;
            last_fps_time = now;
        }
    }

    log::info!("exiting after {frame} frames");
    Ok(())
}
