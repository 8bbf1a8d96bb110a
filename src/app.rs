//! Initialization and render loop

use crate::confetti::Confetti;
use crate::config::{AppConfig, ConfettiConfig, AUTO_CELEBRATE_DELAY};
use crate::message::MessagePanel;
use crate::terminal::Terminal;
use crossterm::event::KeyCode;
use rand::prelude::*;
use std::io;
use std::time::Instant;

/// Run the celebration: show the banner once, auto-fire one confetti burst
/// after the configured delay, then keep answering the celebrate key until
/// the user quits.
pub fn run(config: AppConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let mut term = Terminal::new(true)?;
    term.clear_screen()?;

    let (mut w, mut h) = term.size();
    let mut panel = MessagePanel::new(w, h);
    let mut confetti = Confetti::new(ConfettiConfig::default());

    let started = Instant::now();
    let mut auto_fired = false;

    loop {
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or((w, h));
        if new_w != w || new_h != h {
            w = new_w;
            h = new_h;
            term.resize(w, h);
            term.clear_screen()?;
            panel = MessagePanel::new(w, h);
        }

        if let Some((code, _mods)) = term.check_key()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') | KeyCode::Enter | KeyCode::Char(' ') => {
                    // Every press fires another volley; overlapping bursts
                    // simply stack.
                    confetti.burst(w, h, &mut rng);
                }
                _ => {}
            }
        }

        // One-shot auto celebration, never before the delay has elapsed.
        if !auto_fired && started.elapsed() >= AUTO_CELEBRATE_DELAY {
            confetti.burst(w, h, &mut rng);
            auto_fired = true;
        }

        // Guard against zero-size terminal
        if w == 0 || h == 0 {
            term.sleep(0.1);
            continue;
        }

        confetti.update(config.time_step, h);

        term.clear();
        panel.draw(&mut term);
        confetti.draw(&mut term);
        term.present()?;
        term.sleep(config.time_step);
    }

    Ok(())
}
