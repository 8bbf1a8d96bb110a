//! Confetti particle system

use crate::config::ConfettiConfig;
use crate::terminal::Terminal;
use crossterm::style::Color;
use rand::prelude::*;

const GRAVITY: f32 = 18.0;
const DRAG: f32 = 0.6;
const MIN_SPEED: f32 = 10.0;
const MAX_SPEED: f32 = 22.0;
const MIN_LIFE: f32 = 1.5;
const MAX_LIFE: f32 = 2.5;

// Terminal cells are roughly twice as tall as wide.
const ASPECT: f32 = 2.0;

const GLYPHS: [char; 6] = ['*', '•', 'o', '+', '▪', '·'];
const PALETTE: [Color; 7] = [
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::White,
];

struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    ch: char,
    color: Color,
    life: f32,
}

/// All live confetti. Bursts stack: every trigger appends a full volley,
/// with no debounce or deduplication between overlapping triggers.
pub struct Confetti {
    config: ConfettiConfig,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new(config: ConfettiConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
        }
    }

    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }

    pub fn active_count(&self) -> usize {
        self.particles.len()
    }

    /// Launch one volley of `particle_count` particles from the configured
    /// origin, angled within the spread cone around straight up.
    pub fn burst(&mut self, width: u16, height: u16, rng: &mut StdRng) {
        let px = self.config.origin.x * width as f32;
        let py = self.config.origin.y * height as f32;
        let half_cone = (self.config.spread / 2.0).to_radians();

        for _ in 0..self.config.particle_count {
            let angle = rng.gen_range(-half_cone..=half_cone);
            let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
            self.particles.push(Particle {
                x: px,
                y: py,
                vx: angle.sin() * speed * ASPECT,
                vy: -angle.cos() * speed,
                ch: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                life: rng.gen_range(MIN_LIFE..MAX_LIFE),
            });
        }
    }

    /// Advance the simulation by `dt` seconds and cull spent particles.
    pub fn update(&mut self, dt: f32, height: u16) {
        self.particles.retain_mut(|p| {
            p.vy += GRAVITY * dt;
            p.vx *= 1.0 - DRAG * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.life -= dt;
            p.life > 0.0 && p.y < height as f32 + 1.0
        });
    }

    /// Paint live particles over whatever is already in the buffer.
    pub fn draw(&self, term: &mut Terminal) {
        for p in &self.particles {
            let fading = p.life < 0.5;
            term.set(
                p.x.round() as i32,
                p.y.round() as i32,
                if fading { '·' } else { p.ch },
                Some(p.color),
                !fading,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfettiConfig;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn animator_carries_the_fixed_config() {
        let confetti = Confetti::new(ConfettiConfig::default());
        assert_eq!(confetti.config().particle_count, 100);
        assert!((confetti.config().spread - 70.0).abs() < f32::EPSILON);
        assert!((confetti.config().origin.y - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn burst_spawns_exactly_particle_count() {
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        confetti.burst(80, 24, &mut rng);
        assert_eq!(confetti.active_count(), 100);
    }

    #[test]
    fn bursts_stack_without_deduplication() {
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        for _ in 0..3 {
            confetti.burst(80, 24, &mut rng);
        }
        assert_eq!(confetti.active_count(), 300);
    }

    #[test]
    fn particles_launch_from_origin() {
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        confetti.burst(100, 50, &mut rng);
        let expected_x = 0.5f32 * 100.0;
        let expected_y = 0.6f32 * 50.0;
        for p in &confetti.particles {
            assert!((p.x - expected_x).abs() < 1e-4);
            assert!((p.y - expected_y).abs() < 1e-4);
        }
    }

    #[test]
    fn launch_angles_stay_within_spread_cone() {
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        confetti.burst(80, 24, &mut rng);

        let half_cone = (70.0f32 / 2.0).to_radians();
        for p in &confetti.particles {
            // All particles start moving upward.
            assert!(p.vy < 0.0);
            let angle = (p.vx / ASPECT).atan2(-p.vy).abs();
            assert!(angle <= half_cone + 1e-4);
        }
    }

    #[test]
    fn gravity_pulls_particles_down() {
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        confetti.burst(80, 24, &mut rng);

        let before: f32 =
            confetti.particles.iter().map(|p| p.vy).sum::<f32>() / confetti.active_count() as f32;
        confetti.update(0.1, 24);
        let after: f32 =
            confetti.particles.iter().map(|p| p.vy).sum::<f32>() / confetti.active_count() as f32;
        assert!(after > before);
    }

    #[test]
    fn spent_particles_are_culled() {
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        confetti.burst(80, 24, &mut rng);

        // MAX_LIFE is 2.5s, so three seconds outlives every particle.
        for _ in 0..30 {
            confetti.update(0.1, 24);
        }
        assert_eq!(confetti.active_count(), 0);
    }

    #[test]
    fn draw_paints_live_particles() {
        let mut term = Terminal::with_size(80, 24);
        let mut confetti = Confetti::new(ConfettiConfig::default());
        let mut rng = rng();
        confetti.burst(80, 24, &mut rng);
        confetti.draw(&mut term);

        let mut painted = 0;
        for y in 0..24 {
            for x in 0..80 {
                if term.cell(x, y).unwrap().ch != ' ' {
                    painted += 1;
                }
            }
        }
        // Freshly burst particles share the origin cell; at least it is set.
        assert!(painted >= 1);
    }
}
