use std::time::Duration;

/// Normalized launch origin, as fractions of the terminal size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Default for Origin {
    fn default() -> Self {
        // x stays centered; only y is tuned.
        Self { x: 0.5, y: 0.6 }
    }
}

/// Parameters for a single confetti burst.
///
/// Built once at startup and never mutated; every burst, whether auto-fired
/// or key-triggered, reads the same record.
#[derive(Clone, Copy, Debug)]
pub struct ConfettiConfig {
    pub particle_count: usize,
    /// Total launch cone width in degrees, centered on straight up.
    pub spread: f32,
    pub origin: Origin,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin: Origin::default(),
        }
    }
}

/// Delay before the automatic celebration fires after startup.
pub const AUTO_CELEBRATE_DELAY: Duration = Duration::from_millis(500);

/// Runtime options taken from the command line.
#[derive(Clone)]
pub struct AppConfig {
    pub time_step: f32,
    pub seed: Option<u64>,
}
