//! Per-frame animation state.
//!
//! All looping animations live in one value type. [`AnimationState::update`]
//! is a pure step: the same state and time delta always give the same
//! next state.

/// Number of drifting dust particles.
pub const PARTICLE_COUNT: usize = 5;

/// Number of music visualizer bars.
pub const MUSIC_BAR_COUNT: usize = 5;

/// Time step used when the measured delta is unusable.
pub const FALLBACK_DT: f32 = 0.016;

/// Largest accepted time step in seconds.
pub const MAX_DT: f32 = 0.1;

const LAMP_LIMIT_DEG: f32 = 8.0;
const LAMP_SPEED_DEG: f32 = 18.0;
const FAN_SPEED_DEG: f32 = 240.0;
const SECOND_HAND_DEG: f32 = 6.0;
const MINUTE_HAND_DEG: f32 = 0.1;
const PENDULUM_LIMIT_DEG: f32 = 15.0;
const PENDULUM_SPEED_DEG: f32 = 45.0;
const GLOW_RATE: f32 = 3.0;
const SCREEN_WAVE_RATE: f32 = 2.5;
const PHASE_WRAP: f32 = 100.0;
const PANEL_GLOW_RATE: f32 = 4.0;
const PARTICLE_TOP: f32 = 400.0;
const PARTICLE_RESET: f32 = 120.0;

/// Swing direction of a bouncing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swing {
    /// Angle increasing.
    #[default]
    Forward,
    /// Angle decreasing.
    Backward,
}

impl Swing {
    fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Animation variables for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Lamp swing angle in degrees, within ±8.
    pub lamp_angle: f32,
    /// Current lamp swing direction.
    pub lamp_swing: Swing,
    /// Ceiling fan rotation in degrees, `[0, 360]`.
    pub fan_angle: f32,
    /// Second hand sweep in degrees, `[0, 360)`.
    pub clock_second: f32,
    /// Minute hand sweep in degrees, `[0, 360)`.
    pub clock_minute: f32,
    /// Pendulum angle in degrees, within ±15.
    pub pendulum_angle: f32,
    /// Current pendulum direction.
    pub pendulum_swing: Swing,
    /// Phase driving pulsing glows.
    pub glow_phase: f32,
    /// Phase driving the monitor scan lines.
    pub screen_wave: f32,
    /// Vertical position of each dust particle.
    pub particle_y: [f32; PARTICLE_COUNT],
    /// Phase driving the smart panel.
    pub panel_glow: f32,
    /// Normalized music bar heights, `[0.3, 1.0]` once updated.
    pub music_bars: [f32; MUSIC_BAR_COUNT],
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            lamp_angle: 0.0,
            lamp_swing: Swing::Forward,
            fan_angle: 0.0,
            clock_second: 0.0,
            clock_minute: 0.0,
            pendulum_angle: 0.0,
            pendulum_swing: Swing::Forward,
            glow_phase: 0.0,
            screen_wave: 0.0,
            particle_y: [0.0; PARTICLE_COUNT],
            panel_glow: 0.0,
            music_bars: [0.0; MUSIC_BAR_COUNT],
        }
    }
}

/// Replace an unusable time delta with [`FALLBACK_DT`].
///
/// Deltas that are non-positive, larger than [`MAX_DT`] or NaN are
/// treated as a stalled or first frame.
#[must_use]
pub fn effective_dt(dt: f32) -> f32 {
    if dt > 0.0 && dt <= MAX_DT {
        dt
    } else {
        FALLBACK_DT
    }
}

impl AnimationState {
    /// Fresh state at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every animation by `dt` seconds and return the new state.
    #[must_use]
    pub fn update(mut self, dt: f32) -> Self {
        let dt = effective_dt(dt);

        (self.lamp_angle, self.lamp_swing) =
            bounce(self.lamp_angle, self.lamp_swing, LAMP_SPEED_DEG * dt, LAMP_LIMIT_DEG);

        self.fan_angle += FAN_SPEED_DEG * dt;
        if self.fan_angle > 360.0 {
            self.fan_angle -= 360.0;
        }

        self.clock_second = wrap_at(self.clock_second + SECOND_HAND_DEG * dt, 360.0);
        self.clock_minute = wrap_at(self.clock_minute + MINUTE_HAND_DEG * dt, 360.0);

        (self.pendulum_angle, self.pendulum_swing) = bounce(
            self.pendulum_angle,
            self.pendulum_swing,
            PENDULUM_SPEED_DEG * dt,
            PENDULUM_LIMIT_DEG,
        );

        self.glow_phase += GLOW_RATE * dt;
        if self.glow_phase > PHASE_WRAP {
            self.glow_phase -= PHASE_WRAP;
        }
        self.screen_wave += SCREEN_WAVE_RATE * dt;
        if self.screen_wave > PHASE_WRAP {
            self.screen_wave -= PHASE_WRAP;
        }

        for (i, y) in self.particle_y.iter_mut().enumerate() {
            *y += dt * (15.0 + 5.0 * i as f32);
            if *y > PARTICLE_TOP {
                *y = PARTICLE_RESET;
            }
        }

        self.panel_glow += PANEL_GLOW_RATE * dt;
        for (i, bar) in self.music_bars.iter_mut().enumerate() {
            *bar = 0.3 + 0.7 * (self.glow_phase * 3.0 + i as f32 * 1.2).sin().abs();
        }

        self
    }

    /// Advance `frames` times by `dt`.
    #[must_use]
    pub fn advance(self, frames: u32, dt: f32) -> Self {
        (0..frames).fold(self, |state, _| state.update(dt))
    }
}

fn bounce(angle: f32, swing: Swing, delta: f32, limit: f32) -> (f32, Swing) {
    let next = angle + swing.sign() * delta;
    if next > limit {
        (limit, Swing::Backward)
    } else if next < -limit {
        (-limit, Swing::Forward)
    } else {
        (next, swing)
    }
}

fn wrap_at(value: f32, period: f32) -> f32 {
    if value >= period {
        value - period
    } else {
        value
    }
}
