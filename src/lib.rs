//! Wavesurf - simulation core for a wave-surfing arcade game
//!
//! A player rides a procedurally animated wave, collects coins and dodges
//! predators. This crate is the headless game core only: it owns all
//! simulation state and exposes a read-only snapshot for a presentation
//! layer to render. It never draws, reads input devices, or touches a
//! clock; the host feeds it per-tick intents and time deltas.
//!
//! Core module:
//! - `sim`: Deterministic simulation (wave surface, player physics,
//!   spawning, collisions, game lifecycle)

pub mod sim;

pub use sim::{GameEvent, GamePhase, GameSession, RenderSnapshot, TickInput, Viewport, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation step the per-step physics constants are tuned
    /// for. Physics is fixed-step: `dt_ms` scales only time-denominated
    /// quantities (wave phase, blink phase, cooldowns), never velocities.
    pub const SIM_STEP_MS: f32 = 16.0;

    /// Gravity applied to the player each step (px/step²)
    pub const GRAVITY: f32 = 0.5;

    /// Player defaults (square body)
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_MAX_SPEED: f32 = 8.0;
    /// Horizontal acceleration per step while airborne
    pub const PLAYER_AIR_ACCEL: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = 15.0;
    /// Horizontal velocity damping per step
    pub const GROUND_FRICTION: f32 = 0.9;
    pub const AIR_FRICTION: f32 = 0.99;
    /// Scale applied to the raw surface slope when leaning the board
    pub const TILT_DAMPING: f32 = 0.5;
    /// How far below the viewport the player may fall before the run ends
    pub const FALL_MARGIN: f32 = 100.0;

    /// Wave surface sampling
    pub const WAVE_SPACING: f32 = 20.0;
    /// Extra samples generated past the right viewport edge
    pub const WAVE_MARGIN_SAMPLES: usize = 10;
    /// Baseline height as a fraction of viewport height
    pub const WAVE_BASELINE_FACTOR: f32 = 0.7;
    /// Spatial frequency of both sine components (radians per px)
    pub const WAVE_FREQUENCY: f32 = 0.02;
    /// Phase advance per millisecond
    pub const WAVE_TIME_SCALE: f32 = 0.001;
    pub const WAVE_PRIMARY_AMPLITUDE: f32 = 30.0;
    pub const WAVE_SECONDARY_AMPLITUDE: f32 = 20.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 40.0;
    pub const COIN_SPAWN_INTERVAL_MS: f32 = 1500.0;
    /// Blink phase advance per millisecond
    pub const COIN_BLINK_RATE: f32 = 0.003;
    pub const COIN_SCORE: u32 = 10;

    /// Predator defaults
    pub const PREDATOR_WIDTH: f32 = 80.0;
    pub const PREDATOR_HEIGHT: f32 = 40.0;
    pub const PREDATOR_SPEED: f32 = 3.0;
    pub const PREDATOR_SPAWN_INTERVAL_MS: f32 = 5000.0;
    /// Spawn x offset outside the viewport edge
    pub const PREDATOR_SPAWN_OFFSET: f32 = 60.0;
    /// Removed once this far past either viewport edge
    pub const PREDATOR_DESPAWN_MARGIN: f32 = 150.0;
    /// Horizontal center distance that triggers an aggression jump
    pub const AGGRESSION_RADIUS: f32 = 200.0;
    pub const PREDATOR_JUMP_IMPULSE: f32 = 12.0;
    pub const PREDATOR_JUMP_COOLDOWN_MS: f32 = 3000.0;
    /// Predators fall slightly slower than the player
    pub const PREDATOR_GRAVITY_FACTOR: f32 = 0.8;

    /// Hitbox scale factors (fraction of summed half-widths)
    pub const COIN_HIT_FACTOR: f32 = 0.8;
    pub const PREDATOR_HIT_FACTOR: f32 = 0.6;
}

/// Linear interpolation between `a` and `b` at parameter `t` in [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
