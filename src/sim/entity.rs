//! Spawned entities: coins and predators
//!
//! Entities carry an explicit kind discriminant so collision handling can
//! dispatch without inspecting runtime types. Coins are stationary pickups
//! with a blink phase; predators patrol horizontally and lunge at the
//! player when close.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::state::Viewport;
use super::wave::WaveSurface;

/// Tagged entity discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Coin,
    Predator,
}

/// A collectible reward token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Side length of the square bounding box
    pub size: f32,
    pub collected: bool,
    /// Monotonically increasing blink phase (radians)
    pub phase: f32,
}

impl Coin {
    /// Place a new coin: x uniform across the width (inset by half a
    /// coin), y uniform within the lower band of the viewport.
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, viewport: Viewport) -> Self {
        let x = rng.random_range(0.0..viewport.width - COIN_SIZE) + COIN_SIZE / 2.0;
        let y = rng.random_range(viewport.height * 0.3..viewport.height * 0.9);
        Self {
            id,
            pos: Vec2::new(x, y),
            size: COIN_SIZE,
            collected: false,
            phase: 0.0,
        }
    }

    /// Advance the blink phase. Coins never move.
    pub fn update(&mut self, dt_ms: f32) {
        self.phase += dt_ms * COIN_BLINK_RATE;
    }

    /// Blink alpha in [0.6, 1.0] for the presentation layer
    #[inline]
    pub fn blink(&self) -> f32 {
        0.6 + 0.4 * (self.phase.sin() + 1.0) / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// A hostile entity that crosses the screen and lunges at the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predator {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Travel direction, +1 right / -1 left
    pub facing: f32,
    pub airborne: bool,
    /// Time until the next aggression jump is allowed
    pub jump_cooldown_ms: f32,
    pub size: Vec2,
}

impl Predator {
    /// Enter from a random screen edge, moving inward at fixed speed
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, viewport: Viewport) -> Self {
        let facing = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let x = if facing > 0.0 {
            -PREDATOR_SPAWN_OFFSET
        } else {
            viewport.width + PREDATOR_SPAWN_OFFSET
        };
        let y = rng.random_range(viewport.height * 0.6..viewport.height * 0.9);
        Self {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::new(facing * PREDATOR_SPEED, 0.0),
            facing,
            airborne: false,
            jump_cooldown_ms: 0.0,
            size: Vec2::new(PREDATOR_WIDTH, PREDATOR_HEIGHT),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// One tick of predator behavior: cooldown decay, aggression jump
    /// when the player is close, airborne arc back down to the surface,
    /// and the constant horizontal patrol.
    pub fn update(&mut self, dt_ms: f32, player_center_x: f32, surface: &WaveSurface) {
        self.jump_cooldown_ms -= dt_ms;

        let distance = (self.center().x - player_center_x).abs();
        if distance < AGGRESSION_RADIUS && self.jump_cooldown_ms <= 0.0 && !self.airborne {
            self.vel.y = -PREDATOR_JUMP_IMPULSE;
            self.airborne = true;
            self.jump_cooldown_ms = PREDATOR_JUMP_COOLDOWN_MS;
        }

        if self.airborne {
            self.vel.y += GRAVITY * PREDATOR_GRAVITY_FACTOR;
            self.pos.y += self.vel.y;

            let wave_y = surface.height_at(self.center().x);
            if self.pos.y + self.size.y >= wave_y && self.vel.y >= 0.0 {
                self.pos.y = wave_y - self.size.y;
                self.vel.y = 0.0;
                self.airborne = false;
            }
        }

        self.pos.x += self.vel.x;
    }

    /// Crossed out of the viewport by more than the despawn margin
    #[inline]
    pub fn out_of_bounds(&self, viewport_width: f32) -> bool {
        self.pos.x < -PREDATOR_DESPAWN_MARGIN
            || self.pos.x > viewport_width + PREDATOR_DESPAWN_MARGIN
    }
}
