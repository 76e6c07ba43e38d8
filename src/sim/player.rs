//! Player physics against the wave surface
//!
//! The player is a kinematic square body: gravity plus per-step friction,
//! no rigid-body solver. Landing snaps the body onto the surface and
//! derives a cosmetic board tilt from the local slope.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::tick::TickInput;
use super::wave::WaveSurface;

/// Kinematic state of the controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side length of the square bounding box
    pub size: f32,
    /// Resting on the surface this tick
    pub grounded: bool,
    /// Cosmetic board lean derived from the surface slope (radians)
    pub tilt_angle: f32,
    /// Last horizontal input direction, +1 right / -1 left
    pub facing: f32,
}

impl PlayerBody {
    /// Spawn centered in the viewport, airborne and at rest
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                viewport_width / 2.0 - PLAYER_SIZE / 2.0,
                viewport_height / 2.0,
            ),
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            grounded: false,
            tilt_angle: 0.0,
            facing: 1.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Apply one tick of movement intent.
    ///
    /// Grounded movement sets the horizontal velocity directly; airborne
    /// movement only nudges it, so jumps commit to their momentum. A jump
    /// is honored only while grounded.
    pub fn apply_input(&mut self, input: &TickInput) {
        if input.move_left {
            self.facing = -1.0;
            if self.grounded {
                self.vel.x = -PLAYER_MAX_SPEED;
            } else {
                self.vel.x = (self.vel.x - PLAYER_AIR_ACCEL).max(-PLAYER_MAX_SPEED);
            }
        }
        if input.move_right {
            self.facing = 1.0;
            if self.grounded {
                self.vel.x = PLAYER_MAX_SPEED;
            } else {
                self.vel.x = (self.vel.x + PLAYER_AIR_ACCEL).min(PLAYER_MAX_SPEED);
            }
        }
        if input.jump && self.grounded {
            self.vel.y = -JUMP_IMPULSE;
            self.grounded = false;
        }
    }

    /// One fixed step of gravity, friction and position advance
    pub fn integrate(&mut self) {
        self.vel.y += GRAVITY;

        if self.grounded {
            self.vel.x *= GROUND_FRICTION;
        } else {
            self.vel.x *= AIR_FRICTION;
        }

        self.pos += self.vel;
    }

    /// Land on the surface if the lower edge has reached it while moving
    /// downward: snap onto the surface, kill vertical velocity and lean
    /// the board along the local slope.
    pub fn resolve_ground(&mut self, surface: &WaveSurface) {
        let wave_y = surface.height_at(self.center_x());

        if self.bottom() >= wave_y && self.vel.y >= 0.0 {
            self.pos.y = wave_y - self.size;
            self.vel.y = 0.0;
            self.grounded = true;

            let left = surface.height_at(self.pos.x);
            let right = surface.height_at(self.pos.x + self.size);
            self.tilt_angle = (right - left).atan2(self.size) * TILT_DAMPING;
        } else {
            self.grounded = false;
        }
    }

    /// Keep the body horizontally inside the viewport (never vertically)
    pub fn clamp_to_viewport(&mut self, viewport_width: f32) {
        self.pos.x = self.pos.x.clamp(0.0, viewport_width - self.size);
    }

    /// Fallen through the world: below the viewport by more than the margin
    #[inline]
    pub fn has_fallen(&self, viewport_height: f32) -> bool {
        self.pos.y > viewport_height + FALL_MARGIN
    }
}
