//! Spawn cooldown tracking
//!
//! One timer per entity kind. The scheduler never looks at a real clock;
//! "now" is the session's accumulated tick clock, so spawn cadence replays
//! deterministically with the tick stream.

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;

/// Per-kind cooldown tracker deciding when a new entity may be created
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnScheduler {
    last_coin_ms: f32,
    last_predator_ms: f32,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both timers (session start)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true and records `now_ms` exactly when the kind's interval
    /// has elapsed; otherwise false with no side effect. Each kind's
    /// cooldown is independent.
    pub fn try_spawn(&mut self, kind: EntityKind, now_ms: f32, interval_ms: f32) -> bool {
        let last = match kind {
            EntityKind::Coin => &mut self.last_coin_ms,
            EntityKind::Predator => &mut self.last_predator_ms,
        };

        if now_ms - *last > interval_ms {
            *last = now_ms;
            true
        } else {
            false
        }
    }
}
