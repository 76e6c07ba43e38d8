//! Fixed timestep simulation tick
//!
//! Core loop that advances a session deterministically. Physics constants
//! are per-step values applied once per tick; `dt_ms` only feeds the
//! time-denominated parts (wave phase, blink phase, cooldowns, the spawn
//! clock), so the tick stream fully determines the outcome.

use crate::consts::*;

use super::collision::{coin_hits_player, predator_hits_player};
use super::entity::{Coin, EntityKind, Predator};
use super::state::{GamePhase, GameSession};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Advance the session by one tick of `dt_ms` milliseconds.
///
/// No-op outside the Playing phase. A mid-tick game over ends the tick
/// immediately; further calls are harmless.
pub fn tick(session: &mut GameSession, input: &TickInput, dt_ms: f32) {
    if session.phase != GamePhase::Playing {
        return;
    }

    session.clock_ms += dt_ms;
    session.wave.advance(dt_ms);

    session.player.apply_input(input);
    session.player.integrate();
    // Past the fall margin the surface no longer catches the body; the
    // run ends at the bottom of this tick.
    let fallen = session.player.has_fallen(session.viewport.height);
    if !fallen {
        session.player.resolve_ground(&session.wave);
    }
    session.player.clamp_to_viewport(session.viewport.width);

    spawn_entities(session);

    for coin in &mut session.coins {
        coin.update(dt_ms);
    }
    let player_center_x = session.player.center_x();
    for predator in &mut session.predators {
        predator.update(dt_ms, player_center_x, &session.wave);
    }

    collect_coins(session);
    session.coins.retain(|c| !c.collected);

    if let Some(hit) = session
        .predators
        .iter()
        .position(|p| predator_hits_player(p, &session.player))
    {
        session.predators.remove(hit);
        session.game_over();
        return;
    }

    let width = session.viewport.width;
    session.predators.retain(|p| !p.out_of_bounds(width));

    if fallen {
        session.game_over();
    }
}

/// Run both kind cooldowns against the session clock, coin first,
/// materializing whatever is due via the session RNG.
fn spawn_entities(session: &mut GameSession) {
    if session
        .scheduler
        .try_spawn(EntityKind::Coin, session.clock_ms, COIN_SPAWN_INTERVAL_MS)
    {
        let id = session.next_entity_id();
        let coin = Coin::spawn(id, &mut session.rng, session.viewport);
        session.coins.push(coin);
    }

    if session.scheduler.try_spawn(
        EntityKind::Predator,
        session.clock_ms,
        PREDATOR_SPAWN_INTERVAL_MS,
    ) {
        let id = session.next_entity_id();
        let predator = Predator::spawn(id, &mut session.rng, session.viewport);
        session.predators.push(predator);
    }
}

/// Mark every touched coin collected, then award score once per pickup.
/// Marking before scoring keeps a coin from paying twice no matter how
/// often it overlaps the player.
fn collect_coins(session: &mut GameSession) {
    let mut picked_up = 0u32;
    for coin in &mut session.coins {
        if !coin.collected && coin_hits_player(coin, &session.player) {
            coin.collected = true;
            picked_up += 1;
        }
    }
    for _ in 0..picked_up {
        session.add_score(COIN_SCORE);
    }
}
