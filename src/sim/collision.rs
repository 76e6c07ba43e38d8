//! Collision detection between the player and spawned entities
//!
//! All checks are circle tests on the bounding-box centers: a hit occurs
//! when the center distance drops below the sum of the half-widths scaled
//! by a per-kind tightness factor. The scaled radius forgives box corners
//! and keeps near misses from registering.

use crate::consts::*;

use super::entity::{Coin, Predator};
use super::player::PlayerBody;

/// True when the player overlaps a coin closely enough to collect it
pub fn coin_hits_player(coin: &Coin, player: &PlayerBody) -> bool {
    let distance = coin.center().distance(player.center());
    distance < (coin.size / 2.0 + player.size / 2.0) * COIN_HIT_FACTOR
}

/// True when a predator catches the player. Tighter than coin pickup so
/// grazing past a predator stays survivable.
pub fn predator_hits_player(predator: &Predator, player: &PlayerBody) -> bool {
    let distance = predator.center().distance(player.center());
    distance < (predator.size.x / 2.0 + player.size / 2.0) * PREDATOR_HIT_FACTOR
}
