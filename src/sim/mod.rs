//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by spawn order / entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{coin_hits_player, predator_hits_player};
pub use entity::{Coin, EntityKind, Predator};
pub use player::PlayerBody;
pub use spawn::SpawnScheduler;
pub use state::{
    CoinView, GameEvent, GamePhase, GameSession, PlayerView, PredatorView, RenderSnapshot,
    Viewport,
};
pub use tick::{TickInput, tick};
pub use wave::WaveSurface;
