//! Session state, lifecycle and the render snapshot
//!
//! All state that must be persisted for replay/determinism lives here.
//! The session is an explicit handle owned by the host; there is no
//! global singleton. The host observes the simulation through drained
//! events and read-only snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Coin, Predator};
use super::player::PlayerBody;
use super::spawn::SpawnScheduler;
use super::wave::WaveSurface;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session created or ended on the start screen, not yet ticking
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Notifications pushed to the host, drained via [`GameSession::drain_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run started (also fired on restart)
    GameStart,
    /// Score changed; carries the new total
    ScoreUpdate(u32),
    /// The run ended
    GameOver,
}

/// Simulation area in pixels, origin top-left, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Construct a viewport; rejects non-positive or non-finite dimensions
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn-placement RNG, advanced only by entity spawns
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u32,
    /// Accumulated tick clock in milliseconds; the spawn scheduler's "now"
    pub clock_ms: f32,
    pub player: PlayerBody,
    pub wave: WaveSurface,
    /// Live coins, ordered by spawn (id ascending)
    pub coins: Vec<Coin>,
    /// Live predators, ordered by spawn (id ascending)
    pub predators: Vec<Predator>,
    pub scheduler: SpawnScheduler,
    /// Pending notifications, drained by the host
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameSession {
    /// Create an idle session with the given seed
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            phase: GamePhase::Idle,
            score: 0,
            clock_ms: 0.0,
            player: PlayerBody::new(viewport.width, viewport.height),
            wave: WaveSurface::new(viewport),
            coins: Vec::new(),
            predators: Vec::new(),
            scheduler: SpawnScheduler::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Begin a run from any phase. Clears score and entity pools, resets
    /// the spawn scheduler and clock, re-centers the player and restarts
    /// the wave animation. Emits `GameStart` and a zeroed `ScoreUpdate`.
    pub fn start(&mut self) {
        self.score = 0;
        self.clock_ms = 0.0;
        self.coins.clear();
        self.predators.clear();
        self.scheduler.reset();
        self.player = PlayerBody::new(self.viewport.width, self.viewport.height);
        self.wave.initialize(self.viewport);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::GameStart);
        self.events.push(GameEvent::ScoreUpdate(0));
    }

    /// Restart after a run ended; identical to [`GameSession::start`],
    /// kept as a separate entry point for host reset requests.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Adopt a new viewport between ticks. Invalid dimensions are
    /// rejected and the current surface is kept. A valid resize fully
    /// reinitializes the wave, restarting its animation.
    pub fn resize(&mut self, width: f32, height: f32) {
        let Some(viewport) = Viewport::new(width, height) else {
            log::warn!("ignoring resize to invalid dimensions {width}x{height}");
            return;
        };

        self.viewport = viewport;
        self.wave.initialize(viewport);
    }

    /// End the run: Playing -> GameOver, emitting `GameOver` once
    pub(super) fn game_over(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
        }
    }

    /// Add to the score and notify the host of the new total
    pub(super) fn add_score(&mut self, points: u32) {
        self.score += points;
        self.events.push(GameEvent::ScoreUpdate(self.score));
    }

    /// Allocate a new entity ID
    pub(super) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view of everything the presentation layer needs
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase,
            score: self.score,
            viewport: self.viewport,
            wave_samples: self.wave.samples().to_vec(),
            player: PlayerView {
                pos: self.player.pos,
                size: self.player.size,
                tilt_angle: self.player.tilt_angle,
                facing: self.player.facing,
                grounded: self.player.grounded,
            },
            coins: self
                .coins
                .iter()
                .filter(|c| !c.collected)
                .map(|c| CoinView {
                    pos: c.pos,
                    size: c.size,
                    phase: c.phase,
                    blink: c.blink(),
                })
                .collect(),
            predators: self
                .predators
                .iter()
                .map(|p| PredatorView {
                    pos: p.pos,
                    size: p.size,
                    facing: p.facing,
                    airborne: p.airborne,
                })
                .collect(),
        }
    }
}

/// Player pose for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: f32,
    pub tilt_angle: f32,
    pub facing: f32,
    pub grounded: bool,
}

/// Coin pose for rendering, blink already evaluated from the phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoinView {
    pub pos: Vec2,
    pub size: f32,
    pub phase: f32,
    pub blink: f32,
}

/// Predator pose for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredatorView {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: f32,
    pub airborne: bool,
}

/// Frame-ready copy of the visible simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub viewport: Viewport,
    /// Surface polyline, x ascending
    pub wave_samples: Vec<Vec2>,
    pub player: PlayerView,
    pub coins: Vec<CoinView>,
    pub predators: Vec<PredatorView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn session() -> GameSession {
        GameSession::new(Viewport::new(800.0, 600.0).unwrap(), 42)
    }

    #[test]
    fn test_viewport_rejects_degenerate_dimensions() {
        assert!(Viewport::new(800.0, 600.0).is_some());
        assert!(Viewport::new(0.0, 600.0).is_none());
        assert!(Viewport::new(800.0, -1.0).is_none());
        assert!(Viewport::new(f32::NAN, 600.0).is_none());
        assert!(Viewport::new(800.0, f32::INFINITY).is_none());
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let s = session();
        assert_eq!(s.phase, GamePhase::Idle);
        assert_eq!(s.score, 0);
        assert!(s.coins.is_empty());
        assert!(s.predators.is_empty());
        assert_eq!(s.clock_ms, 0.0);
    }

    #[test]
    fn test_start_emits_events_and_resets() {
        let mut s = session();
        s.score = 500;
        s.clock_ms = 9999.0;
        s.phase = GamePhase::GameOver;

        s.start();

        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.score, 0);
        assert_eq!(s.clock_ms, 0.0);
        assert_eq!(
            s.drain_events(),
            vec![GameEvent::GameStart, GameEvent::ScoreUpdate(0)]
        );

        // Player back at the spawn pose
        assert_eq!(s.player.pos, Vec2::new(380.0, 300.0));
        assert_eq!(s.player.vel, Vec2::ZERO);
        assert!(!s.player.grounded);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut s = session();
        s.start();
        assert_eq!(s.drain_events().len(), 2);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_game_over_only_from_playing() {
        let mut s = session();

        // Idle: nothing happens
        s.game_over();
        assert_eq!(s.phase, GamePhase::Idle);
        assert!(s.drain_events().is_empty());

        s.start();
        s.drain_events();
        s.game_over();
        assert_eq!(s.phase, GamePhase::GameOver);
        assert_eq!(s.drain_events(), vec![GameEvent::GameOver]);

        // Already over: no duplicate event
        s.game_over();
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_add_score_reports_running_total() {
        let mut s = session();
        s.start();
        s.drain_events();

        s.add_score(COIN_SCORE);
        s.add_score(COIN_SCORE);
        assert_eq!(s.score, 20);
        assert_eq!(
            s.drain_events(),
            vec![GameEvent::ScoreUpdate(10), GameEvent::ScoreUpdate(20)]
        );
    }

    #[test]
    fn test_entity_ids_are_monotonic() {
        let mut s = session();
        let a = s.next_entity_id();
        let b = s.next_entity_id();
        let c = s.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_resize_rejects_invalid_and_keeps_surface() {
        let mut s = session();
        s.wave.advance(500.0);
        let before = s.wave.samples().to_vec();

        s.resize(0.0, 600.0);
        s.resize(f32::NAN, 600.0);
        assert_eq!(s.viewport, Viewport::new(800.0, 600.0).unwrap());
        assert_eq!(s.wave.samples(), &before[..]);
    }

    #[test]
    fn test_resize_reinitializes_wave() {
        let mut s = session();
        s.wave.advance(500.0);

        s.resize(1024.0, 768.0);
        assert_eq!(s.viewport, Viewport::new(1024.0, 768.0).unwrap());
        assert_eq!(s.wave.baseline(), 768.0 * WAVE_BASELINE_FACTOR);
        assert!(s.wave.samples().iter().all(|p| p.y == s.wave.baseline()));
    }

    #[test]
    fn test_snapshot_skips_collected_coins() {
        let mut s = session();
        s.start();

        let mut coin = Coin::spawn(s.next_entity_id(), &mut s.rng, s.viewport);
        coin.collected = true;
        s.coins.push(coin);
        let coin = Coin::spawn(s.next_entity_id(), &mut s.rng, s.viewport);
        s.coins.push(coin);

        let snap = s.snapshot();
        assert_eq!(snap.coins.len(), 1);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.wave_samples.len(), s.wave.samples().len());
    }
}
