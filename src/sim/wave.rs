//! Procedurally animated wave surface
//!
//! The surface is a height field sampled at fixed horizontal spacing.
//! Each sample's height is the sum of two sine components at different
//! amplitude/frequency so the swell never looks like a uniform sinusoid.
//! Height between samples is linearly interpolated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

use super::state::Viewport;

/// Animated height field the player surfs on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveSurface {
    /// Sample points, x strictly increasing at `WAVE_SPACING`
    samples: Vec<Vec2>,
    /// Resting height all samples oscillate around
    baseline: f32,
    /// Accumulated phase scalar (advanced by `advance`)
    time: f32,
}

impl WaveSurface {
    pub fn new(viewport: Viewport) -> Self {
        let mut surface = Self {
            samples: Vec::new(),
            baseline: 0.0,
            time: 0.0,
        };
        surface.initialize(viewport);
        surface
    }

    /// Regenerate the sample sequence for a (possibly new) viewport.
    ///
    /// Full reinitialization: samples return to the baseline and the
    /// phase scalar resets, so the animation restarts from zero. Called
    /// on session start and on viewport resize.
    pub fn initialize(&mut self, viewport: Viewport) {
        self.baseline = viewport.height * WAVE_BASELINE_FACTOR;
        self.time = 0.0;

        let count = (viewport.width / WAVE_SPACING).ceil() as usize + WAVE_MARGIN_SAMPLES;
        self.samples.clear();
        self.samples
            .extend((0..count).map(|i| Vec2::new(i as f32 * WAVE_SPACING, self.baseline)));
    }

    /// Advance the animation by `dt_ms` and recompute all sample heights
    pub fn advance(&mut self, dt_ms: f32) {
        self.time += dt_ms * WAVE_TIME_SCALE;

        let t = self.time;
        let baseline = self.baseline;
        for sample in &mut self.samples {
            let phase = sample.x * WAVE_FREQUENCY + t;
            sample.y = baseline
                + phase.sin() * WAVE_PRIMARY_AMPLITUDE
                + (phase * 0.5).sin() * WAVE_SECONDARY_AMPLITUDE;
        }
    }

    /// Surface height at an arbitrary x, interpolated between the two
    /// bracketing samples. Returns the baseline when fewer than 2 samples
    /// exist or `x` falls outside the sampled domain (no extrapolation).
    pub fn height_at(&self, x: f32) -> f32 {
        if self.samples.len() < 2 {
            return self.baseline;
        }

        for pair in self.samples.windows(2) {
            let (p0, p1) = (pair[0], pair[1]);
            if x >= p0.x && x <= p1.x {
                let t = (x - p0.x) / (p1.x - p0.x);
                return lerp(p0.y, p1.y, t);
            }
        }

        self.baseline
    }

    /// Resting height of the surface
    #[inline]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Sample points, ordered by x (for rendering)
    #[inline]
    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_initialize_sample_layout() {
        let surface = WaveSurface::new(viewport());

        // ceil(800/20) + 10 margin samples
        assert_eq!(surface.samples().len(), 50);
        assert_eq!(surface.baseline(), 600.0 * 0.7);
        for (i, sample) in surface.samples().iter().enumerate() {
            assert_eq!(sample.x, i as f32 * WAVE_SPACING);
            assert_eq!(sample.y, surface.baseline());
        }
    }

    #[test]
    fn test_advance_is_deterministic() {
        let mut a = WaveSurface::new(viewport());
        let mut b = WaveSurface::new(viewport());

        for _ in 0..60 {
            a.advance(16.0);
            b.advance(16.0);
        }
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_height_at_degenerate_surface() {
        let mut surface = WaveSurface::new(viewport());
        surface.samples.truncate(1);
        assert_eq!(surface.height_at(100.0), surface.baseline());
    }

    #[test]
    fn test_height_at_outside_domain() {
        let mut surface = WaveSurface::new(viewport());
        surface.advance(500.0);

        let last_x = surface.samples().last().unwrap().x;
        assert_eq!(surface.height_at(-1.0), surface.baseline());
        assert_eq!(surface.height_at(last_x + 1.0), surface.baseline());
    }

    #[test]
    fn test_height_at_hits_samples_exactly() {
        let mut surface = WaveSurface::new(viewport());
        surface.advance(333.0);

        for sample in surface.samples() {
            assert!((surface.height_at(sample.x) - sample.y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_resize_restarts_animation() {
        let mut surface = WaveSurface::new(viewport());
        surface.advance(1000.0);
        assert!(surface.time > 0.0);

        surface.initialize(Viewport::new(1024.0, 768.0).unwrap());
        assert_eq!(surface.time, 0.0);
        assert_eq!(surface.baseline(), 768.0 * 0.7);
        // ceil(1024/20) = 52, plus 10 margin samples
        assert_eq!(surface.samples().len(), 62);
        assert!(surface.samples().iter().all(|s| s.y == surface.baseline()));
    }

    proptest! {
        /// Every sampled height stays within baseline ± (A1 + A2),
        /// regardless of how the animation has been advanced.
        #[test]
        fn prop_surface_boundedness(steps in 0usize..200, dt in 1.0f32..100.0) {
            let mut surface = WaveSurface::new(viewport());
            for _ in 0..steps {
                surface.advance(dt);
            }

            let bound = WAVE_PRIMARY_AMPLITUDE + WAVE_SECONDARY_AMPLITUDE;
            for sample in surface.samples() {
                prop_assert!(sample.y >= surface.baseline() - bound - 1e-3);
                prop_assert!(sample.y <= surface.baseline() + bound + 1e-3);
            }
        }

        /// Interpolated height never escapes its bracketing samples.
        #[test]
        fn prop_interpolation_bound(advance_ms in 0.0f32..10_000.0, t in 0.0f32..1.0) {
            let mut surface = WaveSurface::new(viewport());
            surface.advance(advance_ms);

            for pair in surface.samples().windows(2) {
                let (p0, p1) = (pair[0], pair[1]);
                let x = p0.x + t * (p1.x - p0.x);
                let h = surface.height_at(x);
                let (lo, hi) = (p0.y.min(p1.y), p0.y.max(p1.y));
                prop_assert!(h >= lo - 1e-3 && h <= hi + 1e-3);
            }
        }
    }
}
