//! Fading trail of the second bob
//!
//! The last `max_trail` samples before a frame are cut into `segments`
//! sub-paths of `s = max_trail / segments` samples each (plus one shared
//! endpoint so consecutive segments join). Older segments are more
//! transparent: segment `j` gets `alpha = (j / segments)^2`, so the trail
//! fades in faster than linearly toward the bob.

use super::error::SimulationError;
use super::states::NVec2;

pub const DEFAULT_TRAIL_SEGMENTS: usize = 20;

/// One alpha-blended piece of the trail
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSegment {
    pub points: Vec<NVec2>,
    pub alpha: f64, // opacity in [0, 1]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailWindower {
    max_trail: usize, // history window in samples
    segments: usize,  // number of segments the window is cut into
}

impl TrailWindower {
    pub fn new(max_trail: usize, segments: usize) -> Result<Self, SimulationError> {
        if segments == 0 {
            return Err(SimulationError::InvalidTrailSegments);
        }
        Ok(Self { max_trail, segments })
    }

    /// Window covering `trail_secs` seconds of samples spaced by `dt`.
    /// The sample count is truncated, not rounded.
    pub fn from_duration(trail_secs: f64, dt: f64, segments: usize) -> Result<Self, SimulationError> {
        if !(trail_secs.is_finite() && trail_secs > 0.0) {
            return Err(SimulationError::InvalidParameter { name: "trail_secs", value: trail_secs });
        }
        Self::new((trail_secs / dt) as usize, segments)
    }

    pub fn max_trail(&self) -> usize {
        self.max_trail
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Samples per segment
    pub fn segment_len(&self) -> usize {
        self.max_trail / self.segments
    }

    /// Trail segments ending at `frame`, oldest (most transparent) first.
    ///
    /// Segments that would start before the first sample are skipped, so
    /// early frames get fewer than `segments` entries. Point ranges are
    /// clamped to `bob2`.
    pub fn trail_at(&self, frame: usize, bob2: &[NVec2]) -> Vec<TrailSegment> {
        let ns = self.segments;
        let s = self.segment_len();

        (0..ns)
            .filter_map(|j| {
                let back = (ns - j) * s;
                let imin = frame.checked_sub(back)?;
                let imax = (imin + s + 1).min(bob2.len());
                let imin = imin.min(imax);

                let frac = j as f64 / ns as f64;
                Some(TrailSegment {
                    points: bob2[imin..imax].to_vec(),
                    alpha: frac * frac,
                })
            })
            .collect()
    }
}
