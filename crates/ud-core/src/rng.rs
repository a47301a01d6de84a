//! Randomness injection seam.
//!
//! The engine itself never seeds or owns a concrete generator: every draw
//! goes through [`RandomSource::random_int`], supplied by the host.
//! Determinism is therefore entirely a function of the injected source —
//! the same source state always replays the same run.
//!
//! Two sources are provided: [`SmallRngSource`] for normal operation and
//! [`ScriptedSource`] for tests and reproducible demos.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Host-supplied uniform integer source.
///
/// Implementations must return values uniformly distributed over
/// `[min, max]`, both ends inclusive.  The engine draws exactly one value
/// per active robot per tick, in ascending robot-id order, so a given
/// source state fixes the whole activation schedule.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, inclusive on both ends.
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

// ── SmallRngSource ────────────────────────────────────────────────────────────

/// Deterministic default source backed by `rand::SmallRng`.
pub struct SmallRngSource(SmallRng);

impl SmallRngSource {
    /// Seed deterministically.  The same seed always produces identical runs.
    pub fn new(seed: u64) -> Self {
        SmallRngSource(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for hosts that want extra draws (e.g. to
    /// randomize placement in a demo) without a second generator.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for SmallRngSource {
    #[inline]
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.0.gen_range(min..=max)
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays a fixed sequence of values, wrapping around at the end.
///
/// Values outside the requested range are clamped into it, so a script can
/// be written once and reused across different `[min, max]` queries.  An
/// empty script always yields `min`.
pub struct ScriptedSource {
    values: Vec<i32>,
    next:   usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, next: 0 }
    }

    /// A source that yields `value` forever.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedSource {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v.clamp(min, max)
    }
}
