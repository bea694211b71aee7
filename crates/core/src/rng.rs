//! RNG module - piece sources
//!
//! Shape and color are sampled independently and uniformly. Selection is a
//! pure function of an RNG ([`pick_uniform`]) so the engine can be driven by
//! any [`PieceSource`], including a scripted one for deterministic tests.

use crate::types::{Color, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    ///
    /// Scales the full 32-bit output instead of taking a remainder; the low
    /// bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// What to spawn: a catalog entry plus a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSpec {
    pub kind: ShapeKind,
    pub color: Color,
}

impl PieceSpec {
    pub fn new(kind: ShapeKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Uniform, independent choice of shape and color
pub fn pick_uniform(rng: &mut SimpleRng) -> PieceSpec {
    let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
    let color = Color::ALL[rng.next_range(Color::ALL.len() as u32) as usize];
    PieceSpec { kind, color }
}

/// Anything that hands out the next piece to spawn
pub trait PieceSource {
    fn next_spec(&mut self) -> PieceSpec;
}

/// Seeded uniform source used in play
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
    seed: u32,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomSource {
    fn next_spec(&mut self) -> PieceSpec {
        pick_uniform(&mut self.rng)
    }
}

/// Replays a fixed list of pieces, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<PieceSpec>,
    cursor: usize,
}

impl ScriptedSource {
    /// `script` must not be empty
    pub fn new(script: Vec<PieceSpec>) -> Self {
        assert!(!script.is_empty(), "scripted source needs at least one piece");
        Self { script, cursor: 0 }
    }

    /// Every piece has the same color
    pub fn from_kinds(kinds: &[ShapeKind], color: Color) -> Self {
        Self::new(kinds.iter().map(|&kind| PieceSpec { kind, color }).collect())
    }

    /// How many pieces have been handed out
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl PieceSource for ScriptedSource {
    fn next_spec(&mut self) -> PieceSpec {
        let spec = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        spec
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_spec(&mut self) -> PieceSpec {
        (**self).next_spec()
    }
}
