//! Segment kinds, the geometric computation units of a linkage.
//!
//! A segment binds the roles of its kind (`p0`, `p1`, `len`, ...) to the
//! references of a [`Config`]. Segments sharing a reference share the value,
//! so the segment list describes a dependency graph instead of a chain.
pub use self::{motor::*, passive::*};
use crate::{Config, Result};

mod motor;
mod passive;

/// The capability of a segment kind.
///
/// The [solver](crate::forward_all) only uses this trait, a new joint type
/// is added by implementing it.
pub trait SegmentKind {
    /// Values read from the store.
    type Input;
    /// Values written to the store.
    type Output;

    /// Output reference, for diagnostics.
    fn target(&self) -> &str;

    /// Return true if the output is already in the store.
    fn is_ready(&self, cfg: &Config) -> bool;

    /// Read the input values.
    ///
    /// Return `Ok(None)` if an input point has not been computed yet. Lengths
    /// and angles are seeded before the run, so a missing one is an error.
    fn gather_input(&self, cfg: &Config) -> Result<Option<Self::Input>>;

    /// Pure geometric computation.
    ///
    /// Return `None` if the mechanism cannot be assembled with this input.
    fn solve(&self, input: Self::Input) -> Option<Self::Output>;

    /// Write the output into the store.
    fn commit(&self, cfg: &mut Config, output: Self::Output);
}

/// Input of a [`Segment`].
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentInput {
    /// Motor input
    Motor(MotorInput),
    /// Passive input
    Passive(PassiveInput),
}

/// A segment of the linkage, tagged by its kind.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Driven by an angle
    Motor(Motor),
    /// Closed by two link lengths
    Passive(Passive),
}

impl Segment {
    /// Create a motor segment.
    ///
    /// Output `p2` from the edge `p0 -> p1`, the drive angle `theta` and the
    /// length `len`.
    pub fn motor<S: Into<String>>(p0: S, p1: S, theta: S, len: S, p2: S) -> Self {
        Self::Motor(Motor::new(p0, p1, theta, len, p2))
    }

    /// Create a passive segment.
    ///
    /// Output `p2` where `|p0 p2| = len0` and `|p1 p2| = len1`.
    pub fn passive<S: Into<String>>(p0: S, p1: S, len0: S, len1: S, p2: S) -> Self {
        Self::Passive(Passive::new(p0, p1, len0, len1, p2))
    }
}

impl From<Motor> for Segment {
    fn from(s: Motor) -> Self {
        Self::Motor(s)
    }
}

impl From<Passive> for Segment {
    fn from(s: Passive) -> Self {
        Self::Passive(s)
    }
}

impl SegmentKind for Segment {
    type Input = SegmentInput;
    type Output = [f64; 2];

    fn target(&self) -> &str {
        match self {
            Self::Motor(s) => s.target(),
            Self::Passive(s) => s.target(),
        }
    }

    fn is_ready(&self, cfg: &Config) -> bool {
        match self {
            Self::Motor(s) => s.is_ready(cfg),
            Self::Passive(s) => s.is_ready(cfg),
        }
    }

    fn gather_input(&self, cfg: &Config) -> Result<Option<Self::Input>> {
        let input = match self {
            Self::Motor(s) => s.gather_input(cfg)?.map(SegmentInput::Motor),
            Self::Passive(s) => s.gather_input(cfg)?.map(SegmentInput::Passive),
        };
        Ok(input)
    }

    fn solve(&self, input: Self::Input) -> Option<Self::Output> {
        match (self, input) {
            (Self::Motor(s), SegmentInput::Motor(input)) => s.solve(input),
            (Self::Passive(s), SegmentInput::Passive(input)) => s.solve(input),
            // Only reachable by feeding another segment's input
            _ => None,
        }
    }

    fn commit(&self, cfg: &mut Config, output: Self::Output) {
        match self {
            Self::Motor(s) => s.commit(cfg, output),
            Self::Passive(s) => s.commit(cfg, output),
        }
    }
}
