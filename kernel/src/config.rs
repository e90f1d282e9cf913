use crate::{Error, Namespace, Result};
use std::collections::HashMap;

/// Symbolic name of a point, a length or an angle.
pub type Ref = String;

/// Value store of a resolution run.
///
/// The namespaces are independent, the same name may be bound to a point and
/// a length at the same time.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Config {
    /// Joint positions
    pub points: HashMap<Ref, [f64; 2]>,
    /// Link lengths
    pub lengths: HashMap<Ref, f64>,
    /// Drive angles in radians
    pub angles: HashMap<Ref, f64>,
}

impl Config {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a point.
    pub fn point(&self, name: &str) -> Option<[f64; 2]> {
        self.points.get(name).copied()
    }

    /// Get a length.
    pub fn length(&self, name: &str) -> Option<f64> {
        self.lengths.get(name).copied()
    }

    /// Get an angle.
    pub fn angle(&self, name: &str) -> Option<f64> {
        self.angles.get(name).copied()
    }

    /// Get a length that must be seeded before the run.
    pub fn length_strict(&self, name: &str) -> Result<f64> {
        self.length(name).ok_or_else(|| Error::missing_length(name))
    }

    /// Get an angle that must be seeded before the run.
    pub fn angle_strict(&self, name: &str) -> Result<f64> {
        self.angle(name).ok_or_else(|| Error::missing_angle(name))
    }

    /// Bind a point.
    pub fn set_point(&mut self, name: impl Into<Ref>, p: [f64; 2]) {
        self.points.insert(name.into(), p);
    }

    /// Bind a length.
    pub fn set_length(&mut self, name: impl Into<Ref>, len: f64) {
        self.lengths.insert(name.into(), len);
    }

    /// Bind an angle.
    pub fn set_angle(&mut self, name: impl Into<Ref>, a: f64) {
        self.angles.insert(name.into(), a);
    }

    /// Return true if the point is bound.
    pub fn has_point(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    /// Return true if the name is bound in the namespace.
    pub fn has(&self, ns: Namespace, name: &str) -> bool {
        match ns {
            Namespace::Point => self.points.contains_key(name),
            Namespace::Length => self.lengths.contains_key(name),
            Namespace::Angle => self.angles.contains_key(name),
        }
    }
}
