//! Error types of the linkage resolution.
use thiserror::Error;

/// Value namespace of a [`Config`](crate::Config).
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Namespace {
    /// Joint positions
    Point,
    /// Link lengths
    Length,
    /// Drive angles
    Angle,
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Length => write!(f, "length"),
            Self::Angle => write!(f, "angle"),
        }
    }
}

/// Errors that abort a resolution run.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// A length or angle reference is not bound in the store.
    #[error("missing {namespace} `{name}`")]
    Missing {
        /// Namespace of the reference.
        namespace: Namespace,
        /// The reference name.
        name: String,
    },

    /// The sweeps stopped making progress before every segment was resolved.
    #[error("unresolved segments {indices:?}: circular or unsatisfiable dependency")]
    Unresolved {
        /// Indices of the unresolved segments.
        indices: Vec<usize>,
    },

    /// Two segments compute the same point.
    #[error("segment {index} computes `{target}` again")]
    Duplicate {
        /// Output reference of the segments.
        target: String,
        /// Index of the later segment.
        index: usize,
    },

    /// The segment cannot be assembled with the given points and lengths.
    #[error("impossible linkage geometry at segment {index} (`{target}`)")]
    Geometry {
        /// Index of the segment.
        index: usize,
        /// Output reference of the segment.
        target: String,
    },
}

impl Error {
    /// Create a missing length error.
    pub fn missing_length(name: impl Into<String>) -> Self {
        Self::Missing { namespace: Namespace::Length, name: name.into() }
    }

    /// Create a missing angle error.
    pub fn missing_angle(name: impl Into<String>) -> Self {
        Self::Missing { namespace: Namespace::Angle, name: name.into() }
    }

    /// Return true if the mechanism just cannot be assembled at this input.
    ///
    /// This is the only error that depends on the drive angles.
    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::Geometry { .. })
    }
}

/// Result type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
