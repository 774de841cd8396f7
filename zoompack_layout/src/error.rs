// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error returned when a hierarchy cannot be laid out.
///
/// Layout fails fast: no partially packed tree is ever returned.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// A leaf has a zero or negative weight after normalization.
    NonPositiveWeight {
        /// Name of the offending leaf.
        name: String,
        /// The weight that was found (missing weights are reported as `0`).
        value: f64,
    },
    /// A leaf weight is NaN or infinite.
    NonFiniteWeight {
        /// Name of the offending leaf.
        name: String,
    },
    /// The packing extent is not strictly positive and finite.
    InvalidExtent {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// The padding is negative or not finite.
    InvalidPadding {
        /// Requested padding.
        padding: f64,
    },
    /// The hierarchy has more nodes than a [`crate::NodeId`] can address.
    TooManyNodes {
        /// Number of nodes in the hierarchy.
        count: usize,
    },
    /// No enclosing circle could be found for a set of siblings.
    ///
    /// This only happens for numerically degenerate input.
    Enclosure,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWeight { name, value } => {
                write!(f, "leaf {name:?} has non-positive weight {value}")
            }
            Self::NonFiniteWeight { name } => write!(f, "leaf {name:?} has a non-finite weight"),
            Self::InvalidExtent { width, height } => {
                write!(f, "invalid pack extent {width}x{height}")
            }
            Self::InvalidPadding { padding } => write!(f, "invalid padding {padding}"),
            Self::TooManyNodes { count } => {
                write!(f, "hierarchy has {count} nodes, more than a tree can index")
            }
            Self::Enclosure => f.write_str("failed to find an enclosing circle"),
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::LayoutError;

    #[test]
    fn display_names_the_leaf() {
        let err = LayoutError::NonPositiveWeight {
            name: "cell".into(),
            value: 0.0,
        };
        assert_eq!(err.to_string(), "leaf \"cell\" has non-positive weight 0");
    }
}
