//! Error types shared by the engine and its rendering boundary

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Cell;

/// Main error type for sampling and export operations
///
/// Geometry violations, overlaps, incomplete tilings, and malformed holes
/// all indicate engine bugs: a corrupted combinatorial structure has no
/// meaningful retry, so callers discard the run and start a fresh sample.
/// Parameter errors are caller mistakes reported before any computation.
#[derive(Debug)]
pub enum ShuffleError {
    /// A domino's geometry is inconsistent with the current diamond
    GeometryViolation {
        /// Diamond order when the violation surfaced
        order: u32,
        /// Offending cell
        cell: Cell,
        /// What the geometry check expected
        reason: &'static str,
    },

    /// Two dominoes claim the same cell
    OverlappingDominoes {
        /// Diamond order when the overlap surfaced
        order: u32,
        /// The doubly claimed cell
        cell: Cell,
    },

    /// A tiling that should be complete leaves cells uncovered
    IncompleteTiling {
        /// Diamond order of the defective tiling
        order: u32,
        /// How many cells remained uncovered
        uncovered: usize,
        /// One uncovered cell, when available
        example: Option<Cell>,
    },

    /// The post-slide empty region is not a union of aligned 2×2 blocks
    MalformedHole {
        /// Diamond order during creation
        order: u32,
        /// Empty cell that is not a usable block corner
        cell: Cell,
    },

    /// Parameter validation failed before any computation began
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ShuffleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometryViolation {
                order,
                cell,
                reason,
            } => {
                write!(f, "Geometry violation at {cell} (order {order}): {reason}")
            }
            Self::OverlappingDominoes { order, cell } => {
                write!(f, "Two dominoes cover {cell} (order {order})")
            }
            Self::IncompleteTiling {
                order,
                uncovered,
                example,
            } => match example {
                Some(cell) => write!(
                    f,
                    "Tiling of order {order} leaves {uncovered} cells uncovered, e.g. {cell}"
                ),
                None => write!(f, "Tiling of order {order} leaves {uncovered} cells uncovered"),
            },
            Self::MalformedHole { order, cell } => {
                write!(
                    f,
                    "Empty region at {cell} (order {order}) is not an aligned 2x2 block"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ShuffleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShuffleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for sampler results
pub type Result<T> = std::result::Result<T, ShuffleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ShuffleError {
    ShuffleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
