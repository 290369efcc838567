//! Error types for the percolate core library.
//!
//! Shape violations are reported by [`LatticeError`] at the boundary where a
//! caller hands over an occupancy buffer. [`LabelError`] covers labeller
//! configuration, and [`LabelMapError`] guards rebuilding a [`crate::LabelMap`]
//! from raw labels.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A caller-supplied occupancy buffer did not describe a valid square lattice.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LatticeError {
    /// The buffer shape did not have exactly two dimensions.
    #[error("grid must be 2-dimensional (got rank {rank})")]
    NotTwoDimensional {
        /// Number of dimensions the caller described.
        rank: usize,
    },
    /// The two dimensions differed.
    #[error("grid must be square (N×N); got {rows}×{columns}")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first row whose width differs from the row count.
        columns: usize,
    },
    /// The flat buffer length was not `side²`.
    #[error("grid buffer has {actual} cells but a side of {side} requires {expected}")]
    LengthMismatch {
        /// Side length claimed by the caller.
        side: usize,
        /// Cell count implied by `side`.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// `side²` does not fit the 32-bit label width.
    #[error("grid side {side} exceeds the maximum of {max} supported by 32-bit labels")]
    SideTooLarge {
        /// Side length requested.
        side: usize,
        /// Largest side whose cell count fits in an `i32`.
        max: usize,
    },
    /// Site occupation probability was outside `[0, 1]`.
    #[error("occupation probability must lie in [0, 1] (got {probability})")]
    InvalidProbability {
        /// Probability supplied by the caller.
        probability: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`LatticeError`] variants.
    enum LatticeErrorCode for LatticeError {
        /// The buffer shape did not have exactly two dimensions.
        NotTwoDimensional => NotTwoDimensional { .. } => "LATTICE_NOT_TWO_DIMENSIONAL",
        /// The two dimensions differed.
        NotSquare => NotSquare { .. } => "LATTICE_NOT_SQUARE",
        /// The flat buffer length was not `side²`.
        LengthMismatch => LengthMismatch { .. } => "LATTICE_LENGTH_MISMATCH",
        /// `side²` does not fit the 32-bit label width.
        SideTooLarge => SideTooLarge { .. } => "LATTICE_SIDE_TOO_LARGE",
        /// Site occupation probability was outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "LATTICE_INVALID_PROBABILITY",
    }
}

/// Error type produced when configuring or running a [`crate::Labeler`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LabelError {
    /// The configured maximum side was zero or above [`crate::MAX_SIDE`].
    #[error("max_side must lie in 1..={max} (got {got})")]
    InvalidMaxSide {
        /// Value supplied to the builder.
        got: usize,
        /// Upper bound imposed by the label width.
        max: usize,
    },
    /// The lattice is larger than the labeller was configured to accept.
    #[error("lattice side {side} exceeds the configured max_side of {max_side}")]
    LatticeTooLarge {
        /// Side of the rejected lattice.
        side: usize,
        /// Configured limit.
        max_side: usize,
    },
    /// The lattice could not be constructed from the caller's buffer.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

define_error_codes! {
    /// Stable codes describing [`LabelError`] variants.
    enum LabelErrorCode for LabelError {
        /// The configured maximum side was zero or above [`crate::MAX_SIDE`].
        InvalidMaxSide => InvalidMaxSide { .. } => "LABEL_INVALID_MAX_SIDE",
        /// The lattice is larger than the labeller was configured to accept.
        LatticeTooLarge => LatticeTooLarge { .. } => "LABEL_LATTICE_TOO_LARGE",
        /// The lattice could not be constructed from the caller's buffer.
        LatticeRejected => Lattice(..) => "LABEL_LATTICE_REJECTED",
    }
}

impl LabelError {
    /// Retrieve the inner [`LatticeErrorCode`] when the error originated at the
    /// lattice boundary.
    #[must_use]
    pub const fn lattice_code(&self) -> Option<LatticeErrorCode> {
        match self {
            Self::Lattice(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Raw labels violated the dense, first-appearance labelling contract.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LabelMapError {
    /// `side²` does not fit the 32-bit label width.
    #[error("label map side {side} exceeds the maximum of {max} supported by 32-bit labels")]
    SideTooLarge {
        /// Side length claimed by the caller.
        side: usize,
        /// Largest side whose cell count fits in an `i32`.
        max: usize,
    },
    /// The label buffer length was not `side²`.
    #[error("label buffer has {actual} entries but a side of {side} requires {expected}")]
    LengthMismatch {
        /// Side length claimed by the caller.
        side: usize,
        /// Entry count implied by `side`.
        expected: usize,
        /// Entry count actually supplied.
        actual: usize,
    },
    /// A label was negative.
    #[error("label {label} at index {index} is negative")]
    Negative {
        /// Row-major position of the offending label.
        index: usize,
        /// The offending label.
        label: i32,
    },
    /// A label skipped ahead of the next unused label in row-major order.
    #[error("label {label} at index {index} appears before label {expected}")]
    OutOfOrder {
        /// Row-major position of the offending label.
        index: usize,
        /// The offending label.
        label: i32,
        /// The next label that had not yet been seen.
        expected: i32,
    },
}

/// Convenient alias for results returned by the labeller API.
pub type Result<T> = core::result::Result<T, LabelError>;
